//! Modifier-token collection and the visibility/flag derivation rules of
//! §4.2.a (priority `public > private > protected > package`).

use cir_core::Visibility;
use tree_sitter::Node;

/// Collect the keyword modifier tokens (`public`, `static`, `abstract`, ...)
/// attached to a declaration's `modifiers` child, if any. Annotations
/// (`@Override`, `@Deprecated`, ...) are not modifier keywords and are
/// skipped.
pub fn collect_modifiers(modifiers_node: Option<Node>, src: &[u8]) -> Vec<String> {
    const KEYWORDS: &[&str] = &[
        "public",
        "private",
        "protected",
        "static",
        "final",
        "abstract",
        "native",
        "synchronized",
        "transient",
        "volatile",
        "strictfp",
        "default",
    ];

    let Some(node) = modifiers_node else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let kind = child.kind();
        if KEYWORDS.contains(&kind) {
            out.push(kind.to_string());
        }
    }
    let _ = src;
    out
}

/// Derive visibility from modifier tokens using the priority
/// `public > private > protected > package` (§4.2.a).
pub fn visibility_from_modifiers(modifiers: &[String]) -> Visibility {
    if modifiers.iter().any(|m| m == "public") {
        Visibility::Public
    } else if modifiers.iter().any(|m| m == "private") {
        Visibility::Private
    } else if modifiers.iter().any(|m| m == "protected") {
        Visibility::Protected
    } else {
        Visibility::Package
    }
}

pub fn is_static(modifiers: &[String]) -> bool {
    modifiers.iter().any(|m| m == "static")
}

pub fn is_abstract(modifiers: &[String]) -> bool {
    modifiers.iter().any(|m| m == "abstract")
}

pub fn is_final(modifiers: &[String]) -> bool {
    modifiers.iter().any(|m| m == "final")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_priority_order() {
        let mods = vec!["static".to_string(), "public".to_string(), "final".to_string()];
        assert_eq!(visibility_from_modifiers(&mods), Visibility::Public);
    }

    #[test]
    fn defaults_to_package() {
        assert_eq!(visibility_from_modifiers(&[]), Visibility::Package);
    }

    #[test]
    fn flags_from_modifiers() {
        let mods = vec!["abstract".to_string(), "final".to_string()];
        assert!(is_abstract(&mods));
        assert!(is_final(&mods));
        assert!(!is_static(&mods));
    }
}
