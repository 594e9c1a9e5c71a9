//! Name-convention visibility, decorator-derived modifier flags, and the
//! ABC interface heuristic (§4.2.c), grounded on
//! `python_adapter.py`'s `_visibility_from_name`/`_method_flags`/
//! `_class_flags`/`_is_abc_interface`.

use tree_sitter::Node;

fn text(node: Node, src: &[u8]) -> String {
    node.utf8_text(src).unwrap_or("").to_string()
}

/// `__x` (not dunder) -> private, `_x` -> protected, else public.
pub fn visibility_from_name(name: &str) -> cir_core::Visibility {
    if name.starts_with("__") && !name.ends_with("__") {
        cir_core::Visibility::Private
    } else if name.starts_with('_') {
        cir_core::Visibility::Protected
    } else {
        cir_core::Visibility::Public
    }
}

/// The final dotted/attribute segment of a decorator expression
/// (`@staticmethod`, `@abc.abstractmethod`, `@dataclass(...)` all resolve to
/// `staticmethod`/`abstractmethod`/`dataclass`).
pub fn decorator_name(decorator: Node, src: &[u8]) -> Option<String> {
    let mut expr = decorator.named_child(0)?;
    if expr.kind() == "call" {
        expr = expr.child_by_field_name("function")?;
    }
    match expr.kind() {
        "attribute" => expr
            .child_by_field_name("attribute")
            .map(|n| text(n, src)),
        "identifier" => Some(text(expr, src)),
        _ => None,
    }
}

fn collect_decorator_names(decorated: Node, src: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut cursor = decorated.walk();
    for child in decorated.children(&mut cursor) {
        if child.kind() == "decorator" {
            if let Some(name) = decorator_name(child, src) {
                out.push(name);
            }
        }
    }
    out
}

/// Returns `(is_static, is_abstract, is_classmethod)` for a function
/// definition, consulting the enclosing `decorated_definition`'s decorators
/// if one wraps it.
pub fn method_flags(decorators: &[String]) -> (bool, bool, bool) {
    let is_static = decorators.iter().any(|d| d == "staticmethod");
    let is_classmethod = decorators.iter().any(|d| d == "classmethod");
    let is_abstract = decorators.iter().any(|d| d == "abstractmethod");
    (is_static, is_abstract, is_classmethod)
}

/// Returns `(is_abstract, is_dataclass)` for a class definition, given its
/// base-class names and decorator names.
pub fn class_flags(base_names: &[String], decorators: &[String]) -> (bool, bool) {
    let is_abstract = base_names.iter().any(|b| b == "ABC");
    let is_dataclass = decorators.iter().any(|d| d == "dataclass");
    (is_abstract, is_dataclass)
}

/// Decorators attached to a function/class, whether or not it's wrapped in
/// a `decorated_definition`.
pub fn decorators_for(node: Node, src: &[u8]) -> Vec<String> {
    match node.parent() {
        Some(parent) if parent.kind() == "decorated_definition" => collect_decorator_names(parent, src),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_from_name_conventions() {
        assert_eq!(visibility_from_name("run"), cir_core::Visibility::Public);
        assert_eq!(visibility_from_name("_run"), cir_core::Visibility::Protected);
        assert_eq!(visibility_from_name("__run"), cir_core::Visibility::Private);
        assert_eq!(visibility_from_name("__init__"), cir_core::Visibility::Public);
    }

    #[test]
    fn method_flags_from_decorators() {
        let decorators = vec!["staticmethod".to_string()];
        assert_eq!(method_flags(&decorators), (true, false, false));
        let decorators = vec!["abstractmethod".to_string()];
        assert_eq!(method_flags(&decorators), (false, true, false));
    }

    #[test]
    fn class_flags_from_bases_and_decorators() {
        let bases = vec!["ABC".to_string()];
        let decorators = vec!["dataclass".to_string()];
        assert_eq!(class_flags(&bases, &decorators), (true, true));
    }
}
