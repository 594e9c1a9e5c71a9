//! Type-display simplification and field/method line formatting (§4.4.a),
//! grounded on `uml_rules.py`'s `VISIBILITY_MAP`/`_clean_type_for_display`.

use cir_core::{Field, Method, Parameter};
use regex::Regex;
use std::sync::OnceLock;

fn generic_args_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<.*?>").unwrap())
}

/// Collapse generic arguments to `<>` and shorten a dotted path to its
/// final segment, matching `_clean_type_for_display`.
pub fn clean_type_for_display(raw: &str) -> String {
    let collapsed = generic_args_re().replace_all(raw, "<>");
    let (base, suffix) = match collapsed.find('<') {
        Some(idx) => (&collapsed[..idx], &collapsed[idx..]),
        None => (collapsed.as_ref(), ""),
    };
    let short = base.rsplit('.').next().unwrap_or(base);
    format!("{short}{suffix}")
}

/// `{static}`/`{abstract}` tags, in that order, from a modifiers list.
fn modifier_tags(modifiers: &[String]) -> String {
    let mut tags = Vec::new();
    if modifiers.iter().any(|m| m == "static") {
        tags.push("{static}");
    }
    if modifiers.iter().any(|m| m == "abstract") {
        tags.push("{abstract}");
    }
    tags.join(" ")
}

/// `<sigil> [<tags>] <name> : <display-type>[<mult-suffix>]` (§4.4.a).
pub fn format_field(field: &Field) -> String {
    let sigil = field.visibility.sigil();
    let tags = modifier_tags(&field.modifiers);
    let display_type = clean_type_for_display(&field.type_name);
    let mult_suffix = field
        .multiplicity
        .filter(|m| !m.is_default())
        .map(|m| format!("[{}]", m.as_str()))
        .unwrap_or_default();

    if tags.is_empty() {
        format!("{sigil} {} : {display_type}{mult_suffix}", field.name)
    } else {
        format!("{sigil} {tags} {} : {display_type}{mult_suffix}", field.name)
    }
}

/// `<sigil> [<tags>] <name>(<params>) : <display-return>` (§4.4.a).
/// Constructors are filtered out by the caller before this is reached.
pub fn format_method(method: &Method, params: &[&Parameter]) -> String {
    let sigil = method.visibility.sigil();
    let tags = modifier_tags(&method.modifiers);
    let params_str = params
        .iter()
        .map(|p| format!("{}: {}", p.name, clean_type_for_display(&p.type_name)))
        .collect::<Vec<_>>()
        .join(", ");
    let ret = clean_type_for_display(&method.return_type);

    if tags.is_empty() {
        format!("{sigil} {}({params_str}) : {ret}", method.name)
    } else {
        format!("{sigil} {tags} {}({params_str}) : {ret}", method.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_generics_and_shortens_dotted_path() {
        assert_eq!(clean_type_for_display("java.util.List<com.acme.Order>"), "List<>");
        assert_eq!(clean_type_for_display("com.acme.Order"), "Order");
        assert_eq!(clean_type_for_display("int"), "int");
    }

    #[test]
    fn formats_field_with_tags_and_multiplicity() {
        let field = Field {
            id: "field:X:items".into(),
            name: "items".into(),
            type_name: "com.acme.Item".into(),
            raw_type: "List<com.acme.Item>".into(),
            visibility: cir_core::Visibility::Private,
            modifiers: vec!["static".to_string()],
            multiplicity: Some(cir_core::Multiplicity::ZeroOrMore),
        };
        assert_eq!(format_field(&field), "- {static} items : Item[0..*]");
    }

    #[test]
    fn formats_field_without_tags_or_multiplicity() {
        let field = Field {
            id: "field:X:total".into(),
            name: "total".into(),
            type_name: "int".into(),
            raw_type: "int".into(),
            visibility: cir_core::Visibility::Public,
            modifiers: vec![],
            multiplicity: Some(cir_core::Multiplicity::One),
        };
        assert_eq!(format_field(&field), "+ total : int");
    }
}
