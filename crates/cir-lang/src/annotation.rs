//! Shared pieces of the type-annotation resolution table (§4.2.d) and the
//! resolver's primitive set (§4.3), reused by every adapter and the resolver
//! so the two never drift out of agreement on what counts as "primitive" or
//! "bare container".

/// Language-neutral primitive and built-in names the resolver skips when
/// deciding whether a type reference is worth resolving to a TypeDecl.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "int", "long", "short", "byte", "float", "double", "boolean", "bool", "char", "str", "string",
    "void", "None", "NoneType", "Any", "object",
];

/// Bare container names with no type argument, which fall through to the
/// "bare container name (no argument)" row of §4.2.d rather than being
/// treated as a reference to a user type.
pub const BARE_CONTAINER_NAMES: &[&str] = &[
    "list", "List", "set", "Set", "dict", "Dict", "map", "Map", "tuple", "Tuple", "collection",
    "Collection",
];

/// Generic-container keywords recognized across both adapters when an
/// annotation carries a single type argument (§4.2.d "list/set/sequence/
/// deque/tuple generic of T").
pub const SEQUENCE_CONTAINER_NAMES: &[&str] = &[
    "List", "list", "Set", "set", "Sequence", "sequence", "Deque", "deque", "Tuple", "tuple",
    "Collection", "collection", "FrozenSet", "frozenset",
];

/// Mapping/dict-shaped container keywords (§4.2.d "dict/mapping generic").
pub const MAPPING_CONTAINER_NAMES: &[&str] = &["Dict", "dict", "Map", "map", "Mapping", "mapping"];

/// Whether `name` is in the fixed primitive set the resolver never tries to
/// resolve to a TypeDecl (§4.3 "Primitive set").
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name) || BARE_CONTAINER_NAMES.contains(&name)
}

/// Whether `name` names a sequence-like generic container.
pub fn is_sequence_container(name: &str) -> bool {
    SEQUENCE_CONTAINER_NAMES.contains(&name)
}

/// Whether `name` names a mapping-like generic container.
pub fn is_mapping_container(name: &str) -> bool {
    MAPPING_CONTAINER_NAMES.contains(&name)
}

/// Whether `name` is recognized as a bare container with no type argument.
pub fn is_bare_container(name: &str) -> bool {
    BARE_CONTAINER_NAMES.contains(&name)
}

/// The final, dotted-path-shortening segment of a surface type name, used
/// wherever a logical type is "the short name of T" (§4.2.d).
pub fn short_name(raw: &str) -> &str {
    raw.rsplit('.').next().unwrap_or(raw)
}

/// Resolve a non-empty, already-trimmed surface type annotation to
/// `(logical, raw, multiplicity)` per the §4.2.d mapping table. Shared by
/// both adapters since the table's shapes (array, optional/union, generic
/// container, bare container, fully-qualified/class) are syntax-agnostic
/// modulo bracket style, which this function detects rather than assumes.
///
/// Callers are responsible for the "absent" row: this function has no
/// representation for "no annotation at all".
pub fn resolve_annotation(raw: &str) -> (String, String, Option<crate::Multiplicity>) {
    use crate::Multiplicity;

    let raw_out = raw.to_string();
    let trimmed = raw.trim();

    if let Some(inner) = strip_array_suffix(trimmed) {
        let logical = short_name(inner.trim()).to_string();
        return (logical, raw_out, Some(Multiplicity::ZeroOrMore));
    }

    if let Some((name, inner)) = container_prefix_and_inner(trimmed) {
        if name.eq_ignore_ascii_case("optional") {
            let logical = short_name(inner.trim()).to_string();
            return (logical, raw_out, Some(Multiplicity::ZeroOrOne));
        }

        if name == "Union" {
            let args = split_top_level_args(&inner);
            if args.len() == 2 {
                let none_arm = args.iter().position(|a| a.trim() == "None");
                if let Some(none_idx) = none_arm {
                    let other = &args[1 - none_idx];
                    let logical = short_name(other.trim()).to_string();
                    return (logical, raw_out, Some(Multiplicity::ZeroOrOne));
                }
            }
            // More than two arms, or no `None` arm: not a recognized
            // optional shape. Fall through to the bare fully-qualified/class
            // row using the full surface text as both logical and raw.
            return (raw_out.clone(), raw_out, Some(Multiplicity::One));
        }

        if is_mapping_container(&name) {
            return ("Any".to_string(), raw_out, Some(Multiplicity::ZeroOrMore));
        }

        if is_sequence_container(&name) {
            let args = split_top_level_args(&inner);
            let first = args.first().map(|s| s.trim()).unwrap_or_else(|| inner.trim());
            let logical = short_name(first).to_string();
            return (logical, raw_out, Some(Multiplicity::OneOrMore));
        }

        // An unrecognized generic container (e.g. a user-defined generic
        // class): treat the container name itself as the logical type.
        let logical = short_name(&name).to_string();
        return (logical, raw_out, Some(Multiplicity::One));
    }

    if is_bare_container(trimmed) {
        return (trimmed.to_string(), raw_out, Some(Multiplicity::ZeroOrMore));
    }

    let logical = short_name(trimmed).to_string();
    (logical, raw_out, Some(Multiplicity::One))
}

/// Strip one or more trailing `[]` pairs, returning the element type text if
/// at least one pair was stripped.
fn strip_array_suffix(s: &str) -> Option<&str> {
    let mut rest = s.trim_end();
    let mut stripped_any = false;
    loop {
        if let Some(pre) = rest.strip_suffix("[]") {
            rest = pre.trim_end();
            stripped_any = true;
        } else {
            break;
        }
    }
    if stripped_any {
        Some(rest)
    } else {
        None
    }
}

/// Detect a `Name<Inner>` or `Name[Inner]` generic-container shape spanning
/// the whole string, returning the container name and its argument list text.
fn container_prefix_and_inner(s: &str) -> Option<(String, String)> {
    let open = if s.contains('<') {
        '<'
    } else if s.contains('[') {
        '['
    } else {
        return None;
    };
    let close = if open == '<' { '>' } else { ']' };
    let open_idx = s.find(open)?;
    if !s.ends_with(close) {
        return None;
    }
    let name = s[..open_idx].trim();
    if name.is_empty() {
        return None;
    }
    let inner = &s[open_idx + open.len_utf8()..s.len() - close.len_utf8()];
    Some((name.to_string(), inner.to_string()))
}

/// Split a generic argument list on top-level commas, respecting nested
/// brackets (`Dict[str, List[int]]` splits into one argument, not two).
fn split_top_level_args(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '<' | '[' | '(' => depth += 1,
            '>' | ']' | ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(s[start..i].to_string());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(s[start..].to_string());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_recognized() {
        assert!(is_primitive("int"));
        assert!(is_primitive("Any"));
        assert!(is_primitive("list"));
        assert!(!is_primitive("Order"));
    }

    #[test]
    fn short_name_strips_package() {
        assert_eq!(short_name("com.acme.Order"), "Order");
        assert_eq!(short_name("Order"), "Order");
    }

    #[test]
    fn container_classification() {
        assert!(is_sequence_container("List"));
        assert!(is_mapping_container("Dict"));
        assert!(!is_sequence_container("Dict"));
        assert!(is_bare_container("set"));
    }

    #[test]
    fn resolve_plain_class() {
        let (logical, raw, mult) = resolve_annotation("Item");
        assert_eq!(logical, "Item");
        assert_eq!(raw, "Item");
        assert_eq!(mult, Some(crate::Multiplicity::One));
    }

    #[test]
    fn resolve_fully_qualified() {
        let (logical, _, mult) = resolve_annotation("com.acme.Item");
        assert_eq!(logical, "Item");
        assert_eq!(mult, Some(crate::Multiplicity::One));
    }

    #[test]
    fn resolve_array() {
        let (logical, raw, mult) = resolve_annotation("Item[]");
        assert_eq!(logical, "Item");
        assert_eq!(raw, "Item[]");
        assert_eq!(mult, Some(crate::Multiplicity::ZeroOrMore));
    }

    #[test]
    fn resolve_generic_list() {
        let (logical, _, mult) = resolve_annotation("List<Item>");
        assert_eq!(logical, "Item");
        assert_eq!(mult, Some(crate::Multiplicity::OneOrMore));
    }

    #[test]
    fn resolve_python_optional_brackets() {
        let (logical, _, mult) = resolve_annotation("Optional[Item]");
        assert_eq!(logical, "Item");
        assert_eq!(mult, Some(crate::Multiplicity::ZeroOrOne));
    }

    #[test]
    fn resolve_union_with_none() {
        let (logical, _, mult) = resolve_annotation("Union[Item, None]");
        assert_eq!(logical, "Item");
        assert_eq!(mult, Some(crate::Multiplicity::ZeroOrOne));
    }

    #[test]
    fn resolve_union_without_none_falls_through() {
        let (logical, raw, mult) = resolve_annotation("Union[Item, Order]");
        assert_eq!(logical, "Union[Item, Order]");
        assert_eq!(raw, "Union[Item, Order]");
        assert_eq!(mult, Some(crate::Multiplicity::One));
    }

    #[test]
    fn resolve_mapping() {
        let (logical, _, mult) = resolve_annotation("Dict[str, Item]");
        assert_eq!(logical, "Any");
        assert_eq!(mult, Some(crate::Multiplicity::ZeroOrMore));
    }

    #[test]
    fn resolve_bare_container() {
        let (logical, _, mult) = resolve_annotation("List");
        assert_eq!(logical, "List");
        assert_eq!(mult, Some(crate::Multiplicity::ZeroOrMore));
    }

    #[test]
    fn resolve_nested_generic_mapping_counts_as_one_arg() {
        let inner_args = split_top_level_args("str, List[int]");
        assert_eq!(inner_args, vec!["str", " List[int]"]);
    }
}
