//! Class-level annotated attributes (PEP 526) and `__init__` self-assignment
//! field synthesis (§4.2.b/d), grounded on `python_adapter.py`'s per-class
//! field walk and `_extract_init_self_fields`/`_infer_rhs_type`.

use crate::modifiers::visibility_from_name;
use cir_core::{field_id, Field, Multiplicity};
use cir_lang::resolve_annotation;
use std::collections::HashSet;
use tree_sitter::Node;

fn text(node: Node, src: &[u8]) -> String {
    node.utf8_text(src).unwrap_or("").to_string()
}

fn unwrap_statement(node: Node) -> Node {
    if node.kind() == "expression_statement" && node.named_child_count() == 1 {
        node.named_child(0).unwrap_or(node)
    } else {
        node
    }
}

/// Class-level `name: Type [= value]` annotated attributes, scanning only
/// the class body's direct statements (not nested function bodies).
pub fn class_level_fields(class_body: Node, src: &[u8], type_fqn: &str) -> Vec<Field> {
    let mut out = Vec::new();
    let mut cursor = class_body.walk();
    for stmt in class_body.children(&mut cursor) {
        let stmt = unwrap_statement(stmt);
        if stmt.kind() != "assignment" {
            continue;
        }
        let Some(left) = stmt.child_by_field_name("left") else { continue };
        if left.kind() != "identifier" {
            continue;
        }
        let Some(type_node) = stmt.child_by_field_name("type") else { continue };

        let name = text(left, src);
        let raw = text(type_node, src);
        let (type_name, raw_type, multiplicity) = resolve_annotation(&raw);
        out.push(Field {
            id: field_id(type_fqn, &name),
            name: name.clone(),
            type_name,
            raw_type,
            visibility: visibility_from_name(&name),
            modifiers: Vec::new(),
            multiplicity,
        });
    }
    out
}

/// Instance fields synthesized from `self.x = ...` / `self.x: Type = ...`
/// assignments anywhere in an `__init__` body, skipping names already
/// captured as class-level annotations.
pub fn init_self_fields(init_body: Node, src: &[u8], type_fqn: &str, already_seen: &HashSet<String>) -> Vec<Field> {
    let mut seen = already_seen.clone();
    let mut out = Vec::new();
    walk(init_body, src, type_fqn, &mut seen, &mut out);
    out
}

fn walk(node: Node, src: &[u8], type_fqn: &str, seen: &mut HashSet<String>, out: &mut Vec<Field>) {
    if node.kind() == "assignment" {
        if let Some(field) = self_assignment_field(node, src, type_fqn, seen) {
            out.push(field);
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, src, type_fqn, seen, out);
    }
}

fn self_assignment_field(node: Node, src: &[u8], type_fqn: &str, seen: &mut HashSet<String>) -> Option<Field> {
    let left = node.child_by_field_name("left")?;
    if left.kind() != "attribute" {
        return None;
    }
    let object = left.child_by_field_name("object")?;
    if object.kind() != "identifier" || text(object, src) != "self" {
        return None;
    }
    let name = text(left.child_by_field_name("attribute")?, src);
    if !seen.insert(name.clone()) {
        return None;
    }

    let (type_name, raw_type, multiplicity) = if let Some(type_node) = node.child_by_field_name("type") {
        resolve_annotation(&text(type_node, src))
    } else if let Some(value) = node.child_by_field_name("right") {
        infer_rhs_type(value, src)
    } else {
        ("Any".to_string(), "Any".to_string(), None)
    };

    Some(Field {
        id: field_id(type_fqn, &name),
        name: name.clone(),
        type_name,
        raw_type,
        visibility: visibility_from_name(&name),
        modifiers: Vec::new(),
        multiplicity,
    })
}

/// Best-effort RHS type inference for un-annotated `self.x = value`
/// assignments, grounded on `_infer_rhs_type`.
fn infer_rhs_type(value: Node, src: &[u8]) -> (String, String, Option<Multiplicity>) {
    match value.kind() {
        "string" => ("str".to_string(), "str".to_string(), Some(Multiplicity::One)),
        "integer" => ("int".to_string(), "int".to_string(), Some(Multiplicity::One)),
        "float" => ("float".to_string(), "float".to_string(), Some(Multiplicity::One)),
        "true" | "false" => ("bool".to_string(), "bool".to_string(), Some(Multiplicity::One)),
        "none" => ("None".to_string(), "None".to_string(), Some(Multiplicity::ZeroOrOne)),
        "list" | "list_comprehension" => ("list".to_string(), "list".to_string(), Some(Multiplicity::ZeroOrMore)),
        "set" | "set_comprehension" => ("set".to_string(), "set".to_string(), Some(Multiplicity::ZeroOrMore)),
        "dictionary" | "dictionary_comprehension" => {
            ("dict".to_string(), "dict".to_string(), Some(Multiplicity::ZeroOrMore))
        }
        "call" => {
            let name = value
                .child_by_field_name("function")
                .and_then(|f| match f.kind() {
                    "identifier" => Some(text(f, src)),
                    "attribute" => f.child_by_field_name("attribute").map(|n| text(n, src)),
                    _ => None,
                })
                .unwrap_or_else(|| "Any".to_string());
            if name == "Any" {
                ("Any".to_string(), "Any".to_string(), None)
            } else {
                (name.clone(), name, Some(Multiplicity::One))
            }
        }
        _ => ("Any".to_string(), "Any".to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse(src: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .expect("load python grammar");
        parser.parse(src, None).expect("parse")
    }

    fn find_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
        if node.kind() == kind {
            return Some(node);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(found) = find_kind(child, kind) {
                return Some(found);
            }
        }
        None
    }

    #[test]
    fn class_level_annotated_fields() {
        let src = "class Order:\n    total: int\n    items: List[str]\n";
        let tree = parse(src);
        let body = find_kind(tree.root_node(), "block").expect("class body");
        let fields = class_level_fields(body, src.as_bytes(), "Order");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "total");
        assert_eq!(fields[1].type_name, "str");
    }

    #[test]
    fn init_self_assignment_fields_inferred() {
        let src = "class Order:\n    def __init__(self):\n        self.total = 0\n        self.items = []\n";
        let tree = parse(src);
        let func = find_kind(tree.root_node(), "function_definition").expect("init");
        let body = func.child_by_field_name("body").expect("body");
        let fields = init_self_fields(body, src.as_bytes(), "Order", &HashSet::new());
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "total");
        assert_eq!(fields[0].type_name, "int");
        assert_eq!(fields[1].name, "items");
        assert_eq!(fields[1].type_name, "list");
    }
}
