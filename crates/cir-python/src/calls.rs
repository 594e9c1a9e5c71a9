//! Ordered CALLS extraction (§4.2.e), grounded directly on
//! `python_adapter.py`'s `_extract_ordered_calls`/`CallVisitor`.

use cir_lang::{CallRecord, QualifierKind};
use tree_sitter::Node;

fn text(node: Node, src: &[u8]) -> String {
    node.utf8_text(src).unwrap_or("").to_string()
}

fn starts_uppercase(name: &str) -> bool {
    name.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}

/// Walk a function/method body in pre-order, recording one `CallRecord` per
/// `call` expression with a resolvable function/member, in source order.
pub fn extract_ordered_calls(body: Node, src: &[u8], src_method_id: &str) -> Vec<CallRecord> {
    let mut out = Vec::new();
    let mut order = 0u32;
    walk(body, src, src_method_id, &mut order, &mut out);
    out
}

fn walk(node: Node, src: &[u8], src_method_id: &str, order: &mut u32, out: &mut Vec<CallRecord>) {
    if node.kind() == "call" {
        if let Some(record) = classify(node, src, src_method_id, *order) {
            out.push(record);
            *order += 1;
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, src, src_method_id, order, out);
    }
}

fn classify(node: Node, src: &[u8], src_method_id: &str, order: u32) -> Option<CallRecord> {
    let func = node.child_by_field_name("function")?;

    match func.kind() {
        "attribute" => {
            let object = func.child_by_field_name("object")?;
            let member = text(func.child_by_field_name("attribute")?, src);

            let (qualifier_kind, qualifier) = if is_super_call(object, src) {
                (QualifierKind::Super, None)
            } else if object.kind() == "identifier" {
                let name = text(object, src);
                match name.as_str() {
                    "self" => (QualifierKind::SelfRecv, None),
                    "cls" => (QualifierKind::Cls, None),
                    _ if !starts_uppercase(&name) => (QualifierKind::Var, Some(name)),
                    _ => (QualifierKind::Static, Some(name)),
                }
            } else {
                return None;
            };

            Some(CallRecord {
                src_method_id: src_method_id.to_string(),
                qualifier_kind,
                qualifier,
                member,
                order,
            })
        }
        "identifier" => {
            let name = text(func, src);
            let qualifier_kind = if starts_uppercase(&name) {
                QualifierKind::New
            } else {
                QualifierKind::None
            };
            Some(CallRecord {
                src_method_id: src_method_id.to_string(),
                qualifier_kind,
                qualifier: Some(name.clone()),
                member: name,
                order,
            })
        }
        _ => None,
    }
}

fn is_super_call(node: Node, src: &[u8]) -> bool {
    if node.kind() != "call" {
        return false;
    }
    node.child_by_field_name("function")
        .map(|f| f.kind() == "identifier" && text(f, src) == "super")
        .unwrap_or(false)
}
