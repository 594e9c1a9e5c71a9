//! Ordered CALLS extraction (§4.2.e). Java's surface syntax has no direct
//! counterpart to Python's call-extraction algorithm, so this walk adapts
//! Python's qualifier taxonomy to Java's `new`/`this.`/`super.`/static- and
//! variable-qualified call shapes (DESIGN.md, "Java CALLS extraction").

use cir_lang::{CallRecord, QualifierKind};
use tree_sitter::Node;

fn text(node: Node, src: &[u8]) -> String {
    node.utf8_text(src).unwrap_or("").to_string()
}

/// Walk a method/constructor body in pre-order, recording one `CallRecord`
/// per `method_invocation` with a member name, in source order starting at 0.
pub fn extract_ordered_calls(body: Node, src: &[u8], src_method_id: &str) -> Vec<CallRecord> {
    let mut out = Vec::new();
    let mut order = 0u32;
    walk(body, src, src_method_id, &mut order, &mut out);
    out
}

fn walk(node: Node, src: &[u8], src_method_id: &str, order: &mut u32, out: &mut Vec<CallRecord>) {
    if node.kind() == "method_invocation" {
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
    let name_node = node.child_by_field_name("name")?;
    let member = text(name_node, src);
    let object = node.child_by_field_name("object");

    let (qualifier_kind, qualifier) = match object {
        None => (QualifierKind::None, None),
        Some(obj) => match obj.kind() {
            "super" => (QualifierKind::Super, None),
            "this" => (QualifierKind::SelfRecv, None),
            "object_creation_expression" => {
                let class_name = obj
                    .child_by_field_name("type")
                    .map(|t| text(t, src))
                    .unwrap_or_default();
                (QualifierKind::New, Some(class_name))
            }
            "identifier" => {
                let name = text(obj, src);
                (qualifier_kind_for_bare_name(&name), Some(name))
            }
            "field_access" => {
                let field_node = obj.child_by_field_name("field");
                let name = field_node.map(|f| text(f, src)).unwrap_or_else(|| text(obj, src));
                (qualifier_kind_for_bare_name(&name), Some(name))
            }
            _ => (QualifierKind::None, None),
        },
    };

    Some(CallRecord {
        src_method_id: src_method_id.to_string(),
        qualifier_kind,
        qualifier,
        member,
        order,
    })
}

fn qualifier_kind_for_bare_name(name: &str) -> QualifierKind {
    let starts_upper = name.chars().next().map(|c| c.is_uppercase()).unwrap_or(false);
    if starts_upper {
        QualifierKind::Static
    } else {
        QualifierKind::Var
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_body(src: &str) -> (tree_sitter::Tree, String) {
        let wrapped = format!("class T {{ void m() {{ {src} }} }}");
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .expect("load java grammar");
        let tree = parser.parse(&wrapped, None).expect("parse");
        (tree, wrapped)
    }

    fn find_block(node: Node) -> Option<Node> {
        if node.kind() == "block" && node.parent().map(|p| p.kind()) == Some("method_declaration") {
            return Some(node);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(found) = find_block(child) {
                return Some(found);
            }
        }
        None
    }

    #[test]
    fn extracts_self_calls_in_order() {
        let (tree, wrapped) = parse_body("this.a(); this.b(); this.c();");
        let root = tree.root_node();
        let body = find_block(root).expect("method body");
        let calls = extract_ordered_calls(body, wrapped.as_bytes(), "method:T:m");
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].member, "a");
        assert_eq!(calls[0].order, 0);
        assert_eq!(calls[1].member, "b");
        assert_eq!(calls[1].order, 1);
        assert_eq!(calls[2].member, "c");
        assert_eq!(calls[2].order, 2);
        assert!(calls.iter().all(|c| c.qualifier_kind == QualifierKind::SelfRecv));
    }

    #[test]
    fn classifies_new_static_and_var() {
        let (tree, wrapped) = parse_body("new Foo().bar(); Helper.util(); worker.run();");
        let root = tree.root_node();
        let body = find_block(root).expect("method body");
        let calls = extract_ordered_calls(body, wrapped.as_bytes(), "method:T:m");
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].qualifier_kind, QualifierKind::New);
        assert_eq!(calls[0].qualifier.as_deref(), Some("Foo"));
        assert_eq!(calls[1].qualifier_kind, QualifierKind::Static);
        assert_eq!(calls[2].qualifier_kind, QualifierKind::Var);
    }
}
