//! Top-level type declaration extraction (§4.2.a-d): class/interface/enum
//! bodies, their fields, methods, constructors, and pending extends/
//! implements references.

use crate::calls::extract_ordered_calls;
use crate::modifiers::{collect_modifiers, is_abstract, is_final, is_static, visibility_from_modifiers};
use cir_core::{ctor_id, field_id, fqn, method_id, param_id, type_id, Field, Method, Parameter, TypeDecl, TypeKind};
use cir_lang::{resolve_annotation, CallRecord, Unit, UnitMethod};
use tree_sitter::Node;

fn text(node: Node, src: &[u8]) -> String {
    node.utf8_text(src).unwrap_or("").to_string()
}

/// A type node's named children that aren't a list wrapper are themselves
/// the sole type reference; a wrapper (`type_list`) yields each named child.
fn extract_type_texts(node: Node, src: &[u8]) -> Vec<String> {
    let count = node.named_child_count();
    if count == 0 {
        return vec![text(node, src)];
    }
    (0..count)
        .filter_map(|i| node.named_child(i))
        .map(|n| text(n, src))
        .collect()
}

fn single_named_child<'a>(node: Node<'a>) -> Option<Node<'a>> {
    if node.named_child_count() == 1 {
        node.named_child(0)
    } else {
        None
    }
}

/// Process one top-level `class_declaration` / `interface_declaration` /
/// `enum_declaration` node into a `Unit`. Returns `None` if the declaration
/// has no name (malformed input the grammar still accepted).
pub fn process_type_decl(
    node: Node,
    src: &[u8],
    package: Option<&str>,
    path: &str,
    kind: TypeKind,
) -> Option<Unit> {
    let name_node = node.child_by_field_name("name")?;
    let short_name = text(name_node, src);

    let modifiers = collect_modifiers(node.child_by_field_name("modifiers"), src);
    let visibility = visibility_from_modifiers(&modifiers);
    let type_is_abstract = is_abstract(&modifiers) || kind == TypeKind::Interface;
    let type_is_final = is_final(&modifiers);

    let full_name = fqn(package, &short_name);
    let type_decl = TypeDecl {
        id: type_id(&full_name),
        name: short_name,
        kind,
        visibility,
        package: package.map(str::to_string),
        modifiers,
        is_abstract: type_is_abstract,
        is_final: type_is_final,
    };
    let mut unit = Unit::new(type_decl, package.map(str::to_string), path.to_string());

    // `extends Foo` on a class.
    if let Some(superclass) = node.child_by_field_name("superclass") {
        let type_node = superclass.child_by_field_name("type").or_else(|| single_named_child(superclass));
        if let Some(type_node) = type_node {
            unit.extends.push(text(type_node, src));
        }
    }

    // `implements A, B` on a class.
    if let Some(super_interfaces) = node.child_by_field_name("interfaces") {
        let list = super_interfaces
            .child_by_field_name("types")
            .unwrap_or(super_interfaces);
        unit.implements.extend(extract_type_texts(list, src));
    }

    // `extends A, B` on an interface (interface-extends-interface is still
    // a supertype relationship, so it is recorded as `extends` like a class).
    if let Some(extends_interfaces) = node.child_by_field_name("superinterfaces") {
        let list = extends_interfaces
            .child_by_field_name("types")
            .unwrap_or(extends_interfaces);
        unit.extends.extend(extract_type_texts(list, src));
    }

    if let Some(body) = node.child_by_field_name("body") {
        process_body(body, src, &full_name, kind, &mut unit);
    }

    Some(unit)
}

fn process_body(body: Node, src: &[u8], type_fqn: &str, type_kind: TypeKind, unit: &mut Unit) {
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        match child.kind() {
            "field_declaration" => process_field(child, src, type_fqn, unit),
            "method_declaration" => {
                if let Some(m) = process_method(child, src, type_fqn, type_kind) {
                    unit.methods.push(m);
                }
            }
            "constructor_declaration" => {
                if let Some(m) = process_constructor(child, src, type_fqn) {
                    unit.methods.push(m);
                }
            }
            _ => {}
        }
    }
}

fn process_field(node: Node, src: &[u8], type_fqn: &str, unit: &mut Unit) {
    let modifiers = collect_modifiers(node.child_by_field_name("modifiers"), src);
    let visibility = visibility_from_modifiers(&modifiers);
    let Some(type_node) = node.child_by_field_name("type") else {
        return;
    };
    let base_raw_type = text(type_node, src);

    let mut cursor = node.walk();
    for declarator in node.children_by_field_name("declarator", &mut cursor) {
        let Some(name_node) = declarator.child_by_field_name("name") else {
            continue;
        };
        let field_name = text(name_node, src);
        let raw_type = if declarator.child_by_field_name("dimensions").is_some() {
            format!("{base_raw_type}[]")
        } else {
            base_raw_type.clone()
        };
        let (type_name, raw_type, multiplicity) = resolve_annotation(&raw_type);

        unit.fields.push(Field {
            id: field_id(type_fqn, &field_name),
            name: field_name,
            type_name,
            raw_type,
            visibility,
            modifiers: modifiers.clone(),
            multiplicity,
        });
    }
}

fn process_parameters(node: Node, src: &[u8], type_fqn: &str, method_name: &str) -> Vec<Parameter> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    for param in node.children(&mut cursor) {
        if param.kind() != "formal_parameter" && param.kind() != "spread_parameter" {
            continue;
        }
        let (Some(name_node), Some(type_node)) =
            (param.child_by_field_name("name"), param.child_by_field_name("type"))
        else {
            continue;
        };
        let name = text(name_node, src);
        let mut raw_type = text(type_node, src);
        if param.kind() == "spread_parameter" {
            raw_type = format!("{raw_type}[]");
        }
        let (type_name, raw_type, _multiplicity) = resolve_annotation(&raw_type);
        out.push(Parameter {
            id: param_id(type_fqn, method_name, &name),
            name,
            type_name,
            raw_type,
        });
    }
    out
}

fn process_method(node: Node, src: &[u8], type_fqn: &str, type_kind: TypeKind) -> Option<UnitMethod> {
    let name_node = node.child_by_field_name("name")?;
    let name = text(name_node, src);

    let modifiers = collect_modifiers(node.child_by_field_name("modifiers"), src);
    let visibility = visibility_from_modifiers(&modifiers);
    let has_body = node.child_by_field_name("body").is_some();
    let method_is_abstract = is_abstract(&modifiers) || (type_kind == TypeKind::Interface && !has_body);

    let raw_return = node
        .child_by_field_name("type")
        .map(|n| text(n, src))
        .unwrap_or_else(|| "void".to_string());
    let (return_type, raw_return_type) = if raw_return == "void" {
        ("void".to_string(), "void".to_string())
    } else {
        let (logical, raw, _) = resolve_annotation(&raw_return);
        (logical, raw)
    };

    let parameters = node
        .child_by_field_name("parameters")
        .map(|p| process_parameters(p, src, type_fqn, &name))
        .unwrap_or_default();

    let method_node_id = method_id(type_fqn, &name);
    let calls: Vec<CallRecord> = node
        .child_by_field_name("body")
        .map(|body| extract_ordered_calls(body, src, &method_node_id))
        .unwrap_or_default();

    Some(UnitMethod {
        method: Method {
            id: method_node_id,
            name,
            return_type,
            raw_return_type,
            visibility,
            modifiers,
            is_constructor: false,
            is_static: is_static(&modifiers),
            is_abstract: method_is_abstract,
            is_final: is_final(&modifiers),
        },
        parameters,
        calls,
    })
}

fn process_constructor(node: Node, src: &[u8], type_fqn: &str) -> Option<UnitMethod> {
    let name_node = node.child_by_field_name("name")?;
    let name = text(name_node, src);

    let modifiers = collect_modifiers(node.child_by_field_name("modifiers"), src);
    let visibility = visibility_from_modifiers(&modifiers);

    let parameters = node
        .child_by_field_name("parameters")
        .map(|p| process_parameters(p, src, type_fqn, &name))
        .unwrap_or_default();

    let method_node_id = ctor_id(type_fqn, &name);
    let calls: Vec<CallRecord> = node
        .child_by_field_name("body")
        .map(|body| extract_ordered_calls(body, src, &method_node_id))
        .unwrap_or_default();

    Some(UnitMethod {
        method: Method {
            id: method_node_id,
            name,
            return_type: "void".to_string(),
            raw_return_type: "<constructor>".to_string(),
            visibility,
            modifiers,
            is_constructor: true,
            is_static: false,
            is_abstract: false,
            is_final: false,
        },
        parameters,
        calls,
    })
}
