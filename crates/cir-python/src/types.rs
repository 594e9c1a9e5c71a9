//! Top-level class extraction (§4.2.b-e): class/method/parameter structure,
//! base-class bookkeeping, and the ABC interface heuristic, grounded on
//! `python_adapter.py`'s `_process_class`.

use crate::calls::extract_ordered_calls;
use crate::fields::{class_level_fields, init_self_fields};
use crate::modifiers::{class_flags, decorators_for, method_flags, visibility_from_name};
use cir_core::{ctor_id, fqn, method_id, param_id, type_id, Method, Multiplicity, Parameter, TypeDecl, TypeKind};
use cir_lang::{resolve_annotation, CallRecord, Unit, UnitMethod};
use std::collections::HashSet;
use tree_sitter::Node;

fn text(node: Node, src: &[u8]) -> String {
    node.utf8_text(src).unwrap_or("").to_string()
}

fn short_base_name(raw: &str) -> String {
    raw.rsplit('.').next().unwrap_or(raw).to_string()
}

/// Base-class expressions found in a class's `superclasses` argument list,
/// skipping keyword arguments (`metaclass=...`) and the implicit `object`.
fn base_names(node: Node, src: &[u8]) -> Vec<String> {
    let Some(superclasses) = node.child_by_field_name("superclasses") else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut cursor = superclasses.walk();
    for child in superclasses.named_children(&mut cursor) {
        if child.kind() == "keyword_argument" {
            continue;
        }
        let name = short_base_name(text(child, src).trim());
        if name.is_empty() || name == "object" {
            continue;
        }
        out.push(name);
    }
    out
}

/// Process one top-level `class_definition` node into a `Unit`.
pub fn process_class(node: Node, src: &[u8], package: Option<&str>, path: &str) -> Option<Unit> {
    let name_node = node.child_by_field_name("name")?;
    let short_name = text(name_node, src);
    let bases = base_names(node, src);
    let decorators = decorators_for(node, src);
    let (is_abstract_class, _is_dataclass) = class_flags(&bases, &decorators);

    let full_name = fqn(package, &short_name);
    let type_decl = TypeDecl {
        id: type_id(&full_name),
        name: short_name,
        kind: TypeKind::Class,
        visibility: cir_core::Visibility::Public,
        package: package.map(str::to_string),
        modifiers: if is_abstract_class { vec!["abstract".to_string()] } else { Vec::new() },
        is_abstract: is_abstract_class,
        is_final: false,
    };

    let mut unit = Unit::new(type_decl, package.map(str::to_string), path.to_string());

    for base in &bases {
        if base == "ABC" {
            unit.implements.push(base.clone());
        } else {
            unit.extends.push(base.clone());
        }
    }

    if let Some(body) = node.child_by_field_name("body") {
        let fields = class_level_fields(body, src, &full_name);
        let mut seen: HashSet<String> = fields.iter().map(|f| f.name.clone()).collect();
        unit.fields.extend(fields);

        let mut cursor = body.walk();
        for stmt in body.children(&mut cursor) {
            let func = unwrap_function(stmt);
            let Some(func) = func else { continue };
            if let Some(m) = process_method(func, src, &full_name) {
                if m.method.is_constructor {
                    unit.fields.extend(constructor_self_fields(func, src, &full_name, &seen));
                    seen.extend(unit.fields.iter().map(|f| f.name.clone()));
                }
                unit.methods.push(m);
            }
        }
    }

    if is_interface_like(node, src) {
        unit.type_decl.kind = TypeKind::Interface;
    }

    Some(unit)
}

fn unwrap_function(node: Node) -> Option<Node> {
    if node.kind() == "function_definition" {
        Some(node)
    } else if node.kind() == "decorated_definition" {
        node.child_by_field_name("definition").filter(|n| n.kind() == "function_definition")
    } else {
        None
    }
}

/// Heuristic: a class is interface-like if it subclasses `ABC` and every
/// public method on it is `@abstractmethod` (§4.2.c).
fn is_interface_like(node: Node, src: &[u8]) -> bool {
    let bases = base_names(node, src);
    if !bases.iter().any(|b| b == "ABC") {
        return false;
    }
    let Some(body) = node.child_by_field_name("body") else {
        return false;
    };

    let mut public_methods = Vec::new();
    let mut cursor = body.walk();
    for stmt in body.children(&mut cursor) {
        let Some(func) = unwrap_function(stmt) else { continue };
        let Some(name_node) = func.child_by_field_name("name") else { continue };
        let name = text(name_node, src);
        if name.starts_with('_') {
            continue;
        }
        let decorators = decorators_for(func, src);
        let (_, is_abstract, _) = method_flags(&decorators);
        public_methods.push(is_abstract);
    }

    !public_methods.is_empty() && public_methods.iter().all(|a| *a)
}

fn process_method(func: Node, src: &[u8], type_fqn: &str) -> Option<UnitMethod> {
    let name_node = func.child_by_field_name("name")?;
    let name = text(name_node, src);
    let is_constructor = name == "__init__";

    let decorators = decorators_for(func, src);
    let (is_static, is_abstract, is_classmethod) = method_flags(&decorators);

    let mut modifiers = Vec::new();
    if is_static {
        modifiers.push("static".to_string());
    }
    if is_classmethod {
        modifiers.push("classmethod".to_string());
    }
    if is_abstract {
        modifiers.push("abstract".to_string());
    }

    let (return_type, raw_return_type) = match func.child_by_field_name("return_type") {
        Some(type_node) => {
            let (logical, raw, _) = resolve_annotation(&text(type_node, src));
            (logical, raw)
        }
        None => ("Any".to_string(), "Any".to_string()),
    };

    let parameters_node = func.child_by_field_name("parameters");
    let parameters = parameters_node
        .map(|p| process_parameters(p, src, type_fqn, &name))
        .unwrap_or_default();

    let method_node_id = if is_constructor {
        ctor_id(type_fqn, &name)
    } else {
        method_id(type_fqn, &name)
    };

    let calls: Vec<CallRecord> = func
        .child_by_field_name("body")
        .map(|body| extract_ordered_calls(body, src, &method_node_id))
        .unwrap_or_default();

    let visibility = visibility_from_name(&name);

    Some(UnitMethod {
        method: Method {
            id: method_node_id,
            name,
            return_type,
            raw_return_type,
            visibility,
            modifiers,
            is_constructor,
            is_static,
            is_abstract,
            is_final: false,
        },
        parameters,
        calls,
    })
}

fn process_parameters(node: Node, src: &[u8], type_fqn: &str, method_name: &str) -> Vec<Parameter> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    for param in node.named_children(&mut cursor) {
        let (name_node, type_node) = match param.kind() {
            "identifier" => (Some(param), None),
            "typed_parameter" => (
                first_identifier(param),
                param.child_by_field_name("type"),
            ),
            "default_parameter" => (param.child_by_field_name("name"), None),
            "typed_default_parameter" => (
                param.child_by_field_name("name"),
                param.child_by_field_name("type"),
            ),
            _ => (None, None),
        };
        let Some(name_node) = name_node else { continue };
        let name = text(name_node, src);
        if name == "self" || name == "cls" {
            continue;
        }
        let (type_name, raw_type, _multiplicity) = match type_node {
            Some(t) => resolve_annotation(&text(t, src)),
            None => ("Any".to_string(), "Any".to_string(), None::<Multiplicity>),
        };
        out.push(Parameter {
            id: param_id(type_fqn, method_name, &name),
            name,
            type_name,
            raw_type,
        });
    }
    out
}

fn first_identifier(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|c| c.kind() == "identifier")
}

/// Fields synthesized from `__init__`'s `self.x = ...` assignments, to be
/// merged onto a `Unit` once its constructor method has been processed.
pub fn constructor_self_fields(func: Node, src: &[u8], type_fqn: &str, already_seen: &HashSet<String>) -> Vec<cir_core::Field> {
    match func.child_by_field_name("body") {
        Some(body) => init_self_fields(body, src, type_fqn, already_seen),
        None => Vec::new(),
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

    #[test]
    fn extracts_class_with_fields_and_methods() {
        let src = "class Order:\n\
                    total: int\n\
                    def __init__(self):\n\
                        self.items = []\n\
                    def run(self, x: int) -> int:\n\
                        return x\n";
        let tree = parse(src);
        let class_node = tree.root_node().named_child(0).expect("class node");
        let unit = process_class(class_node, src.as_bytes(), None, "order.py").expect("unit");

        assert_eq!(unit.short_name, "Order");
        assert_eq!(unit.methods.len(), 2);
        let run = unit.methods.iter().find(|m| m.method.name == "run").expect("run");
        assert_eq!(run.method.return_type, "int");
        assert_eq!(run.parameters.len(), 1);
        assert_eq!(run.parameters[0].name, "x");
    }

    #[test]
    fn records_extends_and_abc_implements() {
        let src = "class Shape(ABC):\n    @abstractmethod\n    def area(self): ...\n";
        let tree = parse(src);
        let class_node = tree.root_node().named_child(0).expect("class node");
        let unit = process_class(class_node, src.as_bytes(), None, "shape.py").expect("unit");
        assert_eq!(unit.implements, vec!["ABC".to_string()]);
        assert!(unit.extends.is_empty());
        assert_eq!(unit.type_decl.kind, TypeKind::Interface);
    }
}
