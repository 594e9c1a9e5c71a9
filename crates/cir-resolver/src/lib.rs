//! # cir-resolver
//!
//! Cross-file resolution (§4.3): turns the pending base/field/parameter/
//! call references an adapter leaves on each `Unit` into INHERITS/
//! IMPLEMENTS/ASSOCIATES/DEPENDS_ON/CALLS edges on the shared graph, once
//! every file in a project has contributed its `Unit`s. Grounded on
//! `python_adapter.py`'s `_add_relationship_edges`.

mod index;

use cir_core::{CirGraph, Edge, EdgeAttrs, EdgeLabel};
use cir_lang::annotation::is_primitive;
use cir_lang::{QualifierKind, Unit};
use index::SymbolIndex;
use std::collections::HashMap;

/// Add every cross-file relationship edge implied by `units` onto `graph`.
/// `graph` is expected to already carry the intra-file structural nodes and
/// edges (TypeDecl/Field/Method/Parameter, HAS_FIELD/HAS_METHOD/PARAM_OF)
/// populated by each adapter's `parse_project`.
pub fn resolve(graph: &mut CirGraph, units: &[Unit]) {
    let index = SymbolIndex::build(units);
    let method_index = build_method_index(units);

    for unit in units {
        let src_id = unit.type_id.as_str();

        for base_name in &unit.extends {
            if let Some(target) = index.resolve(base_name, src_id) {
                if target != src_id {
                    graph.add_edge(Edge::new(src_id, target, EdgeLabel::Inherits));
                }
            }
        }

        for iface_name in &unit.implements {
            if let Some(target) = index.resolve(iface_name, src_id) {
                if target != src_id {
                    graph.add_edge(Edge::new(src_id, target, EdgeLabel::Implements));
                }
            }
        }

        for field in &unit.fields {
            if is_primitive(&field.type_name) {
                continue;
            }
            if let Some(target) = index.resolve(&field.type_name, src_id) {
                if target != src_id {
                    let attrs = match field.multiplicity {
                        Some(m) => EdgeAttrs::with_multiplicity(m),
                        None => EdgeAttrs::none(),
                    };
                    graph.add_edge(Edge::new(src_id, target, EdgeLabel::Associates).with_attrs(attrs));
                }
            }
        }

        for method in &unit.methods {
            for param in &method.parameters {
                if is_primitive(&param.type_name) {
                    continue;
                }
                if let Some(target) = index.resolve(&param.type_name, src_id) {
                    if target != src_id {
                        graph.add_edge(Edge::new(src_id, target, EdgeLabel::DependsOn));
                    }
                }
            }

            if !is_primitive(&method.method.return_type) {
                if let Some(target) = index.resolve(&method.method.return_type, src_id) {
                    if target != src_id {
                        graph.add_edge(Edge::new(src_id, target, EdgeLabel::DependsOn));
                    }
                }
            }
        }

        resolve_calls(graph, unit, &index, &method_index);
    }
}

/// `(owner type id, method name) -> method id`, used to resolve a CALLS
/// target once its receiver type has been determined.
fn build_method_index(units: &[Unit]) -> HashMap<(String, String), String> {
    let mut out = HashMap::new();
    for unit in units {
        for method in &unit.methods {
            out.insert(
                (unit.type_id.clone(), method.method.name.clone()),
                method.method.id.clone(),
            );
        }
    }
    out
}

fn resolve_calls(graph: &mut CirGraph, unit: &Unit, index: &SymbolIndex, method_index: &HashMap<(String, String), String>) {
    let src_id = unit.type_id.as_str();

    let field_type_by_name: HashMap<&str, &str> = unit
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.type_name.as_str()))
        .collect();

    let mut method_param_types: HashMap<&str, HashMap<&str, &str>> = HashMap::new();
    for method in &unit.methods {
        let params = method
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.type_name.as_str()))
            .collect();
        method_param_types.insert(method.method.id.as_str(), params);
    }

    for method in &unit.methods {
        for call in &method.calls {
            if call.member.is_empty() {
                continue;
            }

            let target_type_id: Option<String> = match call.qualifier_kind {
                QualifierKind::Super => unit
                    .extends
                    .first()
                    .and_then(|base| index.resolve(base, src_id))
                    .map(String::from)
                    .or_else(|| Some(src_id.to_string())),
                QualifierKind::Static | QualifierKind::New => call
                    .qualifier
                    .as_deref()
                    .and_then(|q| index.resolve(q, src_id))
                    .map(String::from),
                QualifierKind::Var => call
                    .qualifier
                    .as_deref()
                    .and_then(|q| {
                        field_type_by_name
                            .get(q)
                            .copied()
                            .or_else(|| method_param_types.get(method.method.id.as_str()).and_then(|p| p.get(q).copied()))
                    })
                    .and_then(|var_type| index.resolve(var_type, src_id))
                    .map(String::from),
                QualifierKind::SelfRecv | QualifierKind::Cls => Some(src_id.to_string()),
                QualifierKind::None => None,
            };

            let Some(target_type_id) = target_type_id else { continue };
            let Some(dst_method_id) = method_index.get(&(target_type_id, call.member.clone())) else {
                continue;
            };

            graph.add_edge(
                Edge::new(method.method.id.clone(), dst_method_id.clone(), EdgeLabel::Calls)
                    .with_attrs(EdgeAttrs::with_order(call.order)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cir_core::{Field, Method, Multiplicity, Parameter, TypeDecl, TypeKind, Visibility};
    use cir_lang::{populate_unit, CallRecord, UnitMethod};

    fn base_unit() -> Unit {
        let type_decl = TypeDecl {
            id: "type:Animal".into(),
            name: "Animal".into(),
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            package: None,
            modifiers: vec![],
            is_abstract: false,
            is_final: false,
        };
        let mut unit = Unit::new(type_decl, None, "Animal.src".into());
        unit.methods.push(UnitMethod {
            method: Method {
                id: "method:Animal:speak".into(),
                name: "speak".into(),
                return_type: "void".into(),
                raw_return_type: "void".into(),
                visibility: Visibility::Public,
                modifiers: vec![],
                is_constructor: false,
                is_static: false,
                is_abstract: false,
                is_final: false,
            },
            parameters: vec![],
            calls: vec![],
        });
        unit
    }

    fn sub_unit() -> Unit {
        let type_decl = TypeDecl {
            id: "type:Dog".into(),
            name: "Dog".into(),
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            package: None,
            modifiers: vec![],
            is_abstract: false,
            is_final: false,
        };
        let mut unit = Unit::new(type_decl, None, "Dog.src".into());
        unit.extends.push("Animal".to_string());
        unit.fields.push(Field {
            id: "field:Dog:owner".into(),
            name: "owner".into(),
            type_name: "Person".into(),
            raw_type: "Person".into(),
            visibility: Visibility::Private,
            modifiers: vec![],
            multiplicity: Some(Multiplicity::One),
        });
        unit.methods.push(UnitMethod {
            method: Method {
                id: "method:Dog:bark".into(),
                name: "bark".into(),
                return_type: "void".into(),
                raw_return_type: "void".into(),
                visibility: Visibility::Public,
                modifiers: vec![],
                is_constructor: false,
                is_static: false,
                is_abstract: false,
                is_final: false,
            },
            parameters: vec![Parameter {
                id: "param:Dog:bark:p".into(),
                name: "p".into(),
                type_name: "Person".into(),
                raw_type: "Person".into(),
            }],
            calls: vec![CallRecord {
                src_method_id: "method:Dog:bark".into(),
                qualifier_kind: QualifierKind::Super,
                qualifier: None,
                member: "speak".into(),
                order: 0,
            }],
        });
        unit
    }

    fn person_unit() -> Unit {
        let type_decl = TypeDecl {
            id: "type:Person".into(),
            name: "Person".into(),
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            package: None,
            modifiers: vec![],
            is_abstract: false,
            is_final: false,
        };
        Unit::new(type_decl, None, "Person.src".into())
    }

    #[test]
    fn resolves_inherits_associates_depends_on_and_calls() {
        let units = vec![base_unit(), sub_unit(), person_unit()];
        let mut graph = CirGraph::new();
        for unit in &units {
            populate_unit(&mut graph, unit);
        }
        resolve(&mut graph, &units);

        assert_eq!(graph.edges_with_label(EdgeLabel::Inherits).count(), 1);
        assert_eq!(graph.edges_with_label(EdgeLabel::Associates).count(), 1);
        assert_eq!(graph.edges_with_label(EdgeLabel::DependsOn).count(), 1);

        let calls: Vec<_> = graph.edges_with_label(EdgeLabel::Calls).collect();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].src, "method:Dog:bark");
        assert_eq!(calls[0].dst, "method:Animal:speak");
        assert_eq!(calls[0].attrs.order, Some(0));
    }

    #[test]
    fn none_qualifier_calls_are_skipped() {
        let mut dog = sub_unit();
        dog.methods[0].calls = vec![CallRecord {
            src_method_id: "method:Dog:bark".into(),
            qualifier_kind: QualifierKind::None,
            qualifier: Some("helper".into()),
            member: "helper".into(),
            order: 0,
        }];
        let units = vec![base_unit(), dog, person_unit()];
        let mut graph = CirGraph::new();
        for unit in &units {
            populate_unit(&mut graph, unit);
        }
        resolve(&mut graph, &units);
        assert_eq!(graph.edges_with_label(EdgeLabel::Calls).count(), 0);
    }
}
