//! Class diagram emission (§4.4.a).

use crate::builder::PlantUmlBuilder;
use crate::display::{format_field, format_method};
use crate::model::{fqn_of, fqn_of_id, CirView};
use cir_core::{CirGraph, EdgeLabel, TypeDecl};

pub fn generate_class_diagram(graph: &CirGraph) -> String {
    let view = CirView::new(graph);
    let mut types: Vec<&TypeDecl> = view.type_decls().collect();
    types.sort_by(|a, b| fqn_of(a).cmp(fqn_of(b)));

    let mut builder = PlantUmlBuilder::new();
    for type_decl in &types {
        emit_type_block(&mut builder, &view, type_decl);
    }

    builder.blank();
    for line in relationship_lines(&view) {
        builder.line(line);
    }

    builder.build()
}

/// Emit one `<kind> <fqn> { ... }` block: fields, then non-constructor
/// methods (§4.4.a: "constructors are omitted").
pub(crate) fn emit_type_block(builder: &mut PlantUmlBuilder, view: &CirView, type_decl: &TypeDecl) {
    builder.line(format!("{} {} {{", type_decl.kind, fqn_of(type_decl)));

    let mut fields = view.fields_of(&type_decl.id);
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    for field in &fields {
        builder.line(format!("  {}", format_field(field)));
    }

    let mut methods = view.methods_of(&type_decl.id);
    methods.sort_by(|a, b| a.name.cmp(&b.name));
    for method in &methods {
        if method.is_constructor {
            continue;
        }
        let params = view.params_of(&method.id);
        builder.line(format!("  {}", format_method(method, &params)));
    }

    builder.line("}");
}

/// Deduplicated, sorted relationship lines for every INHERITS/IMPLEMENTS/
/// ASSOCIATES/DEPENDS_ON edge in the graph (§4.4.a).
pub(crate) fn relationship_lines(view: &CirView) -> Vec<String> {
    let mut lines: Vec<String> = view
        .graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let src = fqn_of_id(&edge.src);
            let dst = fqn_of_id(&edge.dst);
            match edge.label {
                EdgeLabel::Inherits => Some(format!("{src} --|> {dst}")),
                EdgeLabel::Implements => Some(format!("{src} ..|> {dst}")),
                EdgeLabel::Associates => {
                    let mult = edge.attrs.multiplicity.filter(|m| !m.is_default());
                    Some(match mult {
                        Some(m) => format!("{src} --> \"{}\" {dst}", m.as_str()),
                        None => format!("{src} --> {dst}"),
                    })
                }
                EdgeLabel::DependsOn => Some(format!("{src} ..> {dst}")),
                _ => None,
            }
        })
        .collect();

    lines.sort();
    lines.dedup();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cir_core::{Edge, EdgeAttrs, Field, Method, Multiplicity, TypeKind, Visibility};

    fn type_decl(id: &str, name: &str, kind: TypeKind) -> TypeDecl {
        TypeDecl {
            id: id.into(),
            name: name.into(),
            kind,
            visibility: Visibility::Public,
            package: None,
            modifiers: vec![],
            is_abstract: false,
            is_final: false,
        }
    }

    #[test]
    fn emits_fields_and_methods_but_omits_constructors() {
        let mut g = CirGraph::new();
        g.add_node(type_decl("type:Order", "Order", TypeKind::Class));
        g.add_node(Field {
            id: "field:Order:total".into(),
            name: "total".into(),
            type_name: "int".into(),
            raw_type: "int".into(),
            visibility: Visibility::Private,
            modifiers: vec![],
            multiplicity: Some(Multiplicity::One),
        });
        g.add_edge(Edge::new("type:Order", "field:Order:total", EdgeLabel::HasField));
        g.add_node(Method {
            id: "ctor:Order:Order".into(),
            name: "Order".into(),
            return_type: "void".into(),
            raw_return_type: "void".into(),
            visibility: Visibility::Public,
            modifiers: vec![],
            is_constructor: true,
            is_static: false,
            is_abstract: false,
            is_final: false,
        });
        g.add_edge(Edge::new("type:Order", "ctor:Order:Order", EdgeLabel::HasMethod));

        let out = generate_class_diagram(&g);
        assert!(out.contains("class Order {"));
        assert!(out.contains("- total : int"));
        assert!(!out.contains("Order()"));
    }

    #[test]
    fn relationship_lines_are_sorted_and_deduplicated() {
        let mut g = CirGraph::new();
        g.add_edge(Edge::new("type:B", "type:A", EdgeLabel::Inherits));
        g.add_edge(Edge::new("type:B", "type:A", EdgeLabel::Inherits));
        g.add_edge(
            Edge::new("type:C", "type:A", EdgeLabel::Associates)
                .with_attrs(EdgeAttrs::with_multiplicity(Multiplicity::OneOrMore)),
        );
        let view = CirView::new(&g);
        let lines = relationship_lines(&view);
        assert_eq!(lines, vec!["B --|> A".to_string(), "C --> \"1..*\" A".to_string()]);
    }
}
