//! Package diagram emission (§4.4.b): the class diagram's type blocks and
//! relationship lines, grouped into `package "<name>" { ... }` blocks.

use crate::builder::PlantUmlBuilder;
use crate::class_diagram::{emit_type_block, relationship_lines};
use crate::model::{fqn_of, package_label, CirView};
use cir_core::{CirGraph, TypeDecl};
use std::collections::BTreeMap;

pub fn generate_package_diagram(graph: &CirGraph) -> String {
    let view = CirView::new(graph);
    let mut types: Vec<&TypeDecl> = view.type_decls().collect();
    types.sort_by(|a, b| fqn_of(a).cmp(fqn_of(b)));

    let mut by_package: BTreeMap<String, Vec<&TypeDecl>> = BTreeMap::new();
    for type_decl in &types {
        by_package.entry(package_label(type_decl)).or_default().push(type_decl);
    }

    let mut builder = PlantUmlBuilder::new();
    for (package, members) in &by_package {
        if package == "(default)" {
            for type_decl in members {
                emit_type_block(&mut builder, &view, type_decl);
            }
        } else {
            builder.line(format!("package \"{package}\" {{"));
            for type_decl in members {
                emit_type_block(&mut builder, &view, type_decl);
            }
            builder.line("}");
        }
    }

    builder.blank();
    for line in relationship_lines(&view) {
        builder.line(line);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cir_core::{TypeKind, Visibility};

    fn type_decl(id: &str, name: &str, package: Option<&str>) -> TypeDecl {
        TypeDecl {
            id: id.into(),
            name: name.into(),
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            package: package.map(str::to_string),
            modifiers: vec![],
            is_abstract: false,
            is_final: false,
        }
    }

    #[test]
    fn nests_named_packages_and_leaves_default_bare() {
        let mut g = CirGraph::new();
        g.add_node(type_decl("type:shop.Order", "Order", Some("shop")));
        g.add_node(type_decl("type:Loose", "Loose", None));

        let out = generate_package_diagram(&g);
        assert!(out.contains("package \"shop\" {"));
        assert!(out.contains("class shop.Order {"));
        assert!(out.contains("class Loose {"));
        assert!(!out.contains("package \"(default)\""));
    }
}
