//! Component diagram emission (§4.4.d): one component per package, with
//! cross-package relationship edges collapsed to dependency lines.

use crate::builder::{sanitize_id, PlantUmlBuilder};
use crate::model::{package_label, CirView};
use cir_core::{CirGraph, EdgeLabel};
use std::collections::HashMap;

pub fn generate_component_diagram(graph: &CirGraph) -> String {
    let view = CirView::new(graph);

    let type_package: HashMap<&str, String> = view
        .type_decls()
        .map(|t| (t.id.as_str(), package_label(t)))
        .collect();

    let mut packages: Vec<&String> = type_package.values().collect();
    packages.sort();
    packages.dedup();

    let mut builder = PlantUmlBuilder::new();
    for package in &packages {
        builder.line(format!("component \"{package}\" as {}", sanitize_id(package)));
    }
    builder.blank();

    let mut lines: Vec<String> = view
        .graph
        .edges()
        .iter()
        .filter(|e| {
            matches!(
                e.label,
                EdgeLabel::Inherits | EdgeLabel::Implements | EdgeLabel::Associates | EdgeLabel::DependsOn
            )
        })
        .filter_map(|e| {
            let src_pkg = type_package.get(e.src.as_str())?;
            let dst_pkg = type_package.get(e.dst.as_str())?;
            if src_pkg == dst_pkg {
                return None;
            }
            Some(format!("{} ..> {}", sanitize_id(src_pkg), sanitize_id(dst_pkg)))
        })
        .collect();

    lines.sort();
    lines.dedup();
    for line in lines {
        builder.line(line);
    }

    builder.build()
}
