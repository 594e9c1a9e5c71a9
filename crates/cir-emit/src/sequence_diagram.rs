//! Sequence diagram emission (§4.4.c): a depth-first walk of CALLS edges
//! from a chosen entry method, rendered as ordered `-> ` message steps.

use crate::builder::PlantUmlBuilder;
use crate::model::{fqn_of_id, CirView};
use cir_core::{CirGraph, Edge, EdgeLabel, Method};
use std::collections::{BTreeSet, HashMap, HashSet};

const ENTRY_CANDIDATES: &[&str] = &["run", "start", "execute", "process", "handle", "dispatch"];

fn is_dunder(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}

pub fn generate_sequence_diagram(graph: &CirGraph) -> String {
    let view = CirView::new(graph);
    let owners = view.method_owners();
    let adjacency = build_adjacency(&view);

    let mut builder = PlantUmlBuilder::new();

    let Some(entry) = pick_entry(&view, &adjacency) else {
        builder.note("no entry point with outgoing calls was found");
        return builder.build();
    };

    let mut visited = HashSet::new();
    let mut steps: Vec<(String, String, String)> = Vec::new();
    traverse(&entry, &adjacency, &owners, &view, &mut visited, &mut steps);

    let mut classes: BTreeSet<&str> = BTreeSet::new();
    for (src, dst, _) in &steps {
        classes.insert(src.as_str());
        classes.insert(dst.as_str());
    }
    for class in &classes {
        builder.line(format!("participant {class}"));
    }
    builder.blank();
    for (src, dst, label) in &steps {
        builder.line(format!("{src} -> {dst} : {label}"));
    }

    builder.build()
}

/// `src method id -> outgoing CALLS edges, sorted by order`, excluding any
/// edge whose target method name is a dunder (§4.4.c step 1).
fn build_adjacency<'a>(view: &CirView<'a>) -> HashMap<String, Vec<&'a Edge>> {
    let mut adjacency: HashMap<String, Vec<&Edge>> = HashMap::new();
    for edge in view.graph.edges_with_label(EdgeLabel::Calls) {
        let dst_name = view.method(&edge.dst).map(|m| m.name.as_str()).unwrap_or("");
        if is_dunder(dst_name) {
            continue;
        }
        adjacency.entry(edge.src.clone()).or_default().push(edge);
    }
    for edges in adjacency.values_mut() {
        edges.sort_by_key(|e| e.attrs.order.unwrap_or(0));
    }
    adjacency
}

fn pick_entry(view: &CirView, adjacency: &HashMap<String, Vec<&Edge>>) -> Option<String> {
    let mut methods: Vec<&Method> = view.methods().collect();
    methods.sort_by(|a, b| a.id.cmp(&b.id));

    let has_outgoing = |m: &Method| adjacency.get(&m.id).map(|v| !v.is_empty()).unwrap_or(false);

    if let Some(m) = methods.iter().find(|m| m.name == "main" && has_outgoing(m)) {
        return Some(m.id.clone());
    }
    for candidate in ENTRY_CANDIDATES {
        if let Some(m) = methods.iter().find(|m| m.name == *candidate && has_outgoing(m)) {
            return Some(m.id.clone());
        }
    }
    methods
        .iter()
        .find(|m| !is_dunder(&m.name) && has_outgoing(m))
        .map(|m| m.id.clone())
}

fn traverse(
    method_id: &str,
    adjacency: &HashMap<String, Vec<&Edge>>,
    owners: &HashMap<&str, &str>,
    view: &CirView,
    visited: &mut HashSet<String>,
    steps: &mut Vec<(String, String, String)>,
) {
    if visited.contains(method_id) {
        return;
    }
    visited.insert(method_id.to_string());

    let Some(edges) = adjacency.get(method_id) else { return };
    for edge in edges {
        let (Some(src_owner), Some(dst_owner)) = (owners.get(edge.src.as_str()), owners.get(edge.dst.as_str())) else {
            continue;
        };

        let dst_method = view.method(&edge.dst);
        let is_constructor_like = dst_method.map(|m| m.is_constructor).unwrap_or(false);
        let member_name = dst_method.map(|m| m.name.as_str()).unwrap_or("");
        let label = if is_constructor_like || member_name == "__init__" {
            "<<create>>".to_string()
        } else {
            format!("{member_name}()")
        };

        steps.push((fqn_of_id(src_owner).to_string(), fqn_of_id(dst_owner).to_string(), label));
        traverse(&edge.dst, adjacency, owners, view, visited, steps);
    }
}
