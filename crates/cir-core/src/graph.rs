//! The CIR graph container (§4.1).

use crate::edge::Edge;
use crate::node::NodePayload;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single per-file failure recorded during a tolerant project parse
/// (§4.2, §6 "parse_errors").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseFileError {
    pub file: String,
    pub error: String,
}

/// Typed multigraph holding CIR nodes and labelled edges.
///
/// Add-node is idempotent on id (a later `add_node` with the same id
/// replaces the payload in place, preserving the node's original position).
/// Add-edge never deduplicates: the same label between the same endpoints
/// may be recorded more than once, and collapsing duplicates is the
/// emitters' job (§4.1 contract).
#[derive(Debug, Clone, Default)]
pub struct CirGraph {
    node_order: Vec<String>,
    nodes: HashMap<String, NodePayload>,
    edges: Vec<Edge>,
    parse_errors: Vec<ParseFileError>,
}

impl CirGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a node by id. The node's position in iteration
    /// order is fixed at first insertion.
    pub fn add_node(&mut self, payload: impl Into<NodePayload>) {
        let payload = payload.into();
        let id = payload.id().to_string();
        if !self.nodes.contains_key(&id) {
            self.node_order.push(id.clone());
        }
        self.nodes.insert(id, payload);
    }

    /// Append a labelled edge. Never deduplicates.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn node(&self, id: &str) -> Option<&NodePayload> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodePayload> {
        self.node_order
            .iter()
            .filter_map(move |id| self.nodes.get(id))
    }

    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Edges in insertion order, including duplicates.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edges_with_label(&self, label: crate::edge::EdgeLabel) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.label == label)
    }

    pub fn push_parse_error(&mut self, file: impl Into<String>, error: impl Into<String>) {
        self.parse_errors.push(ParseFileError {
            file: file.into(),
            error: error.into(),
        });
    }

    pub fn parse_errors(&self) -> &[ParseFileError] {
        &self.parse_errors
    }

    /// Merge another graph's nodes, edges, and parse errors into this one.
    /// Used when per-file partial graphs are built and merged deterministically
    /// (§5: "must serialise the final graph population ... or merge
    /// deterministically by FQN order").
    pub fn merge(&mut self, other: CirGraph) {
        for id in other.node_order {
            if let Some(payload) = other.nodes.get(&id) {
                self.add_node(payload.clone());
            }
        }
        self.edges.extend(other.edges);
        self.parse_errors.extend(other.parse_errors);
    }

    /// Render the debug-JSON view described in §6.
    pub fn to_debug_json(&self) -> serde_json::Value {
        let nodes: Vec<serde_json::Value> = self
            .nodes()
            .map(|payload| {
                serde_json::json!({
                    "id": payload.id(),
                    "kind": payload.kind().to_string(),
                    "attrs": payload.to_attrs_json(),
                })
            })
            .collect();

        let edges: Vec<serde_json::Value> = self
            .edges
            .iter()
            .map(|edge| {
                let mut obj = serde_json::Map::new();
                obj.insert("src".into(), serde_json::Value::String(edge.src.clone()));
                obj.insert("dst".into(), serde_json::Value::String(edge.dst.clone()));
                obj.insert(
                    "type".into(),
                    serde_json::Value::String(edge.label.to_string()),
                );
                if !edge.attrs.is_empty() {
                    obj.insert("attrs".into(), edge.attrs.to_json());
                }
                serde_json::Value::Object(obj)
            })
            .collect();

        let mut out = serde_json::json!({
            "nodes": nodes,
            "edges": edges,
        });

        if !self.parse_errors.is_empty() {
            out["parse_errors"] = serde_json::to_value(&self.parse_errors).unwrap();
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{TypeKind, Visibility};
    use crate::edge::{EdgeAttrs, EdgeLabel};
    use crate::node::TypeDecl;

    fn type_decl(id: &str, name: &str) -> TypeDecl {
        TypeDecl {
            id: id.into(),
            name: name.into(),
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            package: None,
            modifiers: vec![],
            is_abstract: false,
            is_final: false,
        }
    }

    #[test]
    fn add_node_is_idempotent_on_id() {
        let mut g = CirGraph::new();
        g.add_node(type_decl("type:A", "A"));
        g.add_node(type_decl("type:A", "A-renamed-in-payload"));
        assert_eq!(g.node_count(), 1);
        assert_eq!(
            g.node("type:A").unwrap().as_type_decl().unwrap().name,
            "A-renamed-in-payload"
        );
    }

    #[test]
    fn add_edge_never_dedups() {
        let mut g = CirGraph::new();
        g.add_edge(Edge::new("type:A", "type:B", EdgeLabel::Inherits));
        g.add_edge(Edge::new("type:A", "type:B", EdgeLabel::Inherits));
        assert_eq!(g.edges().len(), 2);
    }

    #[test]
    fn empty_graph_has_zero_nodes() {
        let g = CirGraph::new();
        assert_eq!(g.node_count(), 0);
        let json = g.to_debug_json();
        assert_eq!(json["nodes"].as_array().unwrap().len(), 0);
        assert_eq!(json["edges"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn debug_json_shape() {
        let mut g = CirGraph::new();
        g.add_node(type_decl("type:A", "A"));
        g.add_edge(
            Edge::new("type:B", "type:A", EdgeLabel::Associates)
                .with_attrs(EdgeAttrs::with_multiplicity(crate::attrs::Multiplicity::OneOrMore)),
        );
        let json = g.to_debug_json();
        assert_eq!(json["nodes"][0]["id"], "type:A");
        assert_eq!(json["nodes"][0]["kind"], "TypeDecl");
        assert_eq!(json["edges"][0]["type"], "ASSOCIATES");
        assert_eq!(json["edges"][0]["attrs"]["multiplicity"], "1..*");
    }

    #[test]
    fn parse_errors_attached_when_present() {
        let mut g = CirGraph::new();
        g.push_parse_error("Bad.java", "unexpected token");
        let json = g.to_debug_json();
        assert_eq!(json["parse_errors"][0]["file"], "Bad.java");
    }

    #[test]
    fn insertion_order_preserved() {
        let mut g = CirGraph::new();
        g.add_node(type_decl("type:Z", "Z"));
        g.add_node(type_decl("type:A", "A"));
        let ids: Vec<&str> = g.nodes().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["type:Z", "type:A"]);
    }
}
