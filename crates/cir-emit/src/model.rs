//! A read-only view over a `CirGraph` that indexes nodes by the structural
//! edges (HAS_FIELD/HAS_METHOD/PARAM_OF) the emitters need to walk
//! repeatedly, so each diagram doesn't re-scan the edge list per type.

use cir_core::{CirGraph, EdgeLabel, Field, Method, Parameter, TypeDecl};
use std::collections::HashMap;

pub struct CirView<'a> {
    pub graph: &'a CirGraph,
}

impl<'a> CirView<'a> {
    pub fn new(graph: &'a CirGraph) -> Self {
        Self { graph }
    }

    pub fn type_decls(&self) -> impl Iterator<Item = &'a TypeDecl> {
        self.graph.nodes().filter_map(|n| n.as_type_decl())
    }

    pub fn methods(&self) -> impl Iterator<Item = &'a Method> {
        self.graph.nodes().filter_map(|n| n.as_method())
    }

    pub fn method(&self, id: &str) -> Option<&'a Method> {
        self.graph.node(id).and_then(|n| n.as_method())
    }

    pub fn fields_of(&self, type_id: &str) -> Vec<&'a Field> {
        self.graph
            .edges_with_label(EdgeLabel::HasField)
            .filter(|e| e.src == type_id)
            .filter_map(|e| self.graph.node(&e.dst).and_then(|n| n.as_field()))
            .collect()
    }

    pub fn methods_of(&self, type_id: &str) -> Vec<&'a Method> {
        self.graph
            .edges_with_label(EdgeLabel::HasMethod)
            .filter(|e| e.src == type_id)
            .filter_map(|e| self.graph.node(&e.dst).and_then(|n| n.as_method()))
            .collect()
    }

    pub fn params_of(&self, method_id: &str) -> Vec<&'a Parameter> {
        self.graph
            .edges_with_label(EdgeLabel::ParamOf)
            .filter(|e| e.src == method_id)
            .filter_map(|e| self.graph.node(&e.dst).and_then(|n| n.as_parameter()))
            .collect()
    }

    /// `method id -> owning type id`, derived from HAS_METHOD edges.
    pub fn method_owners(&self) -> HashMap<&'a str, &'a str> {
        self.graph
            .edges_with_label(EdgeLabel::HasMethod)
            .map(|e| (e.dst.as_str(), e.src.as_str()))
            .collect()
    }
}

/// Strip the `type:` id prefix to get the type's fully-qualified name.
pub fn fqn_of(type_decl: &TypeDecl) -> &str {
    type_decl.id.strip_prefix("type:").unwrap_or(&type_decl.id)
}

/// Same as `fqn_of` but from a raw node id string (used on edge endpoints).
pub fn fqn_of_id(type_id: &str) -> &str {
    type_id.strip_prefix("type:").unwrap_or(type_id)
}

/// A TypeDecl's package label for grouping, with the `(default)` fallback
/// for package-less types (§4.4.b).
pub fn package_label(type_decl: &TypeDecl) -> String {
    type_decl
        .package
        .clone()
        .unwrap_or_else(|| "(default)".to_string())
}
