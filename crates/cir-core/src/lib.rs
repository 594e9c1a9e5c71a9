//! # cir-core
//!
//! The Code Intermediate Representation (CIR): a typed directed multigraph
//! of TypeDecl/Field/Method/Parameter nodes connected by labelled edges.
//!
//! This crate owns only the container (§4.1) and the node/edge vocabulary
//! (§3). It knows nothing about any host language, how references get
//! resolved, or how diagrams get rendered — those live in `cir-lang`,
//! `cir-resolver`, and `cir-emit` respectively.

mod attrs;
mod edge;
mod graph;
mod node;

pub use attrs::{Multiplicity, TypeKind, Visibility};
pub use edge::{Edge, EdgeAttrs, EdgeLabel};
pub use graph::{CirGraph, ParseFileError};
pub use node::{
    ctor_id, field_id, fqn, method_id, param_id, type_id, Field, Method, NodeKind, NodePayload,
    Parameter, TypeDecl,
};
