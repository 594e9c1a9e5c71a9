//! The adapter-local `Unit` record and the pending references it carries
//! until the cross-file resolver (§4.3) turns them into graph edges.

use cir_core::{Field, Method, Parameter};
use strum_macros::{Display, IntoStaticStr};

/// Classification of a call site's receiver expression (§4.2.e, GLOSSARY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum QualifierKind {
    New,
    Static,
    Var,
    Super,
    #[strum(serialize = "self")]
    SelfRecv,
    Cls,
    None,
}

/// One extracted, not-yet-resolved call site (§4.2.e).
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    pub src_method_id: String,
    pub qualifier_kind: QualifierKind,
    /// The bare name of the receiver expression, when `qualifier_kind`
    /// needs one to resolve against (`new`/`static`/`var`). `None` for
    /// `super`/`self`/`cls`/`none`.
    pub qualifier: Option<String>,
    pub member: String,
    pub order: u32,
}

/// A method together with its parameters and the calls extracted from its
/// body, still carrying the owning type's fields/id context implicitly
/// through `src_method_id` on each `CallRecord`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitMethod {
    pub method: Method,
    pub parameters: Vec<Parameter>,
    pub calls: Vec<CallRecord>,
}

/// An adapter-local per-type record produced while walking a single file,
/// consumed by the cross-file resolver once every file has been processed
/// (§4.2 "A Unit is an adapter-local record...").
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub type_id: String,
    pub short_name: String,
    pub full_name: String,
    pub package: Option<String>,
    pub source_path: String,
    pub type_decl: cir_core::TypeDecl,
    pub fields: Vec<Field>,
    pub methods: Vec<UnitMethod>,
    /// Recorded base-type names pending resolution to INHERITS edges.
    pub extends: Vec<String>,
    /// Recorded base-type names pending resolution to IMPLEMENTS edges.
    pub implements: Vec<String>,
}

impl Unit {
    pub fn new(type_decl: cir_core::TypeDecl, package: Option<String>, source_path: String) -> Self {
        let full_name = cir_core::fqn(package.as_deref(), &type_decl.name);
        Self {
            type_id: type_decl.id.clone(),
            short_name: type_decl.name.clone(),
            full_name,
            package,
            source_path,
            type_decl,
            fields: Vec::new(),
            methods: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
        }
    }
}
