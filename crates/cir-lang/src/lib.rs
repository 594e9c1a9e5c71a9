//! # cir-lang
//!
//! Shared vocabulary every per-language adapter crate (`cir-java`,
//! `cir-python`) builds on: the `LanguageAdapter` trait, the `Unit`/
//! `CallRecord` record shapes adapters hand to the resolver, and the
//! type-annotation-mapping helpers common to §4.2.d across languages.

pub mod adapter;
pub mod annotation;
pub mod unit;

pub use adapter::{populate_unit, LanguageAdapter, SourceFile};
pub use annotation::resolve_annotation;
pub use cir_core::Multiplicity;
pub use unit::{CallRecord, QualifierKind, Unit, UnitMethod};
