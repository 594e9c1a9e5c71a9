//! # cir-error
//!
//! Unified error handling for cir - following OpenDAL's error handling practices.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., ParseFailed, ResolutionFailed)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use cir_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "unexpected token")
//!         .with_operation("java::parse_file")
//!         .with_context("file", "Main.java")
//!         .with_context("line", "42"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All functions return `Result<T, cir_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Don't abuse `From<OtherError>` to prevent raw error leakage
//! - Data-shaped problems (a single file's syntax error, an unresolved
//!   reference, an ambiguous short name) are not `Error`s at all: they are
//!   folded into the `parse_errors`/`validation_errors` lists the parse and
//!   diagram contracts already carry. `Error` is reserved for contract
//!   violations — an unregistered language tag, an unknown diagram type, or
//!   an I/O failure that kept a file from being read in the first place.

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using cir's Error
pub type Result<T> = std::result::Result<T, Error>;
