//! Diagnostic system for interpreter error reporting.
//!
//! Every fault the interpreter can raise becomes a [`Diagnostic`] with:
//! - an error code for searchability
//! - a clear message (what went wrong)
//! - a primary cell (where it went wrong)
//! - context labels and notes (why)
//! - suggestions and mechanical fixes (how to fix)

mod diagnostic;
mod docs;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Substitution};
pub use docs::ErrorDocs;
pub use error_code::ErrorCode;
