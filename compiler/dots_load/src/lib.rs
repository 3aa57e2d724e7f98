//! Program text loading for the dots interpreter.
//!
//! Turns program text into a classified [`Grid`](dots_ir::Grid):
//! - directive rows declare warps and import libraries
//! - comments, quoted text and operator brackets are recognized per row
//! - imported libraries are fetched through a [`LibrarySource`] and stitched
//!   below the main program, so every coordinate is global
//!
//! All load errors are collected; loading never stops at the first one.

mod directive;
mod errors;
mod program;
mod scan;
mod source;

pub use directive::{Directive, DIRECTIVE_MARK};
pub use errors::{LoadError, LoadErrorKind};
pub use program::{Program, Sheet, MAIN_SHEET};
pub use scan::{scan_row, ScannedRow, COMMENT_MARK};
pub use source::{LibrarySource, MemoryLibraries};
