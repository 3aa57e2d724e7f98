//! Dots IR - grid and symbol types for the dots interpreter.
//!
//! This crate contains the load-time data model:
//! - `Coord` for cell addresses
//! - `Symbol` and its warp/operator payloads
//! - `Alphabet`, the per-sheet symbol classifier
//! - `Grid`, the classified program
//!
//! Everything here is immutable once a program is loaded. Runtime state
//! (call stacks, singleton occupancy, cell values) belongs to `dots_eval`
//! and the embedding scheduler.

mod alphabet;
mod coord;
mod grid;
mod symbol;

pub use alphabet::{is_path_glyph, Alphabet, PATH_GLYPHS};
pub use coord::{Coord, CoordError};
pub use grid::Grid;
pub use symbol::{
    LibraryId, Link, OperatorKind, OperatorSymbol, ScopeId, Symbol, SymbolClass, SymbolError,
    WarpKind, WarpSymbol,
};
