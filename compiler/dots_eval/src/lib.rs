//! Operator evaluation and warp control transfer.
//!
//! - [`evaluate`]: apply an operator cell to two operands
//! - [`WarpRegistry`]: pair every warp of a loaded [`Grid`](dots_ir::Grid)
//! - [`CallStack`]: one per cursor, records pending library call sites
//! - [`SingletonGuard`]: at most one cursor inside each singleton library
//! - [`Linker`]: registry plus guard, the entry point for a scheduler

mod call_stack;
mod errors;
mod linker;
mod operators;
mod registry;
mod singleton;

pub use call_stack::CallStack;
pub use errors::{EvalError, MalformedReason, WarpError};
pub use linker::{Linker, Transfer};
pub use operators::{check_operators, deprecated_replacement, evaluate, Operation, DEPRECATED_ALIASES};
pub use registry::{Binding, WarpCell, WarpId, WarpRecord, WarpRegistry};
pub use singleton::{CursorId, Entry, SingletonGuard};
