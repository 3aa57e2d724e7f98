//! Error types for operator evaluation and warp control transfer.
//!
//! `EvalError` faults come from operator cells, `WarpError` faults from warp
//! pairing (at load) and control transfer (at run time). Both convert into
//! [`Diagnostic`]s carrying the offending glyph and cell.

use std::fmt;

use dots_diagnostic::{Diagnostic, ErrorCode};
use dots_ir::{Coord, LibraryId, Link, WarpKind};

use crate::singleton::CursorId;

/// Operator evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A unicode alias that is recognized only to be rejected.
    #[error("unicode operator `{glyph}` is deprecated; replace it with `{replacement}`")]
    DeprecatedOperator { glyph: char, replacement: char },

    /// A glyph with no operation bound to it.
    #[error("`{glyph}` is not an operator")]
    UnknownOperator { glyph: char },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::DeprecatedOperator { .. } => ErrorCode::E2001,
            EvalError::UnknownOperator { .. } => ErrorCode::E2002,
        }
    }

    /// Report this error at the operator cell `at`.
    pub fn to_diagnostic(&self, at: Coord) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::DeprecatedOperator { replacement, .. } => diag
                .with_label(at, "deprecated unicode operator")
                .with_fix(at, replacement.to_string()),
            EvalError::UnknownOperator { .. } => diag
                .with_label(at, "no operation for this glyph")
                .with_note("see `dotsc explain E2002` for the operator table"),
        }
    }
}

/// Why a group of paired warps was rejected at load.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MalformedReason {
    /// A plain warp appears a number of times other than two.
    Unpaired { count: usize },
    /// A library was called but its entry warp never appears.
    MissingEntry,
    /// A library entry warp appears more than once.
    DuplicateEntry { count: usize },
    /// A library entry exists but nothing calls it.
    NoCallSite,
    /// Members of one group disagree on singleton-ness.
    IncompatibleVariants,
}

impl MalformedReason {
    pub fn code(self) -> ErrorCode {
        match self {
            MalformedReason::Unpaired { .. } => ErrorCode::E1001,
            MalformedReason::MissingEntry => ErrorCode::E1002,
            MalformedReason::DuplicateEntry { .. } => ErrorCode::E1003,
            MalformedReason::NoCallSite => ErrorCode::E1004,
            MalformedReason::IncompatibleVariants => ErrorCode::E1006,
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Unpaired { count } => write!(
                f,
                "appears {count} time{}; a plain warp needs exactly one partner",
                if *count == 1 { "" } else { "s" }
            ),
            MalformedReason::MissingEntry => write!(f, "is called but its library entry is never placed"),
            MalformedReason::DuplicateEntry { count } => {
                write!(f, "has {count} library entries; exactly one is allowed")
            }
            MalformedReason::NoCallSite => write!(f, "has a library entry but no call site"),
            MalformedReason::IncompatibleVariants => {
                write!(f, "mixes singleton and non-singleton library warps")
            }
        }
    }
}

/// Warp pairing or control transfer error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WarpError {
    /// A group of paired warps violates the pairing rules.
    #[error("warp `{glyph}` {reason}")]
    Malformed {
        glyph: char,
        link: Link,
        reason: MalformedReason,
        sites: Vec<Coord>,
    },

    /// An operation that the warp variant does not support.
    #[error("cannot {operation} of {kind} warp `{glyph}` at {at}")]
    InvalidWarpOperation {
        glyph: char,
        kind: WarpKind,
        at: Coord,
        operation: &'static str,
    },

    /// A return warp reached with nothing to return to.
    #[error("return warp `{glyph}` at {at} reached with an empty call stack")]
    UnbalancedReturn { glyph: char, at: Coord },

    /// A transfer requested at a non-warp cell.
    #[error("no warp at {at}")]
    NotAWarp { at: Coord },

    /// A cursor leaving a singleton library it does not occupy.
    #[error("cursor {cursor} left singleton library {library} at {at} without occupying it")]
    SingletonNotHeld {
        library: LibraryId,
        cursor: CursorId,
        at: Coord,
    },

    /// Library calls nested past the call stack limit.
    #[error("library calls at {at} nest deeper than {limit} frames")]
    CallDepthExceeded { limit: usize, at: Coord },
}

impl WarpError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WarpError::Malformed { reason, .. } => reason.code(),
            WarpError::InvalidWarpOperation { .. } => ErrorCode::E1007,
            WarpError::UnbalancedReturn { .. } => ErrorCode::E1008,
            WarpError::NotAWarp { .. } => ErrorCode::E1009,
            WarpError::SingletonNotHeld { .. } => ErrorCode::E1010,
            WarpError::CallDepthExceeded { .. } => ErrorCode::E1011,
        }
    }

    /// The cell the error is reported at.
    pub fn coord(&self) -> Option<Coord> {
        match self {
            WarpError::Malformed { sites, .. } => sites.first().copied(),
            WarpError::InvalidWarpOperation { at, .. }
            | WarpError::UnbalancedReturn { at, .. }
            | WarpError::NotAWarp { at }
            | WarpError::SingletonNotHeld { at, .. }
            | WarpError::CallDepthExceeded { at, .. } => Some(*at),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            WarpError::Malformed { sites, .. } => {
                let mut sites = sites.iter();
                let diag = match sites.next() {
                    Some(first) => diag.with_label(*first, "first occurrence"),
                    None => diag,
                };
                sites.fold(diag, |diag, at| diag.with_secondary_label(*at, "also here"))
            }
            WarpError::InvalidWarpOperation { at, .. } => diag
                .with_label(*at, "return warps resolve through the call stack")
                .with_note("a return warp's destination is the innermost pending call site"),
            WarpError::UnbalancedReturn { at, .. } => diag
                .with_label(*at, "nothing to return to")
                .with_note("only the cursor that reached this cell is halted"),
            WarpError::NotAWarp { at } => diag.with_label(*at, "not a warp"),
            WarpError::SingletonNotHeld { at, .. } => diag.with_label(*at, "exit without entry"),
            WarpError::CallDepthExceeded { at, .. } => diag
                .with_label(*at, "call site")
                .with_suggestion("make sure the library returns before calling itself again"),
        }
    }
}
