//! Per-cursor library call stack.
//!
//! Holds the call sites a cursor has entered libraries from. Most programs
//! nest only a few calls deep, so the first frames live inline.

use dots_ir::Coord;
use smallvec::SmallVec;

use crate::errors::WarpError;

/// LIFO stack of return coordinates with a depth limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallStack {
    frames: SmallVec<[Coord; 4]>,
    limit: usize,
}

impl CallStack {
    /// Default maximum nesting depth.
    pub const DEFAULT_LIMIT: usize = 4096;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        CallStack {
            frames: SmallVec::new(),
            limit,
        }
    }

    /// Push the call site `at`. A full stack is left unchanged.
    pub fn push(&mut self, at: Coord) -> Result<(), WarpError> {
        if self.frames.len() >= self.limit {
            return Err(WarpError::CallDepthExceeded {
                limit: self.limit,
                at,
            });
        }
        self.frames.push(at);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Coord> {
        self.frames.pop()
    }

    /// The innermost pending call site.
    pub fn peek(&self) -> Option<Coord> {
        self.frames.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames from outermost to innermost.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.frames.iter().copied()
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}
