//! Control transfer through warps.
//!
//! The [`Linker`] owns the run's shared warp state: the immutable registry
//! and the singleton guard. Each cursor brings its own [`CallStack`].
//! Traversals must be applied in the scheduler's fixed cursor order for a
//! run to be reproducible.

use dots_ir::{Coord, Grid, LibraryId, WarpKind};

use crate::call_stack::CallStack;
use crate::errors::WarpError;
use crate::registry::WarpRegistry;
use crate::singleton::{CursorId, Entry, SingletonGuard};

/// Outcome of stepping onto a warp.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Transfer {
    /// Move the cursor to this cell.
    Jump(Coord),
    /// The singleton library is busy; the cursor stays put and retries on a
    /// later tick.
    Held {
        library: LibraryId,
        occupant: CursorId,
    },
}

/// Shared warp state for one run.
#[derive(Clone, Debug)]
pub struct Linker {
    registry: WarpRegistry,
    guard: SingletonGuard,
}

impl Linker {
    pub fn new(registry: WarpRegistry) -> Self {
        Linker {
            registry,
            guard: SingletonGuard::new(),
        }
    }

    /// Build the registry for `grid` and wrap it.
    pub fn build(grid: &Grid) -> Result<Self, Vec<WarpError>> {
        WarpRegistry::build(grid).map(Linker::new)
    }

    pub fn registry(&self) -> &WarpRegistry {
        &self.registry
    }

    pub fn guard(&self) -> &SingletonGuard {
        &self.guard
    }

    /// Move `cursor` through the warp at `at`.
    ///
    /// A held or failed traversal leaves both `stack` and the guard as they
    /// were.
    pub fn traverse(
        &mut self,
        cursor: CursorId,
        stack: &mut CallStack,
        at: Coord,
    ) -> Result<Transfer, WarpError> {
        let cell = self.registry.warp_at(at).ok_or(WarpError::NotAWarp { at })?;
        let library = cell.warp.library();
        let transfer = match (cell.warp.kind(), library) {
            (WarpKind::SingletonOuter, Some(library)) => {
                if let Entry::Held { occupant } = self.guard.check(library, cursor) {
                    tracing::debug!(%cursor, %library, %occupant, %at, "cursor held at singleton call");
                    return Ok(Transfer::Held { library, occupant });
                }
                let to = self.registry.resolve(at, stack)?;
                self.guard.try_enter(library, cursor);
                Transfer::Jump(to)
            }
            (WarpKind::SingletonInner, Some(library)) => {
                // An empty stack is reported as an unbalanced return below.
                if !stack.is_empty() && self.guard.occupant(library) != Some(cursor) {
                    return Err(WarpError::SingletonNotHeld {
                        library,
                        cursor,
                        at,
                    });
                }
                let to = self.registry.resolve(at, stack)?;
                self.guard.exit(library, cursor, at)?;
                Transfer::Jump(to)
            }
            _ => Transfer::Jump(self.registry.resolve(at, stack)?),
        };
        Ok(transfer)
    }

    /// Release whatever `cursor` held, after it halts.
    pub fn halt(&mut self, cursor: CursorId) -> Vec<LibraryId> {
        self.guard.evict(cursor)
    }
}
