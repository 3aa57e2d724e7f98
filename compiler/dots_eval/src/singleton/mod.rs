//! Singleton library guard.
//!
//! One occupancy slot per singleton library, shared by every cursor. A
//! cursor that finds the slot taken by another cursor is held: its step is
//! deferred by the scheduler, never dropped and never faulted.

use std::fmt;

use dots_ir::{Coord, LibraryId};
use rustc_hash::FxHashMap;

use crate::errors::WarpError;

/// Identity of one cursor, assigned by the scheduler.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct CursorId(u32);

impl CursorId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        CursorId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CursorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of an entry attempt.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Entry {
    /// The cursor now occupies the library.
    Entered,
    /// Another cursor occupies the library; retry on a later tick.
    Held { occupant: CursorId },
}

#[derive(Copy, Clone, Debug)]
struct Occupancy {
    cursor: CursorId,
    /// Nested entries by the occupant; the slot clears when this reaches zero.
    depth: u32,
}

/// Occupancy table keyed by library.
#[derive(Clone, Debug, Default)]
pub struct SingletonGuard {
    occupied: FxHashMap<LibraryId, Occupancy>,
}

impl SingletonGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cursor currently inside `library`, if any.
    pub fn occupant(&self, library: LibraryId) -> Option<CursorId> {
        self.occupied.get(&library).map(|slot| slot.cursor)
    }

    pub fn is_occupied(&self, library: LibraryId) -> bool {
        self.occupied.contains_key(&library)
    }

    /// Number of occupied libraries.
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Whether `cursor` could enter `library` right now. Does not mutate.
    pub fn check(&self, library: LibraryId, cursor: CursorId) -> Entry {
        match self.occupied.get(&library) {
            Some(slot) if slot.cursor != cursor => Entry::Held {
                occupant: slot.cursor,
            },
            _ => Entry::Entered,
        }
    }

    /// Try to enter `library`.
    ///
    /// The occupant itself may enter again; each entry needs its own exit.
    pub fn try_enter(&mut self, library: LibraryId, cursor: CursorId) -> Entry {
        let slot = self.occupied.entry(library).or_insert(Occupancy { cursor, depth: 0 });
        if slot.cursor != cursor {
            tracing::debug!(%library, %cursor, occupant = %slot.cursor, "singleton held");
            return Entry::Held {
                occupant: slot.cursor,
            };
        }
        slot.depth += 1;
        tracing::trace!(%library, %cursor, depth = slot.depth, "singleton entered");
        Entry::Entered
    }

    /// Leave `library`. Only the occupant may leave.
    pub fn exit(&mut self, library: LibraryId, cursor: CursorId, at: Coord) -> Result<(), WarpError> {
        let Some(slot) = self.occupied.get_mut(&library).filter(|slot| slot.cursor == cursor) else {
            return Err(WarpError::SingletonNotHeld { library, cursor, at });
        };
        slot.depth -= 1;
        if slot.depth == 0 {
            self.occupied.remove(&library);
            tracing::debug!(%library, %cursor, "singleton released");
        }
        Ok(())
    }

    /// Release every library held by `cursor`, e.g. after it halts on a
    /// fault. Returns the freed libraries in ascending order.
    pub fn evict(&mut self, cursor: CursorId) -> Vec<LibraryId> {
        let mut freed: Vec<LibraryId> = self
            .occupied
            .iter()
            .filter(|(_, slot)| slot.cursor == cursor)
            .map(|(library, _)| *library)
            .collect();
        freed.sort_unstable();
        for library in &freed {
            self.occupied.remove(library);
        }
        if !freed.is_empty() {
            tracing::debug!(%cursor, count = freed.len(), "evicted from singleton libraries");
        }
        freed
    }
}

#[cfg(test)]
mod tests;
