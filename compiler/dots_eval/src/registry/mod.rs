//! Warp registry.
//!
//! Built once per loaded program. Groups every warp cell by its [`Link`],
//! validates each group, and stores the result as an arena of
//! [`WarpRecord`]s indexed by [`WarpId`]. Immutable after [`WarpRegistry::build`].

use std::fmt;

use dots_ir::{Coord, Grid, LibraryId, Link, WarpSymbol};
use rustc_hash::FxHashMap;

use crate::call_stack::CallStack;
use crate::errors::{MalformedReason, WarpError};

/// Index of a paired warp group in the registry arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct WarpId(u32);

impl WarpId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WarpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Where the members of a group send a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Binding {
    /// Two plain warps, each the other's destination.
    Pair { ends: [Coord; 2] },
    /// A library: every call site leads to `entry`; `entry` returns through
    /// the call stack. A singleton library may have call sites in several
    /// sheets, all sharing one body.
    Library {
        library: LibraryId,
        singleton: bool,
        entry: Coord,
        call_sites: Vec<Coord>,
    },
}

/// One validated warp group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarpRecord {
    pub id: WarpId,
    /// Glyph of the group's first cell in scan order.
    pub glyph: char,
    pub link: Link,
    pub binding: Binding,
}

/// A warp cell and the group it belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WarpCell {
    pub id: WarpId,
    pub glyph: char,
    pub warp: WarpSymbol,
}

/// A warp cell of a group: where it is, its glyph, its payload.
type Member = (Coord, char, WarpSymbol);

/// Group under construction.
struct Group {
    link: Link,
    members: Vec<Member>,
}

impl Group {
    fn glyph(&self) -> char {
        self.members.first().map_or(' ', |(_, glyph, _)| *glyph)
    }

    fn malformed(&self, reason: MalformedReason) -> WarpError {
        WarpError::Malformed {
            glyph: self.glyph(),
            link: self.link,
            reason,
            sites: self.members.iter().map(|(at, _, _)| *at).collect(),
        }
    }

    fn bind(&self) -> Result<Binding, WarpError> {
        match self.link {
            Link::Local { .. } => match self.members.as_slice() {
                [(a, _, _), (b, _, _)] => Ok(Binding::Pair { ends: [*a, *b] }),
                members => Err(self.malformed(MalformedReason::Unpaired {
                    count: members.len(),
                })),
            },
            Link::Library(library) => self.bind_library(library),
        }
    }

    fn bind_library(&self, library: LibraryId) -> Result<Binding, WarpError> {
        let singleton = self
            .members
            .first()
            .is_some_and(|(_, _, warp)| warp.kind().is_singleton());
        if self
            .members
            .iter()
            .any(|(_, _, warp)| warp.kind().is_singleton() != singleton)
        {
            return Err(self.malformed(MalformedReason::IncompatibleVariants));
        }

        let (entries, calls): (Vec<&Member>, Vec<&Member>) = self
            .members
            .iter()
            .partition(|(_, _, warp)| warp.kind().is_return());
        let entry = match entries.as_slice() {
            [(at, _, _)] => *at,
            [] => return Err(self.malformed(MalformedReason::MissingEntry)),
            many => {
                return Err(self.malformed(MalformedReason::DuplicateEntry { count: many.len() }));
            }
        };
        if calls.is_empty() {
            return Err(self.malformed(MalformedReason::NoCallSite));
        }
        let call_sites = calls.into_iter().map(|&(at, _, _)| at).collect();

        Ok(Binding::Library {
            library,
            singleton,
            entry,
            call_sites,
        })
    }
}

/// Arena of warp groups plus a cell index.
#[derive(Clone, Debug, Default)]
pub struct WarpRegistry {
    records: Vec<WarpRecord>,
    cells: FxHashMap<Coord, WarpCell>,
}

impl WarpRegistry {
    /// Scan `grid` and pair every warp.
    ///
    /// Reports every malformed group, in order of each group's first cell.
    pub fn build(grid: &Grid) -> Result<Self, Vec<WarpError>> {
        let mut index: FxHashMap<Link, usize> = FxHashMap::default();
        let mut groups: Vec<Group> = Vec::new();
        for (at, symbol) in grid.cells() {
            let Some(warp) = symbol.as_warp() else {
                continue;
            };
            let slot = *index.entry(warp.link()).or_insert_with(|| {
                groups.push(Group {
                    link: warp.link(),
                    members: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].members.push((at, symbol.glyph(), warp));
        }

        let mut registry = WarpRegistry::default();
        let mut errors = Vec::new();
        for group in &groups {
            match group.bind() {
                Ok(binding) if errors.is_empty() => registry.insert(group, binding),
                Ok(_) => {}
                Err(err) => errors.push(err),
            }
        }
        if !errors.is_empty() {
            tracing::debug!(groups = groups.len(), errors = errors.len(), "warp registry rejected");
            return Err(errors);
        }
        tracing::debug!(
            groups = registry.records.len(),
            cells = registry.cells.len(),
            "warp registry built"
        );
        Ok(registry)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "a grid addressable by u32 coordinates has fewer than u32::MAX warp groups"
    )]
    fn insert(&mut self, group: &Group, binding: Binding) {
        let id = WarpId(self.records.len() as u32);
        for &(at, glyph, warp) in &group.members {
            self.cells.insert(at, WarpCell { id, glyph, warp });
        }
        self.records.push(WarpRecord {
            id,
            glyph: group.glyph(),
            link: group.link,
            binding,
        });
    }

    /// Number of warp groups.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Groups in order of their first cell.
    pub fn iter(&self) -> impl Iterator<Item = &WarpRecord> {
        self.records.iter()
    }

    pub fn record(&self, id: WarpId) -> Option<&WarpRecord> {
        self.records.get(id.index())
    }

    pub fn warp_at(&self, at: Coord) -> Option<WarpCell> {
        self.cells.get(&at).copied()
    }

    pub fn id_of(&self, at: Coord) -> Option<WarpId> {
        self.cells.get(&at).map(|cell| cell.id)
    }

    fn lookup(&self, at: Coord) -> Result<(WarpCell, &WarpRecord), WarpError> {
        let cell = self.warp_at(at).ok_or(WarpError::NotAWarp { at })?;
        let record = self.record(cell.id).ok_or(WarpError::NotAWarp { at })?;
        Ok((cell, record))
    }

    /// The static destination of the warp at `at`.
    ///
    /// Return warps have none: theirs is decided by the call stack.
    pub fn destination(&self, at: Coord) -> Result<Coord, WarpError> {
        let (cell, record) = self.lookup(at)?;
        if cell.warp.kind().is_return() {
            return Err(WarpError::InvalidWarpOperation {
                glyph: cell.glyph,
                kind: cell.warp.kind(),
                at,
                operation: "take the static destination",
            });
        }
        match &record.binding {
            Binding::Pair { ends: [a, b] } => Ok(if *a == at { *b } else { *a }),
            Binding::Library { entry, .. } => Ok(*entry),
        }
    }

    /// Where a cursor at the warp `at` goes next.
    ///
    /// Call sites push `at` onto `stack`; return warps pop it. On error the
    /// stack is unchanged.
    pub fn resolve(&self, at: Coord, stack: &mut CallStack) -> Result<Coord, WarpError> {
        let (cell, _) = self.lookup(at)?;
        let kind = cell.warp.kind();
        let to = if kind.is_return() {
            stack.pop().ok_or(WarpError::UnbalancedReturn {
                glyph: cell.glyph,
                at,
            })?
        } else {
            let to = self.destination(at)?;
            if kind.is_call() {
                stack.push(at)?;
            }
            to
        };
        tracing::trace!(glyph = %cell.glyph, %kind, from = %at, %to, depth = stack.depth(), "warp");
        Ok(to)
    }
}
