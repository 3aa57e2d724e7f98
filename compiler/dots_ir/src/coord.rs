//! Grid coordinates.
//!
//! Provides a compact 8-byte cell address. Rows and columns are stored
//! zero-based and displayed one-based, matching how editors number lines.

use std::fmt;

/// Error when building a coordinate from indices that exceed `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    /// Row index exceeds `u32::MAX`.
    #[error("row {0} (0x{0:X}) exceeds u32::MAX")]
    RowTooLarge(usize),
    /// Column index exceeds `u32::MAX`.
    #[error("column {0} (0x{0:X}) exceeds u32::MAX")]
    ColumnTooLarge(usize),
}

/// Address of one grid cell.
///
/// Layout: 8 bytes total
/// - row: u32 - zero-based row
/// - col: u32 - zero-based column, counted in `char`s
///
/// Ordering is row-major, which is the scan order used for warp pairing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[repr(C)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    /// The top-left cell.
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Coord { row, col }
    }

    /// Try to create a coordinate from `usize` indices.
    ///
    /// Use this for fallible conversion when indexing user-supplied text.
    #[inline]
    pub fn try_from_indices(row: usize, col: usize) -> Result<Self, CoordError> {
        let row = u32::try_from(row).map_err(|_| CoordError::RowTooLarge(row))?;
        let col = u32::try_from(col).map_err(|_| CoordError::ColumnTooLarge(col))?;
        Ok(Coord { row, col })
    }

    /// Shift this coordinate down by `rows`, saturating at `u32::MAX`.
    #[inline]
    #[must_use]
    pub const fn shifted_down(self, rows: u32) -> Self {
        Coord {
            row: self.row.saturating_add(rows),
            col: self.col,
        }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            u64::from(self.row) + 1,
            u64::from(self.col) + 1
        )
    }
}

#[cfg(test)]
mod tests;
