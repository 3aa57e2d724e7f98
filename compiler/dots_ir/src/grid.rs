//! Classified program grid.
//!
//! A `Grid` is ragged: rows keep their source length. Cells past the end of
//! a row read as absent, not blank, so callers can tell "off the track"
//! apart from "empty track".

use crate::coord::{Coord, CoordError};
use crate::symbol::{Symbol, WarpSymbol};

/// Row-major grid of classified symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Symbol>>,
}

impl Grid {
    /// Build a grid, checking that every cell is addressable by a [`Coord`].
    pub fn new(rows: Vec<Vec<Symbol>>) -> Result<Self, CoordError> {
        let last_row = rows.len().saturating_sub(1);
        Coord::try_from_indices(last_row, 0)?;
        for row in &rows {
            Coord::try_from_indices(0, row.len().saturating_sub(1))?;
        }
        Ok(Grid { rows })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// The symbol at `at`, or `None` when `at` is outside the grid.
    pub fn get(&self, at: Coord) -> Option<Symbol> {
        let row = self.rows.get(usize::try_from(at.row).ok()?)?;
        row.get(usize::try_from(at.col).ok()?).copied()
    }

    /// One row of symbols.
    pub fn row(&self, index: usize) -> Option<&[Symbol]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Symbol)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, sym)| (index_coord(r, c), *sym))
        })
    }

    /// Every warp cell in row-major order.
    pub fn warps(&self) -> impl Iterator<Item = (Coord, WarpSymbol)> + '_ {
        self.cells()
            .filter_map(|(at, sym)| sym.as_warp().map(|warp| (at, warp)))
    }

    /// Append `other` below this grid, returning the row offset it landed at.
    pub fn append(&mut self, other: Grid) -> Result<u32, CoordError> {
        let offset = self.rows.len();
        let offset = Coord::try_from_indices(offset, 0)?.row;
        Coord::try_from_indices(
            (self.rows.len() + other.rows.len()).saturating_sub(1),
            0,
        )?;
        self.rows.extend(other.rows);
        Ok(offset)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Grid::new and Grid::append reject dimensions beyond u32::MAX"
)]
fn index_coord(row: usize, col: usize) -> Coord {
    Coord::new(row as u32, col as u32)
}

#[cfg(test)]
mod tests;
