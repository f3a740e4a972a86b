//! The 3x3 board.
//!
//! Cells are indexed `0..9` in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! Serializes as a flat array of nine integers (see [`Mark`]).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::player::Mark;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The center cell.
pub const CENTER: usize = 4;

/// Corner cells, in the order the bot prefers them.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Indices of empty cells. Never more than nine, so it stays on the stack.
pub type CellList = SmallVec<[usize; CELL_COUNT]>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([Mark; CELL_COUNT]);

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self(cells)
    }

    #[must_use]
    pub const fn marks(&self) -> &[Mark; CELL_COUNT] {
        &self.0
    }

    /// Get the mark at a cell, `None` if the index is off the board.
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.0.get(cell).copied()
    }

    /// True if the cell is on the board and holds no mark.
    #[must_use]
    pub fn is_open(&self, cell: usize) -> bool {
        self.get(cell).is_some_and(Mark::is_empty)
    }

    /// Write a mark. Callers validate the index first.
    pub(crate) fn set(&mut self, cell: usize, mark: Mark) {
        self.0[cell] = mark;
    }

    /// A copy of this board with `mark` written at `cell`.
    ///
    /// Returns `None` if the index is off the board.
    #[must_use]
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Option<Self> {
        let mut copy = *self;
        *copy.0.get_mut(cell)? = mark;
        Some(copy)
    }

    /// Empty cells in ascending order.
    #[must_use]
    pub fn open_cells(&self) -> CellList {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(cell, _)| cell)
            .collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|mark| !mark.is_empty())
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, cell: usize) -> &Self::Output {
        &self.0[cell]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.0.chunks(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}{}{}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
