//! Code for working with [`Location`]s on the Othello board.

use crate::{Direction, EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt::{self, Write};

const COLUMNS: &str = "abcdefgh";
const ROWS: &str = "12345678";

/// A location on the Othello board: row and column, 0-indexed from the
/// upper left.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Location {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl Location {
    /// Construct a Location from row and column coordinates.
    /// Returns None if the coordinates provided are not valid.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self { row, col })
        }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row * EDGE_LENGTH + self.col
    }

    /// Move one cell in `direction`, or None when the step exits the grid.
    /// Bounds are checked against the row and column before any indexing
    /// can happen, so walking off an edge is never a fault.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, col_delta) = direction.deltas();
        let row = self.row as isize + row_delta;
        let col = self.col as isize + col_delta;
        if row < 0 || row >= EDGE_LENGTH as isize || col < 0 || col >= EDGE_LENGTH as isize {
            return None;
        }
        Some(Self {
            row: row as usize,
            col: col as usize,
        })
    }
}

/// Convert this [`Location`] into cell-id notation ("d3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col_char = COLUMNS.chars().nth(self.col).ok_or(fmt::Error)?;
        let row_char = ROWS.chars().nth(self.row).ok_or(fmt::Error)?;
        f.write_char(col_char)?;
        f.write_char(row_char)
    }
}

/// Why a cell id failed to parse. Each variant carries the message shown
/// to the player who typed it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseLocationError {
    #[display(fmt = "a cell id is two characters, like a8 or d3")]
    WrongLength,
    #[display(fmt = "the column must be a letter from a to h")]
    UnknownColumn,
    #[display(fmt = "the row must be a digit from 1 to 8")]
    UnknownRow,
}

/// Build a [`Location`] from cell-id notation: a column letter 'a'..'h'
/// followed by a row digit '1'..'8'.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(ParseLocationError::WrongLength)?;
        let row_char = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(ParseLocationError::WrongLength),
        };

        let col = COLUMNS.find(col_char).ok_or(ParseLocationError::UnknownColumn)?;
        let row = ROWS.find(row_char).ok_or(ParseLocationError::UnknownRow)?;
        Ok(Self { row, col })
    }
}
