//! Stone colors and the grid cells that hold them.

use crate::Location;
use derive_more::{Display, Error};
use std::fmt;

/// One of the two stone colors (equivalently, one of the two players).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting color (black moves first).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the opposite color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "a color is 'black' or 'white'")]
pub struct ParseColorError;

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// A single cell of the grid: a fixed location which is empty or holds one
/// stone. The location never changes after construction; the stone may only
/// change color through [`Cell::try_flip`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cell {
    location: Location,
    color: Option<Color>,
}

impl Cell {
    pub(crate) fn new(location: Location) -> Self {
        Self {
            location,
            color: None,
        }
    }

    #[inline]
    pub fn location(self) -> Location {
        self.location
    }

    #[inline]
    pub fn color(self) -> Option<Color> {
        self.color
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.color.is_none()
    }

    /// The single-character display symbol: 'x' black, 'o' white, '-' empty.
    pub fn symbol(self) -> char {
        match self.color {
            Some(Color::Black) => 'x',
            Some(Color::White) => 'o',
            None => '-',
        }
    }

    /// Invert the stone's color in place.
    /// Returns false, leaving the cell untouched, if the cell is empty.
    pub fn try_flip(&mut self) -> bool {
        match self.color {
            None => false,
            Some(color) => {
                self.color = Some(!color);
                true
            }
        }
    }

    /// Put a stone on an empty cell. Placing onto an occupied cell is a
    /// contract violation; the board checks occupancy first.
    pub(crate) fn place(&mut self, color: Color) {
        debug_assert!(self.is_empty(), "placed onto occupied cell {}", self.location);
        self.color = Some(color);
    }
}
