//! The eight principal compass directions a capture line can run along.

/// One step of movement between adjacent cells, including diagonals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Direction {
    /// Every direction, in scan order.
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerLeft,
        Self::LowerRight,
    ];

    /// The (row, column) deltas for one step in this direction.
    pub fn deltas(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::UpperLeft => (-1, -1),
            Self::UpperRight => (-1, 1),
            Self::LowerLeft => (1, -1),
            Self::LowerRight => (1, 1),
        }
    }
}
