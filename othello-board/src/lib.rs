//! `othello-board` is a two-player Othello board engine.
//!
//! The crate is the game's state machine only. It owns the 8x8 grid of
//! [`Cell`]s, validates placements against the capture rule, resolves flips
//! in all eight compass directions, and keeps authoritative stone counts.
//! Turn order, player input, and rendering belong to the driver: the board
//! exposes [`Board::try_put_stone`] plus read-only accessors, and reports
//! rejections through a message log the driver drains between turns.

mod board;
mod cell;
mod direction;
mod location;

pub use board::*;
pub use cell::*;
pub use direction::*;
pub use location::*;

/// The number of cells on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on an Othello board.
pub const NUM_SPACES: usize = 64;
