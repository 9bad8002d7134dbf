//! The move sources the console driver can seat at the board.

use othello_board::{Color, EDGE_LENGTH};
use rand::Rng;
use std::io::{self, Write};

/// A source of proposed moves for one side.
///
/// Proposals are plain strings, not validated locations: the board is the
/// only judge of legality, and a rejected proposal comes straight back to
/// the same player.
pub trait Player {
    fn color(&self) -> Color;

    /// Produce the next proposed move: a cell id, or "s" to skip the turn.
    fn propose_move(&mut self) -> String;

    /// Whether rejections should be shown and retried indefinitely.
    fn is_interactive(&self) -> bool;
}

/// A human player reading moves from stdin.
pub struct Human {
    color: Color,
}

impl Human {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Player for Human {
    fn color(&self) -> Color {
        self.color
    }

    fn propose_move(&mut self) -> String {
        print!("{} turn: ", self.color);
        io::stdout().flush().unwrap();

        let mut line = String::new();
        io::stdin().read_line(&mut line).unwrap();
        line.trim().to_string()
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// A computer player proposing uniformly random in-range cells, with no
/// legality pre-check of its own.
pub struct Computer {
    color: Color,
    rng: rand::rngs::ThreadRng,
}

impl Computer {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rng: rand::thread_rng(),
        }
    }
}

impl Player for Computer {
    fn color(&self) -> Color {
        self.color
    }

    fn propose_move(&mut self) -> String {
        let column = (b'a' + self.rng.gen_range(0..EDGE_LENGTH as u8)) as char;
        let row = self.rng.gen_range(1..=EDGE_LENGTH);
        format!("{}{}", column, row)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
