//! The Othello board state machine: placement validation, directional flip
//! resolution, and incremental stone accounting.

use crate::cell::{Cell, Color};
use crate::direction::Direction;
use crate::location::{Location, ParseLocationError};
use crate::{EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::Display;
use std::cmp::Ordering;
use std::fmt;

/// The longest run a line scan can traverse: from a cell on one edge to the
/// cell on the opposite edge.
const LINE_CAPACITY: usize = EDGE_LENGTH - 1;

/// The ordered run of opposing stones captured along one direction.
type FlipLine = ArrayVec<[Location; LINE_CAPACITY]>;

/// Why a move was rejected. A rejection never changes board state, so the
/// same player may be re-prompted with the reason.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum MoveError {
    #[display(fmt = "{}", _0)]
    BadCellId(ParseLocationError),
    #[display(fmt = "{} is already occupied", _0)]
    Occupied(Location),
    #[display(fmt = "placing at {} captures nothing", _0)]
    NoCapture(Location),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::BadCellId(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseLocationError> for MoveError {
    fn from(err: ParseLocationError) -> Self {
        MoveError::BadCellId(err)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display(fmt = "a board is exactly 64 symbol characters")]
    WrongLength,
    #[display(fmt = "board symbols are 'x', 'o' and '-'")]
    UnknownSymbol,
}

/// The 8x8 Othello board.
///
/// Stone counts are maintained incrementally, one transfer per flip and one
/// increment per placement, and are never recomputed by scanning the grid.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Cell; NUM_SPACES],
    black_count: usize,
    white_count: usize,
    messages: Vec<String>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Construct the standard starting position: white on the upper-left
    /// and lower-right of the four center cells, black on the other two.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let upper = EDGE_LENGTH / 2 - 1;
        let lower = EDGE_LENGTH / 2;
        board.put(Location { row: upper, col: upper }, Color::White);
        board.put(Location { row: lower, col: lower }, Color::White);
        board.put(Location { row: upper, col: lower }, Color::Black);
        board.put(Location { row: lower, col: upper }, Color::Black);
        board
    }

    fn empty() -> Self {
        let cells: [Cell; NUM_SPACES] = std::array::from_fn(|index| {
            Cell::new(Location {
                row: index / EDGE_LENGTH,
                col: index % EDGE_LENGTH,
            })
        });
        Self {
            cells,
            black_count: 0,
            white_count: 0,
            messages: Vec::new(),
        }
    }

    /// Get the cell at `location`.
    #[inline]
    pub fn cell(&self, location: Location) -> &Cell {
        &self.cells[location.to_index()]
    }

    /// Iterate every cell, row-major from the upper left.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Iterate the grid one row at a time, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(EDGE_LENGTH)
    }

    #[inline]
    pub fn black_count(&self) -> usize {
        self.black_count
    }

    #[inline]
    pub fn white_count(&self) -> usize {
        self.white_count
    }

    /// The number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black_count,
            Color::White => self.white_count,
        }
    }

    /// How many cells are still empty.
    #[inline]
    pub fn remaining_cells(&self) -> usize {
        NUM_SPACES - self.black_count - self.white_count
    }

    /// Whether every cell is occupied: the game-over condition.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.remaining_cells() == 0
    }

    /// The color with strictly more stones, or None for a draw.
    /// Meaningful once [`Board::is_full`] reports the game over.
    pub fn winner(&self) -> Option<Color> {
        match self.black_count.cmp(&self.white_count) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }

    /// Attempt a move, logging the rejection reason on failure.
    ///
    /// This is the surface console drivers consume: the typed errors from
    /// [`Board::apply_move`] become human-readable entries in the message
    /// log, which the driver prints and then clears with [`Board::update`].
    pub fn try_put_stone(&mut self, cell_id: &str, color: Color) -> bool {
        match self.apply_move(cell_id, color) {
            Ok(()) => true,
            Err(err) => {
                self.messages.push(err.to_string());
                false
            }
        }
    }

    /// Validate and apply a move.
    ///
    /// On success every captured line is flipped and the new stone placed;
    /// captures in multiple directions are cumulative. On failure the board
    /// is left untouched.
    pub fn apply_move(&mut self, cell_id: &str, color: Color) -> Result<(), MoveError> {
        let location: Location = cell_id.parse()?;
        if !self.cell(location).is_empty() {
            return Err(MoveError::Occupied(location));
        }

        let mut captured_any = false;
        for &direction in Direction::ALL.iter() {
            let line = self.line_flips(location, color, direction);
            captured_any |= !line.is_empty();
            for flip_location in line {
                self.flip(flip_location);
            }
        }

        if !captured_any {
            return Err(MoveError::NoCapture(location));
        }

        self.put(location, color);
        Ok(())
    }

    /// Rejection messages accumulated since the last [`Board::update`].
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// New-turn housekeeping: clear the rejection log.
    /// Grid state is never touched here.
    pub fn update(&mut self) {
        self.messages.clear();
    }

    /// Scan outward from `origin` along `direction`, collecting the run of
    /// stones opposing `color`. The run is captured only when a stone of
    /// `color` (the anchor) terminates it; an empty cell or the board edge
    /// ends the line with nothing captured.
    fn line_flips(&self, origin: Location, color: Color, direction: Direction) -> FlipLine {
        let mut line = FlipLine::new();
        let mut cursor = origin.step(direction);

        while let Some(location) = cursor {
            match self.cell(location).color() {
                None => break,
                Some(c) if c == color => return line,
                Some(_) => line.push(location),
            }
            cursor = location.step(direction);
        }

        // Ran into an empty cell or off the edge: the run is unbounded and
        // nothing inspected along it may be flipped.
        FlipLine::new()
    }

    /// Flip one captured stone, transferring one count between the colors.
    /// Only ever called on locations the line scan saw a stone at.
    fn flip(&mut self, location: Location) {
        let index = location.to_index();
        let flipped = self.cells[index].try_flip();
        assert!(flipped, "flipped an unoccupied cell at {}", location);

        match self.cells[index].color() {
            Some(Color::Black) => {
                self.black_count += 1;
                self.white_count -= 1;
            }
            Some(Color::White) => {
                self.white_count += 1;
                self.black_count -= 1;
            }
            None => unreachable!(),
        }
    }

    /// Place a new stone on an empty cell and count it.
    fn put(&mut self, location: Location, color: Color) {
        self.cells[location.to_index()].place(color);
        match color {
            Color::Black => self.black_count += 1,
            Color::White => self.white_count += 1,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row_index, row) in self.rows().enumerate() {
            write!(f, "{} ", row_index + 1)?;
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build a board from 64 symbol characters ('x', 'o', '-'), row-major from
/// the upper left. Whitespace is ignored, so multi-line literals work.
/// Counts are tallied once here, then maintained incrementally as usual.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut index = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            if index >= NUM_SPACES {
                return Err(ParseBoardError::WrongLength);
            }
            let location = Location {
                row: index / EDGE_LENGTH,
                col: index % EDGE_LENGTH,
            };
            match symbol {
                'x' => board.put(location, Color::Black),
                'o' => board.put(location, Color::White),
                '-' => {}
                _ => return Err(ParseBoardError::UnknownSymbol),
            }
            index += 1;
        }

        if index != NUM_SPACES {
            return Err(ParseBoardError::WrongLength);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(cell_id: &str) -> Location {
        cell_id.parse().unwrap()
    }

    fn grid_count(board: &Board, color: Color) -> usize {
        board.cells().filter(|cell| cell.color() == Some(color)).count()
    }

    fn assert_counts_match_grid(board: &Board) {
        assert_eq!(board.black_count(), grid_count(board, Color::Black));
        assert_eq!(board.white_count(), grid_count(board, Color::White));
        assert_eq!(
            board.remaining_cells(),
            board.cells().filter(|cell| cell.is_empty()).count()
        );
    }

    #[test]
    fn starting_position() {
        let board = Board::new();
        assert_eq!(board.black_count(), 2);
        assert_eq!(board.white_count(), 2);
        assert_eq!(board.remaining_cells(), 60);
        assert!(!board.is_full());

        assert_eq!(board.cell(location("d4")).color(), Some(Color::White));
        assert_eq!(board.cell(location("e5")).color(), Some(Color::White));
        assert_eq!(board.cell(location("e4")).color(), Some(Color::Black));
        assert_eq!(board.cell(location("d5")).color(), Some(Color::Black));
        assert_counts_match_grid(&board);
    }

    #[test]
    fn opening_move_flips_one_white_stone() {
        let mut board = Board::new();
        assert!(board.try_put_stone("d3", Color::Black));

        assert_eq!(board.cell(location("d3")).color(), Some(Color::Black));
        assert_eq!(board.cell(location("d4")).color(), Some(Color::Black));
        assert_eq!(board.black_count(), 4);
        assert_eq!(board.white_count(), 1);
        assert_eq!(board.remaining_cells(), 59);
        assert!(board.messages().is_empty());
        assert_counts_match_grid(&board);
    }

    #[test]
    fn corner_on_the_starting_board_captures_nothing() {
        let mut board = Board::new();
        assert!(!board.try_put_stone("a1", Color::Black));

        assert_eq!(board.black_count(), 2);
        assert_eq!(board.white_count(), 2);
        assert!(board.cell(location("a1")).is_empty());
        assert_eq!(board.messages().len(), 1);
        assert!(board.messages()[0].contains("captures nothing"));
    }

    #[test]
    fn occupied_cell_is_rejected_every_time() {
        let mut board = Board::new();
        for _ in 0..3 {
            assert!(!board.try_put_stone("d4", Color::Black));
            assert_eq!(board.black_count(), 2);
            assert_eq!(board.white_count(), 2);
            assert_eq!(board.cell(location("d4")).color(), Some(Color::White));
        }
        assert_eq!(board.messages().len(), 3);
        assert!(board.messages()[0].contains("already occupied"));
        assert_counts_match_grid(&board);
    }

    #[test]
    fn malformed_cell_ids_are_rejected() {
        let mut board = Board::new();
        for cell_id in &["", "d", "d33", "z3", "d9", "33", "dd"] {
            assert!(!board.try_put_stone(cell_id, Color::Black));
            assert_eq!(board.remaining_cells(), 60);
        }
        assert_eq!(board.messages().len(), 7);
    }

    #[test]
    fn typed_rejections() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_move("j9", Color::Black),
            Err(MoveError::BadCellId(ParseLocationError::UnknownColumn))
        );
        assert_eq!(
            board.apply_move("d4", Color::Black),
            Err(MoveError::Occupied(location("d4")))
        );
        assert_eq!(
            board.apply_move("a1", Color::Black),
            Err(MoveError::NoCapture(location("a1")))
        );
        // The typed path does not touch the message log.
        assert!(board.messages().is_empty());
    }

    #[test]
    fn update_clears_the_message_log_only() {
        let mut board = Board::new();
        board.try_put_stone("a1", Color::Black);
        assert_eq!(board.messages().len(), 1);

        board.update();
        assert!(board.messages().is_empty());
        assert_eq!(board.remaining_cells(), 60);
    }

    #[test]
    fn capture_in_two_directions_at_once() {
        let mut board: Board = "\
            xo------\n\
            --o-----\n\
            --x-----\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n"
            .parse()
            .unwrap();

        assert!(board.try_put_stone("c1", Color::Black));
        assert_eq!(board.cell(location("b1")).color(), Some(Color::Black));
        assert_eq!(board.cell(location("c2")).color(), Some(Color::Black));
        assert_eq!(board.black_count(), 5);
        assert_eq!(board.white_count(), 0);
        assert_counts_match_grid(&board);
    }

    #[test]
    fn a_full_board_reports_its_winner() {
        let board: Board = "\
            xxxxxxxx\n\
            xxxxxxxx\n\
            xxxxxxxx\n\
            xxxxxxxx\n\
            xxxxxxxx\n\
            oooooooo\n\
            oooooooo\n\
            oooooooo\n"
            .parse()
            .unwrap();

        assert!(board.is_full());
        assert_eq!(board.remaining_cells(), 0);
        assert_eq!(board.black_count(), 40);
        assert_eq!(board.white_count(), 24);
        assert_eq!(board.winner(), Some(Color::Black));
    }

    #[test]
    fn an_even_board_is_a_draw() {
        let even = format!("{}{}", "x".repeat(32), "o".repeat(32));
        let board: Board = even.parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn edge_and_corner_probes_never_fault() {
        // A sparse board: every placement fails, but every directional walk
        // from the rim must terminate cleanly at the edges.
        let mut board: Board = "-".repeat(NUM_SPACES).parse().unwrap();
        let rim = (0..EDGE_LENGTH).flat_map(|i| {
            vec![(0, i), (EDGE_LENGTH - 1, i), (i, 0), (i, EDGE_LENGTH - 1)]
        });
        for (row, col) in rim {
            let cell_id = Location::from_coords(row, col).unwrap().to_string();
            assert!(!board.try_put_stone(&cell_id, Color::Black));
            assert!(!board.try_put_stone(&cell_id, Color::White));
        }
        assert_eq!(board.remaining_cells(), NUM_SPACES);
    }

    #[test]
    fn a_capture_to_the_rim_flips_the_whole_run() {
        // Black at h1 anchors a run of six white stones; placing at a1
        // captures all of them.
        let mut board: Board = "\
            -oooooox\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n"
            .parse()
            .unwrap();

        assert!(board.try_put_stone("a1", Color::Black));
        assert_eq!(board.black_count(), 8);
        assert_eq!(board.white_count(), 0);
        assert_counts_match_grid(&board);
    }

    #[test]
    fn an_unanchored_run_captures_nothing() {
        // Seven white stones fill the rest of the row: no anchor exists, so
        // the scan must refuse the line rather than run off the edge.
        let mut board: Board = "\
            -ooooooo\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n\
            --------\n"
            .parse()
            .unwrap();

        assert!(!board.try_put_stone("a1", Color::Black));
        assert_eq!(board.white_count(), 7);
        assert_eq!(board.black_count(), 0);
    }

    #[test]
    fn board_parse_failures() {
        assert_eq!(
            "xx".parse::<Board>().unwrap_err(),
            ParseBoardError::WrongLength
        );
        assert_eq!(
            "-".repeat(NUM_SPACES + 1).parse::<Board>().unwrap_err(),
            ParseBoardError::WrongLength
        );
        assert_eq!(
            "?".repeat(NUM_SPACES).parse::<Board>().unwrap_err(),
            ParseBoardError::UnknownSymbol
        );
    }

    #[test]
    fn display_renders_the_grid() {
        let rendered = Board::new().to_string();
        assert!(rendered.contains("  a b c d e f g h"));
        assert!(rendered.contains("4 - - - o x - - -"));
        assert!(rendered.contains("5 - - - x o - - -"));
    }
}
