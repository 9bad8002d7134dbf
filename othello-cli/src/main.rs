//! A console Othello game over the `othello-board` engine.
//!
//! Each side is either a human typing cell ids or a computer proposing
//! random cells; the board rejects anything illegal and the driver decides
//! whether to re-prompt or skip.

mod players;

use clap::{Parser, ValueEnum};
use othello_board::{Board, Color};
use players::{Computer, Human, Player};

/// How many rejected proposals a computer player may burn through in one
/// turn before the driver skips it. Random proposals may simply have no
/// legal cell left to find.
const COMPUTER_ATTEMPTS: usize = 200;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlayerKind {
    Human,
    Computer,
}

/// Two-player console Othello
#[derive(Parser)]
#[command(name = "othello-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Who plays the black stones (black moves first)
    #[arg(long, value_enum, default_value = "human")]
    black: PlayerKind,

    /// Who plays the white stones
    #[arg(long, value_enum, default_value = "computer")]
    white: PlayerKind,
}

fn make_player(kind: PlayerKind, color: Color) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(Human::new(color)),
        PlayerKind::Computer => Box::new(Computer::new(color)),
    }
}

fn main() {
    let cli = Cli::parse();
    let mut players = [
        make_player(cli.black, Color::Black),
        make_player(cli.white, Color::White),
    ];

    let mut board = Board::new();
    render(&board);

    let mut turn = 0;
    while !board.is_full() {
        let player = players[turn % 2].as_mut();
        if take_turn(&mut board, player) {
            render(&board);
        } else {
            println!("{} skipped!\n", player.color());
        }
        board.update();
        turn += 1;
    }

    render_winner(&board);
}

/// Run one player's turn to completion. Returns false if the turn was
/// skipped, either voluntarily or because a computer ran out of attempts.
fn take_turn(board: &mut Board, player: &mut dyn Player) -> bool {
    let mut attempts = 0;
    loop {
        let proposal = player.propose_move();

        if proposal == "s" || proposal == "skip" {
            return false;
        }

        if board.try_put_stone(&proposal, player.color()) {
            return true;
        }

        if player.is_interactive() {
            for message in board.messages() {
                println!("{}", message);
            }
        }
        board.update();

        attempts += 1;
        if !player.is_interactive() && attempts >= COMPUTER_ATTEMPTS {
            return false;
        }
    }
}

fn render(board: &Board) {
    println!("{}", board);
    println!("White: {}, Black: {}", board.white_count(), board.black_count());
    println!("Stones remaining: {}\n", board.remaining_cells());
}

fn render_winner(board: &Board) {
    println!("White: {}, Black: {}", board.white_count(), board.black_count());
    match board.winner() {
        Some(color) => println!("Winner: {}!", color),
        None => println!("Draw!"),
    }
}
