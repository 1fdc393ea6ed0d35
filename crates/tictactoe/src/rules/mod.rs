//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state, so the
//! outcome of a game is always recomputed from the board alone.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board.
///
/// A completed line wins, even on a full board. A full board without a
/// completed line is a draw.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
