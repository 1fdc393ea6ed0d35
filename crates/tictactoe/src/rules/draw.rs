//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut squares = [Square::Occupied(Mark::X); 9];
        squares[4] = Square::Empty;
        assert!(!is_full(&Board::from_squares(squares)));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&Board::from_squares([Square::Occupied(Mark::O); 9])));
    }
}
