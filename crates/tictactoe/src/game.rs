//! The game state machine.
//!
//! [`GameState`] stores only the board and whose turn it is. The
//! [`Outcome`] is recomputed from the board on every query, so it can never
//! drift out of step with the squares.
//!
//! ```text
//! InProgress ──place──▶ InProgress | Won(mark) | Draw
//! Won(_), Draw: terminal until restart()
//! ```

use super::rules;
use super::{Board, Mark, Outcome, Position, Square};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Reasons a placement is refused.
///
/// A refused placement never changes the board or the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The square already holds a mark.
    #[display("{} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game has ended.
    #[display("Game is already over ({})", _0)]
    GameOver(#[error(not(source))] Outcome),
}

/// A single game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Returns the completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board)
    }

    /// Whether a placement at `pos` would be accepted.
    ///
    /// Front ends use this to disable squares.
    pub fn can_place(&self, pos: Position) -> bool {
        !self.is_over() && self.board.is_empty(pos)
    }

    /// Places the current mark at `pos` and passes the turn.
    ///
    /// Returns the outcome after the move.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::GameOver`] if the game has already ended.
    /// - [`PlaceError::SquareOccupied`] if `pos` already holds a mark.
    #[instrument(skip(self), fields(position = %pos, turn = %self.turn))]
    pub fn try_place(&mut self, pos: Position) -> Result<Outcome, PlaceError> {
        let before = self.outcome();
        if before.is_over() {
            return Err(PlaceError::GameOver(before));
        }
        if !self.board.is_empty(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.turn));
        self.turn = self.turn.opponent();

        let after = self.outcome();
        debug!(outcome = %after, next = %self.turn, "Mark placed");
        Ok(after)
    }

    /// Places the current mark at `pos`, ignoring refused placements.
    ///
    /// Refusals leave the game untouched, the same as a disabled square.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn place(&mut self, pos: Position) {
        if let Err(e) = self.try_place(pos) {
            debug!(error = %e, "Placement ignored");
        }
    }

    /// Places by raw board index (0-8). Out-of-range indices are ignored.
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize) {
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => debug!(index, "Placement ignored: index out of range"),
        }
    }

    /// Starts over: empty board, X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(previous = %self.outcome(), "Restarting game");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
