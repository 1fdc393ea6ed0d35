//! Tic-tac-toe game logic.
//!
//! Two local players alternately mark a 3x3 board until one completes a
//! row, column, or diagonal, or the board fills.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Mark, Outcome, Position};
//!
//! let mut game = GameState::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ] {
//!     game.place(pos);
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Mark::X));
//!
//! // Finished games ignore further placements.
//! game.place(Position::BottomRight);
//! assert!(game.board().is_empty(Position::BottomRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod labels;
mod position;
pub mod rules;
mod types;

pub use game::{GameState, PlaceError};
pub use labels::{
    DRAW_STATUS, EMPTY_CELL_MARKER, LabelError, MAX_LABEL_CHARS, MarkLabels, status_line,
};
pub use position::Position;
pub use types::{Board, Mark, Outcome, Square};
