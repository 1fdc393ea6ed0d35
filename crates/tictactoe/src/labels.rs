//! Display labels for the two marks and the status line built from them.

use super::{GameState, Mark, Outcome};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Longest label that still fits inside a board square.
pub const MAX_LABEL_CHARS: usize = 3;

/// Drawn in an empty square once the game is over.
pub const EMPTY_CELL_MARKER: &str = "·";

/// Status shown when the board fills without a winner.
pub const DRAW_STATUS: &str = "Draw! No more moves.";

/// Invalid label configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum LabelError {
    /// A label is empty or only whitespace.
    #[display("Label for {} must not be empty", _0)]
    Empty(#[error(not(source))] Mark),

    /// A label is longer than [`MAX_LABEL_CHARS`].
    #[display("Label {:?} is longer than {} characters", _0, MAX_LABEL_CHARS)]
    TooLong(#[error(not(source))] String),

    /// A label reads like an empty square (a cell number or the
    /// game-over dot).
    #[display("Label {:?} looks like an empty square", _0)]
    Reserved(#[error(not(source))] String),

    /// Both marks would look the same.
    #[display("Both marks are labelled {:?}", _0)]
    Duplicate(#[error(not(source))] String),
}

/// Labels shown for each mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLabels")]
pub struct MarkLabels {
    x: String,
    o: String,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawLabels {
    x: String,
    o: String,
}

impl Default for RawLabels {
    fn default() -> Self {
        Self {
            x: Mark::X.to_string(),
            o: Mark::O.to_string(),
        }
    }
}

impl TryFrom<RawLabels> for MarkLabels {
    type Error = LabelError;

    fn try_from(raw: RawLabels) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.o)
    }
}

impl MarkLabels {
    /// Creates validated labels. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError`] if a label is empty, too long, reads like an
    /// empty square, or both labels are the same.
    #[instrument(skip_all)]
    pub fn new(x: impl AsRef<str>, o: impl AsRef<str>) -> Result<Self, LabelError> {
        let x = check_label(Mark::X, x.as_ref())?;
        let o = check_label(Mark::O, o.as_ref())?;
        if x == o {
            return Err(LabelError::Duplicate(x));
        }
        Ok(Self { x, o })
    }

    /// Returns the label for `mark`.
    pub fn label(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for MarkLabels {
    fn default() -> Self {
        Self {
            x: Mark::X.to_string(),
            o: Mark::O.to_string(),
        }
    }
}

fn check_label(mark: Mark, label: &str) -> Result<String, LabelError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(LabelError::Empty(mark));
    }
    if label.chars().count() > MAX_LABEL_CHARS {
        return Err(LabelError::TooLong(label.to_string()));
    }
    if is_reserved(label) {
        return Err(LabelError::Reserved(label.to_string()));
    }
    Ok(label.to_string())
}

/// Cell numbers `1`-`9` and [`EMPTY_CELL_MARKER`] are how empty squares
/// are drawn.
fn is_reserved(label: &str) -> bool {
    if label == EMPTY_CELL_MARKER {
        return true;
    }
    let mut chars = label.chars();
    matches!((chars.next(), chars.next()), (Some('1'..='9'), None))
}

/// The one-line status for `game`.
///
/// Always one of `Turn: <label>`, `Winner: <label>`, or [`DRAW_STATUS`].
pub fn status_line(game: &GameState, labels: &MarkLabels) -> String {
    match game.outcome() {
        Outcome::InProgress => format!("Turn: {}", labels.label(game.turn())),
        Outcome::Won(mark) => format!("Winner: {}", labels.label(mark)),
        Outcome::Draw => DRAW_STATUS.to_string(),
    }
}
