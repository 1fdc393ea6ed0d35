//! Headless play: apply a list of cell numbers and report the result.

use derive_getters::Getters;
use serde::Serialize;
use tictactoe::{GameState, MarkLabels, Outcome, Position, status_line};
use tracing::{debug, info, instrument};

/// A game played from a list of 1-based cell numbers.
///
/// Numbers that the game refuses (occupied cells, moves after the end)
/// are skipped, as the interactive board would skip them.
#[derive(Debug, Clone, Getters)]
pub struct Replay {
    /// The game after all moves.
    game: GameState,
    /// Cell numbers that were refused, in order.
    ignored: Vec<u8>,
}

/// JSON view of a replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Each cell's label, or `null` when empty.
    pub board: Vec<Option<String>>,
    /// Label of the mark to move next.
    pub turn: String,
    /// Derived outcome.
    pub outcome: Outcome,
    /// Status line as shown in the terminal.
    pub status: String,
    /// Cell numbers that were refused.
    pub ignored: Vec<u8>,
}

impl Replay {
    /// Plays `moves` on a fresh game.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn run(moves: &[u8]) -> Self {
        let mut game = GameState::new();
        let mut ignored = Vec::new();

        for &number in moves {
            match Position::from_number(number as usize) {
                Some(pos) if game.can_place(pos) => game.place(pos),
                _ => {
                    debug!(number, "Move refused");
                    ignored.push(number);
                }
            }
        }

        info!(outcome = %game.outcome(), ignored = ignored.len(), "Replay finished");
        debug!(board = %game.board(), "Final board");
        Self { game, ignored }
    }

    /// Builds the JSON view using `labels`.
    pub fn summary(&self, labels: &MarkLabels) -> ReplaySummary {
        ReplaySummary {
            board: self
                .game
                .board()
                .squares()
                .iter()
                .map(|sq| sq.mark().map(|mark| labels.label(mark).to_string()))
                .collect(),
            turn: labels.label(self.game.turn()).to_string(),
            outcome: self.game.outcome(),
            status: status_line(&self.game, labels),
            ignored: self.ignored.clone(),
        }
    }

    /// Renders the board grid followed by the status line.
    pub fn render_text(&self, labels: &MarkLabels) -> String {
        let board = self.game.board();
        let mut rows = Vec::with_capacity(3);
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| {
                    let text = match board.get(pos).mark() {
                        Some(mark) => labels.label(mark).to_string(),
                        None => pos.number().to_string(),
                    };
                    format!("{:^3}", text)
                })
                .collect();
            rows.push(cells.join("|"));
        }
        format!(
            "{}\n\n{}\n",
            rows.join("\n---+---+---\n"),
            status_line(&self.game, labels)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe::Mark;

    #[test]
    fn test_replay_win() {
        let replay = Replay::run(&[1, 4, 2, 5, 3]);
        assert_eq!(replay.game().outcome(), Outcome::Won(Mark::X));
        assert!(replay.ignored().is_empty());
    }

    #[test]
    fn test_replay_skips_refused_moves() {
        let replay = Replay::run(&[1, 1, 4, 2, 5, 3, 9]);
        assert_eq!(replay.ignored(), &vec![1, 9]);
        assert_eq!(replay.game().outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_render_text() {
        let replay = Replay::run(&[5, 1]);
        let expected = " O | 2 | 3 \n---+---+---\n 4 | X | 6 \n---+---+---\n 7 | 8 | 9 \n\nTurn: X\n";
        assert_eq!(replay.render_text(&MarkLabels::default()), expected);
    }

    #[test]
    fn test_summary_uses_labels() {
        let labels = MarkLabels::new("A", "B").unwrap();
        let summary = Replay::run(&[5]).summary(&labels);
        assert_eq!(summary.board[4].as_deref(), Some("A"));
        assert_eq!(summary.board[0], None);
        assert_eq!(summary.turn, "B");
        assert_eq!(summary.status, "Turn: B");
        assert_eq!(summary.outcome, Outcome::InProgress);
    }
}
