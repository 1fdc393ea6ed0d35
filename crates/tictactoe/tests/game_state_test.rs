//! Scenario tests for the game state machine.

use tictactoe::{
    Board, GameState, Mark, MarkLabels, Outcome, Position, Square, rules, status_line,
};

fn play(indices: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &idx in indices {
        game.place_index(idx);
    }
    game
}

#[test]
fn test_empty_board_in_progress() {
    let game = GameState::new();
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(Position::valid_moves(game.board()).len(), 9);
}

#[test]
fn test_top_row_win() {
    let game = play(&[0, 3, 1, 4, 2]);
    assert_eq!(game.outcome(), Outcome::Won(Mark::X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(status_line(&game, &MarkLabels::default()), "Winner: X");
}

#[test]
fn test_full_board_draw() {
    // X O X
    // X O O
    // O X X
    let x = Square::Occupied(Mark::X);
    let o = Square::Occupied(Mark::O);
    let expected = Board::from_squares([x, o, x, x, o, o, o, x, x]);

    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.board(), &expected);
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(
        status_line(&game, &MarkLabels::default()),
        "Draw! No more moves."
    );
}

#[test]
fn test_same_square_twice_is_noop() {
    let mut game = GameState::new();
    game.place(Position::TopLeft);
    let after_first = game.clone();

    game.place(Position::TopLeft);
    assert_eq!(game, after_first);
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(game.turn(), Mark::O);
}

#[test]
fn test_finished_game_ignores_moves_until_restart() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    let finished = game.clone();

    for pos in Position::valid_moves(game.board()) {
        assert!(!game.can_place(pos));
        game.place(pos);
        assert_eq!(game, finished);
    }

    game.restart();
    assert_eq!(game, GameState::new());
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert!(Position::ALL.iter().all(|&pos| game.can_place(pos)));
}

#[test]
fn test_filled_board_without_line_is_draw() {
    // X O X / O X O / O X O, filled in index order.
    let x = Square::Occupied(Mark::X);
    let o = Square::Occupied(Mark::O);
    let board = Board::from_squares([x, o, x, o, x, o, o, x, o]);
    assert_eq!(rules::outcome(&board), Outcome::Draw);
}

#[test]
fn test_draw_is_terminal() {
    let mut game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let finished = game.clone();
    game.place_index(0);
    assert_eq!(game, finished);
}

#[test]
fn test_win_on_last_square_is_not_draw() {
    // X fills the ninth square and completes the main diagonal.
    let game = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);
    assert!(game.board().squares().iter().all(|s| *s != Square::Empty));
    assert_eq!(game.outcome(), Outcome::Won(Mark::X));
}

#[test]
fn test_snapshot_serializes() {
    let game = play(&[4]);
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["turn"], "O");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "X");
    assert_eq!(json["board"]["squares"][0], "Empty");
}
