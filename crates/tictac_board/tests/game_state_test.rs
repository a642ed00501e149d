//! Tests for the lock-free game state.

use tictac_board::{GameState, MoveError, Outcome, Symbol, invariants};

#[test]
fn test_x_top_row_win() {
    let mut state = GameState::new();
    assert_eq!(state.play(Symbol::X, 0, 0), Ok(None));
    assert_eq!(state.play(Symbol::O, 1, 1), Ok(None));
    assert_eq!(state.play(Symbol::X, 0, 1), Ok(None));
    assert_eq!(state.play(Symbol::O, 2, 2), Ok(None));
    assert_eq!(state.play(Symbol::X, 0, 2), Ok(Some(Outcome::Won(Symbol::X))));

    assert!(state.is_over());
    assert_eq!(state.outcome().and_then(Outcome::winner), Some(Symbol::X));
    assert!(invariants::check(&state).is_ok());
}

#[test]
fn test_rejected_moves_never_mutate() {
    let mut state = GameState::replay(&[(1, 1)]).unwrap();
    let before = state.clone();

    assert!(matches!(
        state.play(Symbol::O, 3, 0),
        Err(MoveError::InvalidCoordinate { row: 3, col: 0 })
    ));
    assert!(matches!(state.play(Symbol::O, 1, 1), Err(MoveError::CellOccupied(_))));
    assert_eq!(state.play(Symbol::X, 0, 0), Err(MoveError::NotYourTurn(Symbol::X)));

    assert_eq!(state, before);
    assert_eq!(state.to_move(), Symbol::O);
}

#[test]
fn test_outcome_never_reverts() {
    let mut state = GameState::replay(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).unwrap();
    assert_eq!(state.outcome(), Some(Outcome::Won(Symbol::X)));

    for (row, col) in [(2, 0), (2, 1), (2, 2)] {
        assert_eq!(state.play(Symbol::O, row, col), Err(MoveError::GameAlreadyOver));
    }
    assert_eq!(state.outcome(), Some(Outcome::Won(Symbol::X)));
    assert_eq!(state.history().len(), 5);
}

#[test]
#[rustfmt::skip]
fn test_full_board_win_is_not_draw() {
    // X O X / O X O / O X X: the ninth move fills the board and completes
    // the main diagonal.
    let state = GameState::replay(&[
        (0, 0), (0, 1), (0, 2),
        (1, 0), (1, 1), (1, 2),
        (2, 1), (2, 0), (2, 2),
    ])
    .unwrap();
    assert_eq!(state.board().filled(), 9);
    assert_eq!(state.outcome(), Some(Outcome::Won(Symbol::X)));
}

#[test]
#[rustfmt::skip]
fn test_draw_scenario() {
    let state = GameState::replay(&[
        (0, 0), (0, 1), (0, 2),
        (1, 1), (1, 0), (1, 2),
        (2, 1), (2, 0), (2, 2),
    ])
    .unwrap();
    assert_eq!(state.outcome(), Some(Outcome::Draw));
    assert!(invariants::check(&state).is_ok());
}

#[test]
fn test_state_serializes() {
    let state = GameState::replay(&[(0, 0)]).unwrap();
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
