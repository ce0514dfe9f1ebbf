//! Static evaluation tests.

use crate::board::{GameState, PAWN_ADVANCE_BONUS};

#[test]
fn test_starting_position_is_balanced() {
    let mut state = GameState::new();
    assert_eq!(state.material_balance(), 0);
    assert_eq!(state.positional_score(), 0);
    assert_eq!(state.evaluate(), 0);
}

#[test]
fn test_pawn_advance_bonus() {
    let state = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    assert_eq!(state.material_balance(), 100);
    assert_eq!(state.positional_score(), 100 + 2 * PAWN_ADVANCE_BONUS);

    let state = GameState::from_fen("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1");
    assert_eq!(state.positional_score(), -(100 + 2 * PAWN_ADVANCE_BONUS));
}

#[test]
fn test_minor_piece_centrality() {
    let center = GameState::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
    let corner = GameState::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
    assert_eq!(center.positional_score(), 312);
    assert_eq!(corner.positional_score(), 300);

    // Rooks get no centrality bonus
    let rook = GameState::from_fen("4k3/8/8/8/3R4/8/8/4K3 w - - 0 1");
    assert_eq!(rook.positional_score(), 500);
}

#[test]
fn test_mobility_term() {
    // Rook a1 has 10 moves and the king 5; Black's lone king has 5
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert_eq!(state.evaluate(), 500 + 10);
}

#[test]
fn test_evaluation_is_color_symmetric() {
    let mut white = GameState::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
    let mut black = GameState::from_fen("4k3/8/8/3n4/8/8/8/4K3 b - - 0 1");
    assert_eq!(white.evaluate(), -black.evaluate());
    assert!(white.evaluate() > 0);
}

#[test]
fn test_evaluate_leaves_state_unchanged() {
    let mut state =
        GameState::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let before = state.clone();
    state.evaluate();
    assert_eq!(state, before);
}

#[test]
fn test_material_dominates_position() {
    // An extra knight in the corner outweighs any positional edge
    let mut up_a_knight =
        GameState::from_fen("rnbqkb1r/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(up_a_knight.evaluate() > 200);
}
