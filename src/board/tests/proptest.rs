//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::prelude::*;

use crate::board::{best_move, best_move_parallel, Color, GameState, SearchLimits};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves from the initial position
fn random_playout(seed: u64, plies: usize) -> GameState {
    let mut state = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = state.all_legal_moves();
        let Some(&m) = moves.choose(&mut rng) else {
            break;
        };
        state.apply(m);
    }
    state
}

proptest! {
    /// Property: undoing every move of a playout returns to the initial position
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), plies in move_count_strategy()) {
        let mut state = random_playout(seed, plies);
        while state.undo().is_ok() {}
        prop_assert_eq!(state, GameState::new());
    }

    /// Property: every legal move leaves the mover's king safe
    #[test]
    fn prop_legal_moves_never_leave_king_attacked(seed in seed_strategy(), plies in move_count_strategy()) {
        let mut state = random_playout(seed, plies);
        let color = state.side_to_move();
        for m in state.all_legal_moves() {
            state.apply(m);
            prop_assert!(!state.in_check(color), "{} leaves {} in check", m, color);
            state.undo().unwrap();
        }
    }

    /// Property: FEN export and import agree on the position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), plies in move_count_strategy()) {
        let mut state = random_playout(seed, plies);
        let fen = state.to_fen();
        let mut reparsed = GameState::try_from_fen(&fen).unwrap();
        prop_assert_eq!(reparsed.to_fen(), fen);
        prop_assert_eq!(reparsed.all_legal_moves().len(), state.all_legal_moves().len());
    }

    /// Property: an en-passant target only ever follows a double push
    #[test]
    fn prop_en_passant_target_follows_double_push(seed in seed_strategy(), plies in move_count_strategy()) {
        let state = random_playout(seed, plies);
        if let Some(target) = state.en_passant_target() {
            let last = state.last_move().unwrap();
            prop_assert_eq!(last.kind, crate::board::MoveKind::DoublePush);
            prop_assert_eq!(target.col(), last.to.col());
        }
    }

}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: a shallow search returns a legal move and restores the state
    #[test]
    fn prop_search_returns_legal_move(seed in seed_strategy(), plies in 0..12usize) {
        let mut state = random_playout(seed, plies);
        let color = state.side_to_move();
        let before = state.clone();
        let legal = state.all_legal_moves();
        match best_move(&mut state, color, 1) {
            Ok(m) => prop_assert!(legal.contains(&m)),
            Err(_) => prop_assert!(legal.is_empty()),
        }
        prop_assert_eq!(state, before);
    }

    /// Property: the parallel root split picks the sequential move
    #[test]
    fn prop_parallel_agrees_with_sequential(seed in seed_strategy(), plies in 0..8usize) {
        let mut state = random_playout(seed, plies);
        let color = state.side_to_move();
        if state.all_legal_moves().is_empty() {
            return Ok(());
        }
        let sequential = best_move(&mut state, color, 2).unwrap();
        let parallel = best_move_parallel(&state, color, &SearchLimits::depth(2), 4).unwrap();
        prop_assert_eq!(parallel.best_move, sequential);
    }

    /// Property: material balance matches the pieces on the board
    #[test]
    fn prop_material_matches_piece_count(seed in seed_strategy(), plies in move_count_strategy()) {
        let state = random_playout(seed, plies);
        let white: i32 = state.board().pieces().filter(|(_, p)| p.color == Color::White).map(|(_, p)| p.kind.value()).sum();
        let black: i32 = state.board().pieces().filter(|(_, p)| p.color == Color::Black).map(|(_, p)| p.kind.value()).sum();
        prop_assert_eq!(state.material_balance(), white - black);
    }
}
