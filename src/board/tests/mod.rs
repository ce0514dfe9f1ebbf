//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Candidate generation and legality filtering
//! - `make_unmake.rs` - Apply/undo correctness
//! - `status.rs` - Check, checkmate and stalemate classification
//! - `eval.rs` - Static evaluation terms
//! - `search.rs` - Alpha-beta, parallel and random move selection
//! - `notation.rs` - FEN and algebraic notation
//! - `perft.rs` - Move tree node counts against published totals
//! - `proptest.rs` - Property-based tests over random playouts

mod eval;
mod movegen;
mod proptest;

use crate::board::{GameState, Move, PieceKind, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// The legal move from `from` to `to`, panicking if there is none
pub(super) fn find_move(
    state: &mut GameState,
    from: &str,
    to: &str,
    promotion: Option<PieceKind>,
) -> Move {
    let (from, to) = (sq(from), sq(to));
    state
        .legal_moves(from)
        .into_iter()
        .find(|m| m.to == to && m.promoted_to == promotion)
        .unwrap_or_else(|| panic!("expected move {from}{to} not found"))
}

/// Play a sequence of algebraic moves, returning the final state
pub(super) fn play_san(state: &mut GameState, moves: &[&str]) {
    for san in moves {
        let m = state
            .parse_san(san)
            .unwrap_or_else(|e| panic!("{san}: {e}"));
        state.apply(m);
    }
}
