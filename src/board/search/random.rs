use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::error::{EngineError, EngineResult};
use crate::board::{GameState, Move, MoveList};

/// Lowest-tier policy: a uniformly random capture if any exists, otherwise
/// a uniformly random legal move.
pub fn random_move<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> EngineResult<Move> {
    let color = state.side_to_move();
    let moves = state.all_legal_moves();
    let captures: MoveList = moves.iter().copied().filter(|m| m.is_capture()).collect();
    let pool = if captures.is_empty() { &moves } else { &captures };
    pool.choose(rng)
        .copied()
        .ok_or(EngineError::NoMovesAvailable { color })
}
