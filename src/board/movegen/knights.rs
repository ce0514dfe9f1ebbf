use super::super::attacks::KNIGHT_TARGETS;
use super::super::{GameState, MoveList, Piece, Square};

impl GameState {
    pub(crate) fn generate_knight_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            self.push_step(from, to, piece, moves);
        }
    }
}
