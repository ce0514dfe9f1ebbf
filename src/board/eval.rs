//! Static evaluation.
//!
//! Scores are centipawns from White's point of view. Material dominates;
//! every positional term is worth at most a fraction of a pawn.

use once_cell::sync::Lazy;

use super::{Color, GameState, PieceKind, Square};

/// Bonus per row a pawn has advanced from its starting row
pub const PAWN_ADVANCE_BONUS: i32 = 5;

/// Weight of one step toward the center for knights and bishops
pub const CENTRALITY_WEIGHT: i32 = 2;

/// Weight of one legal move of difference between the sides
pub const MOBILITY_WEIGHT: i32 = 1;

/// Centrality bonus by square index: 12 on the four center squares, 0 in the corners
static CENTRALITY: Lazy<[i32; 64]> = Lazy::new(|| {
    let mut table = [0; 64];
    for sq in Square::all() {
        let dist = (2 * sq.row() as i32 - 7).abs() + (2 * sq.col() as i32 - 7).abs();
        table[sq.index()] = (14 - dist) / 2 * CENTRALITY_WEIGHT;
    }
    table
});

impl GameState {
    /// Signed material sum (pawn=100 ... queen=900, king=0)
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.board
            .pieces()
            .map(|(_, p)| p.color.sign() * p.kind.value())
            .sum()
    }

    /// Material plus pawn advancement and minor-piece centrality
    #[must_use]
    pub fn positional_score(&self) -> i32 {
        let mut score = 0;
        for (sq, p) in self.board.pieces() {
            let mut value = p.kind.value();
            match p.kind {
                PieceKind::Pawn => {
                    let advanced = sq.row().abs_diff(p.color.pawn_start_row()) as i32;
                    value += advanced * PAWN_ADVANCE_BONUS;
                }
                kind if kind.is_minor() => value += CENTRALITY[sq.index()],
                _ => {}
            }
            score += p.color.sign() * value;
        }
        score
    }

    /// Full static evaluation including the mobility term.
    ///
    /// Simulates moves for both sides to count them; the state is returned
    /// unchanged.
    pub fn evaluate(&mut self) -> i32 {
        let white = self.legal_move_count(Color::White) as i32;
        let black = self.legal_move_count(Color::Black) as i32;
        self.positional_score() + (white - black) * MOBILITY_WEIGHT
    }
}
