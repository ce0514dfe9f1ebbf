//! Square attack detection.
//!
//! Each attacker pattern is tested directly against the board; nothing is
//! cached between positions. The jump tables below only hold board geometry.

use once_cell::sync::Lazy;

use super::{Board, Color, PieceKind, Square};

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

fn jump_table(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(dr, dc)| sq.offset(dr, dc))
                .collect()
        })
        .collect()
}

/// Knight destinations from each square, by square index
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| jump_table(&KNIGHT_DELTAS));

/// King destinations from each square, by square index
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| jump_table(&KING_DELTAS));

impl Board {
    /// Returns true if any piece of `by` attacks `square`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        let holds = |sq: Square, kind: PieceKind| {
            self.piece_at(sq)
                .is_some_and(|p| p.color == by && p.kind == kind)
        };

        // An attacking pawn sits one step behind the target from its own point of view.
        let pawn_row = -by.pawn_direction();
        for dc in [-1, 1] {
            if square.offset(pawn_row, dc).is_some_and(|sq| holds(sq, PieceKind::Pawn)) {
                return true;
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&sq| holds(sq, PieceKind::Knight))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&sq| holds(sq, PieceKind::King))
        {
            return true;
        }

        self.ray_attacked(square, by, &ROOK_DIRECTIONS, PieceKind::Rook)
            || self.ray_attacked(square, by, &BISHOP_DIRECTIONS, PieceKind::Bishop)
    }

    /// Walk each ray to the first occupied square; it attacks if it is a
    /// `by` piece of `slider` kind or a queen.
    fn ray_attacked(
        &self,
        square: Square,
        by: Color,
        directions: &[(isize, isize)],
        slider: PieceKind,
    ) -> bool {
        for &(dr, dc) in directions {
            let mut cur = square.offset(dr, dc);
            while let Some(sq) = cur {
                if let Some(p) = self.piece_at(sq) {
                    if p.color == by && (p.kind == slider || p.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                cur = sq.offset(dr, dc);
            }
        }
        false
    }

    /// Returns true if the king of `color` is attacked. A missing king is never in check.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_attacked(king, color.opponent()))
    }
}
