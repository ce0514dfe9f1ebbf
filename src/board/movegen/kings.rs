use super::super::attacks::KING_TARGETS;
use super::super::{CastleSide, GameState, MoveKind, MoveList, Piece, PieceKind, Square};

impl GameState {
    pub(crate) fn generate_king_moves(&self, from: Square, king: Piece, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.index()] {
            self.push_step(from, to, king, moves);
        }

        if self.rules.castling {
            for side in CastleSide::BOTH {
                if self.can_castle(from, king, side) {
                    let to = Square::at(from.row(), side.king_target_col());
                    let kind = match side {
                        CastleSide::Kingside => MoveKind::CastleKingside,
                        CastleSide::Queenside => MoveKind::CastleQueenside,
                    };
                    moves.push(self.create_move(from, to, king, None, kind, None));
                }
            }
        }
    }

    /// Castling preconditions: the right is still held, the king and rook
    /// are on their home squares, every square between them is empty, and
    /// the king's start, transit and destination squares are all unattacked.
    fn can_castle(&self, from: Square, king: Piece, side: CastleSide) -> bool {
        let color = king.color;
        let row = color.back_row();
        if !self.castling_rights.has(color, side) || from != Square::at(row, 4) {
            return false;
        }

        let rook_home = Square::at(row, side.rook_home_col());
        let rook_ok = self
            .board
            .piece_at(rook_home)
            .is_some_and(|p| p.color == color && p.kind == PieceKind::Rook);
        if !rook_ok {
            return false;
        }

        let (lo, hi) = match side {
            CastleSide::Kingside => (5, 6),
            CastleSide::Queenside => (1, 3),
        };
        if (lo..=hi).any(|col| !self.board.is_empty(Square::at(row, col))) {
            return false;
        }

        let enemy = color.opponent();
        [4, side.king_transit_col(), side.king_target_col()]
            .into_iter()
            .all(|col| !self.board.is_attacked(Square::at(row, col), enemy))
    }
}
