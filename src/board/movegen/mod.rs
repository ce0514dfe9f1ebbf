//! Pseudo-legal move generation.
//!
//! Candidates follow each piece's movement pattern but ignore whether the
//! mover's own king ends up attacked; see `legality` for that filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::error::{EngineError, EngineResult};
use super::{GameState, Move, MoveKind, MoveList, Piece, PieceKind, Square};

impl GameState {
    /// Pseudo-legal moves of the piece on `from`.
    ///
    /// Fails with `EmptySquare` if nothing stands there. The piece may be of
    /// either color; pawn and castling candidates use the state's current
    /// en-passant target and castling rights.
    pub fn candidate_moves(&self, from: Square) -> EngineResult<MoveList> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(EngineError::EmptySquare { square: from })?;
        let mut moves = MoveList::new();
        self.push_candidates(from, piece, &mut moves);
        Ok(moves)
    }

    pub(crate) fn push_candidates(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece, moves),
            PieceKind::Knight => self.generate_knight_moves(from, piece, moves),
            PieceKind::Bishop => self.generate_sliding_moves(from, piece, &BISHOP_DIRECTIONS, moves),
            PieceKind::Rook => self.generate_sliding_moves(from, piece, &ROOK_DIRECTIONS, moves),
            PieceKind::Queen => {
                self.generate_sliding_moves(from, piece, &ROOK_DIRECTIONS, moves);
                self.generate_sliding_moves(from, piece, &BISHOP_DIRECTIONS, moves);
            }
            PieceKind::King => self.generate_king_moves(from, piece, moves),
        }
    }

    /// Build a move carrying the current undo snapshots
    fn create_move(
        &self,
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
        promoted_to: Option<PieceKind>,
    ) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
            kind,
            promoted_to,
            prior_en_passant: self.en_passant_target,
            prior_castling: self.castling_rights,
        }
    }

    /// Push a plain move or capture to `to` unless it holds a piece of the mover's color.
    /// Returns true if `to` was empty.
    fn push_step(&self, from: Square, to: Square, piece: Piece, moves: &mut MoveList) -> bool {
        match self.board.piece_at(to) {
            None => {
                moves.push(self.create_move(from, to, piece, None, MoveKind::Normal, None));
                true
            }
            Some(target) => {
                if target.color != piece.color {
                    moves.push(self.create_move(
                        from,
                        to,
                        piece,
                        Some(target),
                        MoveKind::Normal,
                        None,
                    ));
                }
                false
            }
        }
    }
}
