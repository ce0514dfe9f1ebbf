use super::error::{EngineError, EngineResult};
use super::{CastleSide, GameState, Move, MoveKind, PieceKind, Square};

impl GameState {
    /// Play `m` on this state.
    ///
    /// `m` must be a candidate generated for this exact state (it carries the
    /// snapshots `undo` restores). Legality is the caller's concern.
    pub fn apply(&mut self, m: Move) {
        let color = m.piece.color;
        self.en_passant_target = None;

        if m.is_en_passant() {
            self.board.take(m.capture_square());
        }

        self.board.take(m.from);
        let placed = match (m.kind, m.promoted_to) {
            (MoveKind::Promotion, Some(kind)) => {
                let mut p = m.piece.moved();
                p.kind = kind;
                p
            }
            _ => m.piece.moved(),
        };
        self.board.set(m.to, Some(placed));

        if let Some(side) = m.kind.castle_side() {
            let row = m.from.row();
            let rook_from = Square::at(row, side.rook_home_col());
            let rook_to = Square::at(row, side.rook_target_col());
            if let Some(rook) = self.board.take(rook_from) {
                self.board.set(rook_to, Some(rook.moved()));
            }
        }

        if m.kind == MoveKind::DoublePush && self.rules.en_passant {
            let skipped = (m.from.row() + m.to.row()) / 2;
            self.en_passant_target = Square::new(skipped, m.from.col());
        }

        match m.piece.kind {
            PieceKind::King => self.castling_rights.remove_color(color),
            PieceKind::Rook if m.from.row() == color.back_row() => {
                if let Some(side) = CastleSide::for_rook_col(m.from.col()) {
                    self.castling_rights.remove(color, side);
                }
            }
            _ => {}
        }
        if let Some(victim) = m.captured {
            let home_row = victim.color.back_row();
            if victim.kind == PieceKind::Rook && m.to.row() == home_row {
                if let Some(side) = CastleSide::for_rook_col(m.to.col()) {
                    self.castling_rights.remove(victim.color, side);
                }
            }
        }

        self.side_to_move = color.opponent();
        self.history.push(m);
    }

    /// Take back the last move, restoring the exact prior state.
    ///
    /// Castling rights and the en-passant target come from the move's own
    /// snapshots; they cannot always be recovered from the board.
    pub fn undo(&mut self) -> EngineResult<Move> {
        let m = self.history.pop().ok_or(EngineError::EmptyHistory)?;
        self.unmake(&m);
        Ok(m)
    }

    /// Undo for simulations that just applied a move themselves.
    pub(crate) fn take_back(&mut self) {
        if let Some(m) = self.history.pop() {
            self.unmake(&m);
        }
    }

    fn unmake(&mut self, m: &Move) {
        self.board.take(m.to);
        self.board.set(m.from, Some(m.piece));
        if let Some(victim) = m.captured {
            self.board.set(m.capture_square(), Some(victim));
        }

        if let Some(side) = m.kind.castle_side() {
            let row = m.from.row();
            let rook_from = Square::at(row, side.rook_target_col());
            let rook_home = Square::at(row, side.rook_home_col());
            if let Some(mut rook) = self.board.take(rook_from) {
                // The right was still held, so the rook had never moved.
                rook.has_moved = false;
                self.board.set(rook_home, Some(rook));
            }
        }

        self.castling_rights = m.prior_castling;
        self.en_passant_target = m.prior_en_passant;
        self.side_to_move = m.piece.color;
    }
}
