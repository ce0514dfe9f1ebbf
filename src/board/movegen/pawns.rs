use super::super::{GameState, MoveKind, MoveList, Piece, PieceKind, Square, PROMOTION_KINDS};

impl GameState {
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: Piece, moves: &mut MoveList) {
        let color = pawn.color;
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.board.is_empty(one) {
                self.push_pawn_arrival(from, one, pawn, None, moves);

                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.board.is_empty(two) {
                            moves.push(self.create_move(
                                from,
                                two,
                                pawn,
                                None,
                                MoveKind::DoublePush,
                                None,
                            ));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.board.piece_at(target) {
                Some(victim) if victim.color != color => {
                    self.push_pawn_arrival(from, target, pawn, Some(victim), moves);
                }
                Some(_) => {}
                None => {
                    if !self.rules.en_passant || self.en_passant_target != Some(target) {
                        continue;
                    }
                    // The victim stands beside us, on the target's file.
                    let victim_sq = Square::at(from.row(), target.col());
                    if let Some(victim) = self.board.piece_at(victim_sq) {
                        if victim.color != color && victim.kind == PieceKind::Pawn {
                            moves.push(self.create_move(
                                from,
                                target,
                                pawn,
                                Some(victim),
                                MoveKind::EnPassant,
                                None,
                            ));
                        }
                    }
                }
            }
        }
    }

    /// A pawn step or capture onto `to`, expanded into the four promotion
    /// choices when `to` is on the last rank.
    fn push_pawn_arrival(
        &self,
        from: Square,
        to: Square,
        pawn: Piece,
        captured: Option<Piece>,
        moves: &mut MoveList,
    ) {
        if self.rules.promotion && to.row() == pawn.color.promotion_row() {
            for kind in PROMOTION_KINDS {
                moves.push(self.create_move(
                    from,
                    to,
                    pawn,
                    captured,
                    MoveKind::Promotion,
                    Some(kind),
                ));
            }
        } else {
            moves.push(self.create_move(from, to, pawn, captured, MoveKind::Normal, None));
        }
    }
}
