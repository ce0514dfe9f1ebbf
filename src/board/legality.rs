//! Legal move filtering.
//!
//! A candidate is legal if, once played, the mover's king is not attacked.
//! Each candidate is applied to the live state and taken back with the same
//! make/unmake pair used for the public `undo`, so castling's rook move and
//! the off-target en passant capture are simulated exactly.

use super::{Color, GameState, MoveList, Piece, Square};

impl GameState {
    /// Legal moves of the piece on `from`.
    ///
    /// Empty if the square is empty or holds a piece of the side not to move.
    pub fn legal_moves(&mut self, from: Square) -> MoveList {
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => self.legal_moves_of(from, piece),
            _ => MoveList::new(),
        }
    }

    /// All legal moves of the side to move, in board order
    pub fn all_legal_moves(&mut self) -> MoveList {
        let color = self.side_to_move;
        let mut moves = MoveList::new();
        for (from, piece) in self.pieces_of(color) {
            moves.extend(self.legal_moves_of(from, piece));
        }
        moves
    }

    /// Returns true if any piece of `color` has a legal move
    pub fn has_any_legal_move(&mut self, color: Color) -> bool {
        self.pieces_of(color)
            .into_iter()
            .any(|(from, piece)| !self.legal_moves_of(from, piece).is_empty())
    }

    /// Number of legal moves `color` would have if it were on move.
    pub(crate) fn legal_move_count(&mut self, color: Color) -> usize {
        let saved_ep = self.en_passant_target;
        if color != self.side_to_move {
            // An en-passant target only ever belongs to the side to move.
            self.en_passant_target = None;
        }
        let count = self
            .pieces_of(color)
            .into_iter()
            .map(|(from, piece)| self.legal_moves_of(from, piece).len())
            .sum();
        self.en_passant_target = saved_ep;
        count
    }

    fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        self.board
            .pieces()
            .filter(|(_, p)| p.color == color)
            .collect()
    }

    /// Legal moves for `piece` on `from`, whichever side it belongs to.
    pub(crate) fn legal_moves_of(&mut self, from: Square, piece: Piece) -> MoveList {
        let mut candidates = MoveList::new();
        self.push_candidates(from, piece, &mut candidates);

        let side_to_move = self.side_to_move;
        candidates.retain(|&m| {
            self.apply(m);
            let safe = !self.board.is_king_attacked(piece.color);
            self.take_back();
            safe
        });
        self.side_to_move = side_to_move;
        candidates
    }
}
