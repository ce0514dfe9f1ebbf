use super::super::{GameState, MoveList, Piece, Square};

impl GameState {
    /// Ray-cast along each direction until the edge, an own piece
    /// (excluded) or an enemy piece (included as a capture).
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut cur = from.offset(dr, dc);
            while let Some(to) = cur {
                if !self.push_step(from, to, piece, moves) {
                    break;
                }
                cur = to.offset(dr, dc);
            }
        }
    }
}
