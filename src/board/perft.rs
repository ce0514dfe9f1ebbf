use super::GameState;

impl GameState {
    /// Count leaf nodes of the legal move tree `depth` plies deep.
    ///
    /// Used to validate move generation against published totals.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.apply(m);
            nodes += self.perft(depth - 1);
            self.take_back();
        }

        nodes
    }
}
