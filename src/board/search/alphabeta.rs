use std::sync::atomic::Ordering;
use std::time::Instant;

use super::{SearchLimits, INFINITY, MATE_SCORE};
use crate::board::{Color, GameState};

/// Per-search state threaded through the recursion
pub(super) struct SearchContext<'s, 'l> {
    pub state: &'s mut GameState,
    limits: &'s SearchLimits<'l>,
    pub nodes: u64,
    pub aborted: bool,
}

impl<'s, 'l> SearchContext<'s, 'l> {
    pub fn new(state: &'s mut GameState, limits: &'s SearchLimits<'l>) -> Self {
        SearchContext {
            state,
            limits,
            nodes: 0,
            aborted: false,
        }
    }

    fn should_stop(&self) -> bool {
        if self.limits.stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
            return true;
        }
        self.limits.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Minimax value of the current position, White maximizing.
    ///
    /// Every move applied here is taken back before returning, including on
    /// cutoffs and aborts.
    pub fn alphabeta(&mut self, depth: u32, ply: i32, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if self.aborted || self.should_stop() {
            self.aborted = true;
            return 0;
        }
        if depth == 0 {
            return self.state.evaluate();
        }

        let side = self.state.side_to_move();
        let moves = self.state.all_legal_moves();
        if moves.is_empty() {
            if self.state.in_check(side) {
                // The side to move is mated; the score favors its opponent.
                return -side.sign() * (MATE_SCORE - ply);
            }
            return 0;
        }

        let maximizing = side == Color::White;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for m in moves {
            self.state.apply(m);
            let score = self.alphabeta(depth - 1, ply + 1, alpha, beta);
            self.state.take_back();
            if self.aborted {
                return best;
            }

            if maximizing {
                if score > best {
                    best = score;
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                }
                beta = beta.min(best);
            }
            if beta <= alpha {
                log::trace!("cutoff at ply {ply} after {m}");
                break;
            }
        }
        best
    }
}
