//! Move search.
//!
//! Features:
//! - Fixed-depth minimax with alpha-beta pruning over the make/unmake path
//! - Optional deadline and stop flag, checked at every node
//! - A random capture-first policy for the lowest difficulty tier
//! - Root-split parallel search where each thread owns its own state copy

mod alphabeta;
mod random;
mod smp;

use std::sync::atomic::AtomicBool;
use std::time::Instant;

pub use random::random_move;
pub use smp::best_move_parallel;

use alphabeta::SearchContext;

use super::error::{EngineError, EngineResult};
use super::{Color, GameState, Move, MoveList};

/// Score of a mate at the root; mates found deeper score `ply` less.
pub const MATE_SCORE: i32 = 100_000;

/// Larger than any reachable score
pub(crate) const INFINITY: i32 = 1_000_000;

/// How far and how long to search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits<'a> {
    /// Plies to search; values below 1 are treated as 1
    pub depth: u32,
    /// Abandon the search once this instant has passed
    pub deadline: Option<Instant>,
    /// Abandon the search once this flag is set
    pub stop: Option<&'a AtomicBool>,
}

impl SearchLimits<'_> {
    /// Depth-only limits
    #[must_use]
    pub const fn depth(depth: u32) -> Self {
        SearchLimits {
            depth,
            deadline: None,
            stop: None,
        }
    }
}

/// Outcome of a search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score of `best_move` in centipawns from White's point of view
    pub score: i32,
    pub nodes: u64,
    /// False if a deadline or stop flag cut the search short
    pub completed: bool,
}

/// Best move for `color` searching `depth` plies.
///
/// `color` must be the side to move. The state is handed back exactly as
/// it came in.
pub fn best_move(state: &mut GameState, color: Color, depth: u32) -> EngineResult<Move> {
    search(state, color, &SearchLimits::depth(depth)).map(|r| r.best_move)
}

/// Search under `limits` and report the chosen move with its score.
///
/// On early exit the best fully searched root move is returned, or the
/// first legal move if none finished.
pub fn search(
    state: &mut GameState,
    color: Color,
    limits: &SearchLimits<'_>,
) -> EngineResult<SearchResult> {
    let moves = root_moves(state, color)?;
    let depth = limits.depth.max(1);
    let maximizing = color == Color::White;

    let mut ctx = SearchContext::new(state, limits);
    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;

    for &m in &moves {
        ctx.state.apply(m);
        let score = ctx.alphabeta(depth - 1, 1, alpha, beta);
        ctx.state.take_back();
        if ctx.aborted {
            break;
        }

        let better = match best {
            None => true,
            Some((_, s)) if maximizing => score > s,
            Some((_, s)) => score < s,
        };
        if better {
            best = Some((m, score));
        }
        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
    }

    let completed = !ctx.aborted;
    let nodes = ctx.nodes;
    let (best_move, score) = best.unwrap_or((moves[0], 0));
    log::info!(
        "search {color} depth {depth}: {best_move} score {score} nodes {nodes}{}",
        if completed { "" } else { " (stopped)" }
    );
    Ok(SearchResult {
        best_move,
        score,
        nodes,
        completed,
    })
}

/// Legal root moves, after checking `color` may search here
fn root_moves(state: &mut GameState, color: Color) -> EngineResult<MoveList> {
    if color != state.side_to_move() {
        return Err(EngineError::NotSideToMove { color });
    }
    let moves = state.all_legal_moves();
    if moves.is_empty() {
        return Err(EngineError::NoMovesAvailable { color });
    }
    Ok(moves)
}
