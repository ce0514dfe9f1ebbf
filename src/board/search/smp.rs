//! Parallel root search.
//!
//! Root moves are dealt round-robin to scoped worker threads. A `GameState`
//! only supports one simulation at a time, so every worker searches on its
//! own clone. Each root move is searched with a full window and the results
//! are reduced in original move order with the same strict comparison as
//! the sequential search, which therefore picks the same move.

use std::thread;

use parking_lot::Mutex;

use super::alphabeta::SearchContext;
use super::{root_moves, SearchLimits, SearchResult, INFINITY};
use crate::board::error::EngineResult;
use crate::board::{Color, GameState};

struct RootScore {
    index: usize,
    score: i32,
    nodes: u64,
}

/// Search like [`super::search`], spreading root moves over `threads` workers.
///
/// `state` is only read; workers search on clones.
pub fn best_move_parallel(
    state: &GameState,
    color: Color,
    limits: &SearchLimits<'_>,
    threads: usize,
) -> EngineResult<SearchResult> {
    let mut root = state.clone();
    let moves = root_moves(&mut root, color)?;
    let depth = limits.depth.max(1);
    let threads = threads.clamp(1, moves.len());

    let results: Mutex<Vec<RootScore>> = Mutex::new(Vec::with_capacity(moves.len()));
    thread::scope(|scope| {
        for worker in 0..threads {
            let mut local = state.clone();
            let moves = &moves;
            let results = &results;
            scope.spawn(move || {
                for (index, &m) in moves.iter().enumerate().skip(worker).step_by(threads) {
                    let mut ctx = SearchContext::new(&mut local, limits);
                    ctx.state.apply(m);
                    let score = ctx.alphabeta(depth - 1, 1, -INFINITY, INFINITY);
                    ctx.state.take_back();
                    if ctx.aborted {
                        break;
                    }
                    results.lock().push(RootScore {
                        index,
                        score,
                        nodes: ctx.nodes,
                    });
                }
            });
        }
    });

    let mut results = results.into_inner();
    results.sort_by_key(|r| r.index);
    let completed = results.len() == moves.len();
    let nodes = results.iter().map(|r| r.nodes).sum();

    let maximizing = color == Color::White;
    let mut best: Option<&RootScore> = None;
    for r in &results {
        let better = match best {
            None => true,
            Some(b) if maximizing => r.score > b.score,
            Some(b) => r.score < b.score,
        };
        if better {
            best = Some(r);
        }
    }

    let (best_move, score) = best.map_or((moves[0], 0), |b| (moves[b.index], b.score));
    log::info!("parallel search {color} depth {depth} on {threads} threads: {best_move} score {score}");
    Ok(SearchResult {
        best_move,
        score,
        nodes,
        completed,
    })
}
