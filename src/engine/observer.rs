//! Hooks for presentation layers.
//!
//! A [`Game`](super::Game) notifies its observers after each change; the
//! default methods ignore everything, so implementors override only what
//! they render.

use crate::board::{Classification, EngineError, Move};

use super::GameResult;

pub trait GameObserver {
    /// A move was committed and the position now classifies as `classification`
    fn on_move_applied(&mut self, _mv: &Move, _classification: Classification) {}

    /// The most recent move was taken back
    fn on_move_undone(&mut self, _mv: &Move) {}

    fn on_game_ended(&mut self, _result: &GameResult) {}

    /// A move request was rejected; the game is unchanged
    fn on_illegal_move(&mut self, _error: &EngineError) {}
}

/// Observer that logs every notification at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_move_applied(&mut self, mv: &Move, classification: Classification) {
        log::debug!("{} {} ({classification})", mv.piece.color, mv.to_algebraic());
    }

    fn on_move_undone(&mut self, mv: &Move) {
        log::debug!("undo {mv}");
    }

    fn on_game_ended(&mut self, result: &GameResult) {
        log::debug!("game over: {result}");
    }

    fn on_illegal_move(&mut self, error: &EngineError) {
        log::debug!("rejected: {error}");
    }
}
