pub mod board;
pub mod cli;
pub mod engine;

pub use board::{
    Classification, Color, EngineError, EngineResult, GameState, Move, MoveKind, Piece, PieceKind,
    Square,
};
pub use engine::{EngineConfig, Game, GameObserver, GameResult};
