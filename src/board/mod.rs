//! Chess rules and move search.
//!
//! Uses a plain 8×8 grid of optional pieces with make/unmake move
//! application. Supports castling, en passant and promotion, each of which
//! can be switched off through [`RuleSet`].
//!
//! # Example
//! ```
//! use chess_advisor::board::{Classification, GameState};
//!
//! let mut state = GameState::new();
//! let moves = state.all_legal_moves();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(state.classify(), Classification::Normal);
//! ```

mod attacks;
mod error;
mod eval;
mod fen;
mod legality;
mod make_unmake;
mod movegen;
mod perft;
mod san;
pub mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{EngineError, EngineResult, FenError, SquareError};
pub use eval::{CENTRALITY_WEIGHT, MOBILITY_WEIGHT, PAWN_ADVANCE_BONUS};
pub use fen::STARTING_FEN;
pub use search::{
    best_move, best_move_parallel, random_move, search, SearchLimits, SearchResult, MATE_SCORE,
};
pub use state::{Board, GameState, MoveClocks, RuleSet};
pub use status::Classification;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, Piece, PieceKind, Square,
};

pub(crate) use types::PROMOTION_KINDS;
