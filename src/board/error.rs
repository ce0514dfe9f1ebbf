//! Error types for engine operations.

use thiserror::Error;

use super::types::{Color, PieceKind, Square};

/// Errors raised by the engine's public operations.
///
/// Every failing operation leaves the game state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No piece on the square asked about
    #[error("no piece on {square}")]
    EmptySquare { square: Square },

    /// Move is not in the legal set for its origin square
    #[error("illegal move {notation}")]
    IllegalMove { notation: String },

    /// Promotion to a pawn or king
    #[error("cannot promote to {kind}")]
    InvalidPromotionChoice { kind: PieceKind },

    /// `complete_promotion` without a pending promotion
    #[error("no promotion is pending")]
    NoPendingPromotion,

    /// A promotion choice must be made before anything else
    #[error("promotion on {square} is waiting for a piece choice")]
    PromotionPending { square: Square },

    /// Undo with no moves played
    #[error("no move to undo")]
    EmptyHistory,

    /// Search requested for a side with no legal moves
    #[error("{color} has no legal moves")]
    NoMovesAvailable { color: Color },

    /// Search requested for the side that is not on move
    #[error("{color} is not the side to move")]
    NotSideToMove { color: Color },

    /// Move attempted after the game ended
    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Square(#[from] SquareError),

    #[error(transparent)]
    Fen(#[from] FenError),

    /// Snapshot could not be serialized or parsed
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Configuration could not be parsed
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for FEN parsing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must have at least 4 parts, found {found}")]
    TooFewParts { found: usize },

    #[error("invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },

    #[error("invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },

    #[error("invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },

    #[error("invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },

    #[error("FEN placement must have 8 ranks, found {found}")]
    WrongRankCount { found: usize },

    #[error("rank {rank} describes {files} files")]
    WrongFileCount { rank: usize, files: usize },

    #[error("invalid move clock '{found}' in FEN")]
    InvalidClock { found: String },

    #[error("{color} must have exactly one king, found {found}")]
    KingCount { color: Color, found: usize },
}

/// Error type for square parsing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("row {row} out of bounds (must be 0-7)")]
    RowOutOfBounds { row: usize },

    #[error("column {col} out of bounds (must be 0-7)")]
    ColOutOfBounds { col: usize },

    #[error("invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}
