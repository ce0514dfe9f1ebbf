//! Move types and move list.
//!
//! A [`Move`] is self-contained: besides its origin and destination it
//! carries snapshots of the moving piece, the captured piece, and the
//! en-passant target and castling rights that were in force before it was
//! played. That is everything needed to apply it and to take it back, so
//! the move history doubles as the undo stack.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::castling::{CastleSide, CastlingRights};
use super::piece::{Piece, PieceKind};
use super::square::Square;

/// What kind of move this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Normal,
    DoublePush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    Promotion,
}

impl MoveKind {
    /// Castle side for castling kinds
    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            MoveKind::CastleKingside => Some(CastleSide::Kingside),
            MoveKind::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// A move with its undo snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stood before the move
    pub piece: Piece,
    /// The captured piece as it stood before the move
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    pub promoted_to: Option<PieceKind>,
    pub prior_en_passant: Option<Square>,
    pub prior_castling: CastlingRights,
}

impl Move {
    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.kind.castle_side().is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion)
    }

    /// Square the captured piece stood on.
    ///
    /// Differs from `to` only for en passant, where the victim sits beside
    /// the origin square on the destination file.
    #[inline]
    #[must_use]
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant() {
            Square::at(self.from.row(), self.to.col())
        } else {
            self.to
        }
    }

    /// True if `other` describes the same action on the board, ignoring the
    /// snapshots. Used to match caller-supplied moves against the legal set.
    #[inline]
    #[must_use]
    pub fn same_action(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.kind == other.kind
            && self.promoted_to == other.promoted_to
    }

    /// Coordinate notation such as "e2e4" or "e7e8q"
    #[must_use]
    pub fn to_coordinate(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(kind) = self.promoted_to {
            s.push(kind.to_char());
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_coordinate())
    }
}

/// Moves produced by the generator.
pub type MoveList = Vec<Move>;
