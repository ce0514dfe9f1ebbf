//! Position classification for the side to move.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, GameState};

/// Status of the position from the side to move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl Classification {
    /// Returns true for checkmate and stalemate
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Classification::Checkmate | Classification::Stalemate)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Classification::Normal => "normal",
            Classification::Check => "check",
            Classification::Checkmate => "checkmate",
            Classification::Stalemate => "stalemate",
        };
        f.write_str(text)
    }
}

impl GameState {
    /// Returns true if the king of `color` is attacked
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.board.is_king_attacked(color)
    }

    /// Classify the position for the side to move.
    ///
    /// Takes `&mut self` only to simulate candidate moves; the state is
    /// returned unchanged.
    pub fn classify(&mut self) -> Classification {
        let color = self.side_to_move;
        let in_check = self.in_check(color);
        let can_move = self.has_any_legal_move(color);
        match (in_check, can_move) {
            (true, false) => Classification::Checkmate,
            (false, false) => Classification::Stalemate,
            (true, true) => Classification::Check,
            (false, true) => Classification::Normal,
        }
    }
}
