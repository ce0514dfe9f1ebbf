use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Color;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum GameResult {
    Checkmate { winner: Color },
    Stalemate,
    Resignation { winner: Color },
    Timeout { winner: Color },
}

impl GameResult {
    /// Winning side, or `None` for a draw
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner }
            | GameResult::Resignation { winner }
            | GameResult::Timeout { winner } => Some(winner),
            GameResult::Stalemate => None,
        }
    }

    /// Returns true if the result follows from the position alone.
    ///
    /// Such results are lifted again when the deciding move is undone.
    #[must_use]
    pub const fn is_positional(self) -> bool {
        matches!(self, GameResult::Checkmate { .. } | GameResult::Stalemate)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Checkmate { winner } => write!(f, "Checkmate! {winner} wins"),
            GameResult::Stalemate => f.write_str("Stalemate! The game is a draw"),
            GameResult::Resignation { winner } => {
                write!(f, "{} resigns. {winner} wins", winner.opponent())
            }
            GameResult::Timeout { winner } => {
                write!(f, "{} ran out of time. {winner} wins", winner.opponent())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner() {
        let mate = GameResult::Checkmate {
            winner: Color::White,
        };
        assert_eq!(mate.winner(), Some(Color::White));
        assert_eq!(GameResult::Stalemate.winner(), None);
    }

    #[test]
    fn test_positional_results() {
        assert!(GameResult::Stalemate.is_positional());
        assert!(!GameResult::Resignation {
            winner: Color::Black
        }
        .is_positional());
    }

    #[test]
    fn test_display() {
        let r = GameResult::Timeout {
            winner: Color::Black,
        };
        assert_eq!(r.to_string(), "White ran out of time. Black wins");
        assert_eq!(
            GameResult::Checkmate {
                winner: Color::White
            }
            .to_string(),
            "Checkmate! White wins"
        );
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&GameResult::Resignation {
            winner: Color::White,
        })
        .unwrap();
        assert_eq!(json, r#"{"result":"resignation","winner":"white"}"#);
        let back: GameResult = serde_json::from_str(r#"{"result":"stalemate"}"#).unwrap();
        assert_eq!(back, GameResult::Stalemate);
    }
}
