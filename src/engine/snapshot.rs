//! Serializable snapshot of a game.

use serde::{Deserialize, Serialize};

use crate::board::{Classification, Color, EngineError, EngineResult, FenError, GameState};

use super::GameResult;

/// Everything needed to resume a game: the full state, including move
/// history so undo keeps working, and the result if it has ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: GameState,
    #[serde(default)]
    pub result: Option<GameResult>,
}

impl GameSnapshot {
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    /// Check that the snapshot describes a reachable game.
    ///
    /// Each side needs exactly one king, every history move must be legal
    /// where it was played and replaying the history must land on the saved
    /// position. A checkmate or stalemate result must match the position.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |msg: String| EngineError::Snapshot(msg);
        let state = &self.state;

        for color in Color::BOTH {
            let found = state.board().king_count(color);
            if found != 1 {
                return Err(invalid(FenError::KingCount { color, found }.to_string()));
            }
        }

        let mut replay = state.clone();
        while replay.undo().is_ok() {}
        for (ply, &m) in state.history().iter().enumerate() {
            if !replay.legal_moves(m.from).contains(&m) {
                return Err(invalid(format!("history move {} ({m}) is not legal", ply + 1)));
            }
            replay.apply(m);
        }
        if replay.board() != state.board()
            || replay.side_to_move() != state.side_to_move()
            || replay.castling_rights() != state.castling_rights()
            || replay.en_passant_target() != state.en_passant_target()
        {
            return Err(invalid("history does not lead to the saved position".to_string()));
        }

        let classification = replay.classify();
        let consistent = match self.result {
            Some(GameResult::Checkmate { winner }) => {
                classification == Classification::Checkmate && winner != state.side_to_move()
            }
            Some(GameResult::Stalemate) => classification == Classification::Stalemate,
            Some(GameResult::Resignation { .. } | GameResult::Timeout { .. }) => true,
            None => !classification.is_terminal(),
        };
        if !consistent {
            return Err(invalid(format!(
                "saved result does not match a {classification} position"
            )));
        }
        Ok(())
    }
}
