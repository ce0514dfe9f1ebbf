//! Engine configuration.
//!
//! Every field has a default, so a partial JSON document is enough:
//!
//! ```
//! use chess_advisor::engine::{Difficulty, EngineConfig};
//!
//! let config = EngineConfig::from_json_str(r#"{ "difficulty": "hard" }"#).unwrap();
//! assert_eq!(config.difficulty, Difficulty::Hard);
//! assert!(config.rules.castling);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::board::{Color, EngineError, EngineResult, RuleSet};

/// Strength tier of the automated opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random legal move, captures preferred
    Beginner,
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Search depth in plies, or `None` for the random tier
    #[must_use]
    pub const fn search_depth(self) -> Option<u32> {
        match self {
            Difficulty::Beginner => None,
            Difficulty::Easy => Some(1),
            Difficulty::Medium => Some(2),
            Difficulty::Hard => Some(3),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::Config(format!("unknown difficulty '{s}'")))
    }
}

/// Options for a [`Game`](super::Game) and its automated opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rules: RuleSet,
    pub difficulty: Difficulty,
    /// Side the engine plays; `None` means two humans
    pub engine_color: Option<Color>,
    /// Worker threads for root search; 1 searches on the caller's thread
    pub search_threads: usize,
    /// Soft time cap per engine move in milliseconds
    pub move_time_ms: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rules: RuleSet::default(),
            difficulty: Difficulty::default(),
            engine_color: Some(Color::Black),
            search_threads: 1,
            move_time_ms: None,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::Config(e.to_string()))
    }

    #[must_use]
    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }
}
