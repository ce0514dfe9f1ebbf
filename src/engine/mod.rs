//! Consumer-facing game API.
//!
//! Front ends drive a [`Game`]: ask for legal moves to highlight, submit
//! moves, undo, ask for hints and let the configured opponent play.
//!
//! # Example
//! ```
//! use chess_advisor::engine::{Game, MoveOutcome};
//! use chess_advisor::{Classification, Square};
//!
//! let mut game = Game::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! assert_eq!(
//!     game.move_piece(e2, e4).unwrap(),
//!     MoveOutcome::Applied(Classification::Normal)
//! );
//! assert!(game.undo());
//! ```

mod config;
mod game;
mod observer;
mod result;
mod snapshot;

pub use config::{Difficulty, EngineConfig};
pub use game::{Game, MoveOutcome};
pub use observer::{GameObserver, LogObserver};
pub use result::GameResult;
pub use snapshot::GameSnapshot;
