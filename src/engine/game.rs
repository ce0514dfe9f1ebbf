//! The game facade.
//!
//! [`Game`] owns one [`GameState`] and is the only thing a front end needs:
//! it checks every request against the legal move set, runs the two-step
//! promotion flow, tracks how the game ended and drives the automated
//! opponent. Every mutating call either applies completely or returns an
//! error and leaves the game untouched.

use std::fmt;
use std::fmt::Write as _;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{
    best_move_parallel, random_move, search, Classification, Color, EngineError, EngineResult,
    GameState, Move, MoveList, Piece, PieceKind, SearchLimits, Square,
};

use super::{EngineConfig, GameObserver, GameResult, GameSnapshot};

/// What [`Game::move_piece`] did with a from/to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played and the position now classifies as given
    Applied(Classification),
    /// A pawn reached its last rank; call [`Game::complete_promotion`]
    PromotionPending,
}

pub struct Game {
    state: GameState,
    config: EngineConfig,
    result: Option<GameResult>,
    pending_promotion: Option<(Square, Square)>,
    observers: Vec<Box<dyn GameObserver>>,
    rng: StdRng,
}

impl Game {
    /// New game from the initial position with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::from_state(GameState::with_rules(config.rules), config)
    }

    /// Wrap an existing position. The configured rule set replaces the
    /// state's own, and a position that is already mate or stalemate starts
    /// out finished.
    #[must_use]
    pub fn from_state(mut state: GameState, config: EngineConfig) -> Self {
        state.set_rules(config.rules);
        let mut game = Game {
            state,
            config,
            result: None,
            pending_promotion: None,
            observers: Vec::new(),
            rng: StdRng::from_entropy(),
        };
        game.result = game.positional_result();
        game.state.set_active(game.result.is_none());
        game
    }

    pub fn from_fen(fen: &str, config: EngineConfig) -> EngineResult<Self> {
        let state = GameState::try_from_fen(fen)?;
        Ok(Self::from_state(state, config))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the configuration; a changed rule set applies from the next move
    pub fn set_config(&mut self, config: EngineConfig) {
        self.state.set_rules(config.rules);
        self.config = config;
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    /// Destination square of a promotion waiting for its piece choice
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion.map(|(_, to)| to)
    }

    /// Returns true if the configured engine side is on move in a live game
    pub fn is_engine_turn(&self) -> bool {
        self.is_active()
            && self.pending_promotion.is_none()
            && self.config.engine_color == Some(self.state.side_to_move())
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Reseed the generator behind the random difficulty tier
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Legal moves of the piece on `square`.
    ///
    /// Empty for an empty square, an opponent piece or a finished game.
    pub fn legal_moves(&mut self, square: Square) -> MoveList {
        if !self.is_active() {
            return MoveList::new();
        }
        self.state.legal_moves(square)
    }

    pub fn classify(&mut self) -> Classification {
        self.state.classify()
    }

    pub fn in_check(&self, color: Color) -> bool {
        self.state.in_check(color)
    }

    /// Parse coordinate ("e2e4", "e7e8q") or algebraic ("Nf3", "O-O")
    /// notation against the legal moves of the side to move.
    pub fn parse_move(&mut self, text: &str) -> EngineResult<Move> {
        self.state
            .parse_coordinate_move(text)
            .or_else(|_| self.state.parse_san(text))
    }

    /// Play `mv` if it matches a legal move of the piece on its origin square.
    ///
    /// Only the from/to squares and promotion choice of `mv` are compared;
    /// the stored move is the one the generator built.
    pub fn apply_move(&mut self, mv: &Move) -> EngineResult<Classification> {
        self.check_can_move()?;
        let Some(legal) = self
            .state
            .legal_moves(mv.from)
            .into_iter()
            .find(|m| m.same_action(mv))
        else {
            return Err(self.reject(EngineError::IllegalMove {
                notation: mv.to_coordinate(),
            }));
        };
        Ok(self.commit(legal))
    }

    /// Move the piece on `from` to `to`, pausing for a piece choice if the
    /// move is a promotion.
    pub fn move_piece(&mut self, from: Square, to: Square) -> EngineResult<MoveOutcome> {
        self.check_can_move()?;
        let candidates: MoveList = self
            .state
            .legal_moves(from)
            .into_iter()
            .filter(|m| m.to == to)
            .collect();
        match candidates.first() {
            None => Err(self.reject(EngineError::IllegalMove {
                notation: format!("{from}{to}"),
            })),
            Some(m) if m.is_promotion() => {
                log::debug!("promotion on {to} waiting for a piece choice");
                self.pending_promotion = Some((from, to));
                Ok(MoveOutcome::PromotionPending)
            }
            Some(&m) => Ok(MoveOutcome::Applied(self.commit(m))),
        }
    }

    /// Finish a pending promotion with `kind`.
    ///
    /// An invalid choice keeps the promotion pending.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> EngineResult<Classification> {
        let Some((from, to)) = self.pending_promotion else {
            return Err(self.reject(EngineError::NoPendingPromotion));
        };
        if !kind.is_promotion_choice() {
            return Err(self.reject(EngineError::InvalidPromotionChoice { kind }));
        }
        let Some(m) = self
            .state
            .legal_moves(from)
            .into_iter()
            .find(|m| m.to == to && m.promoted_to == Some(kind))
        else {
            self.pending_promotion = None;
            return Err(self.reject(EngineError::IllegalMove {
                notation: format!("{from}{to}{}", kind.to_char()),
            }));
        };
        self.pending_promotion = None;
        Ok(self.commit(m))
    }

    /// Drop a pending promotion; returns false if none was pending
    pub fn cancel_promotion(&mut self) -> bool {
        self.pending_promotion.take().is_some()
    }

    /// Take back the last move; false if there is nothing to undo or the
    /// game cannot be rewound.
    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// Take back the last move, reporting why it could not be done.
    ///
    /// Undoing the move that delivered mate or stalemate resumes the game;
    /// a resigned or timed-out game stays over.
    pub fn try_undo(&mut self) -> EngineResult<Move> {
        if let Some((_, square)) = self.pending_promotion {
            return Err(EngineError::PromotionPending { square });
        }
        if self.result.is_some_and(|r| !r.is_positional()) {
            return Err(EngineError::GameOver);
        }
        let mv = self.state.undo()?;
        if self.result.take().is_some() {
            log::debug!("game resumed after undoing {mv}");
            self.state.set_active(true);
        }
        log::debug!("undo {mv}");
        for observer in &mut self.observers {
            observer.on_move_undone(&mv);
        }
        Ok(mv)
    }

    /// Recommend a move for `color` searching `depth` plies, within the
    /// configured time cap and thread count.
    pub fn best_move(&mut self, color: Color, depth: u32) -> EngineResult<Move> {
        let limits = SearchLimits {
            depth,
            deadline: self.config.move_time().map(|t| Instant::now() + t),
            stop: None,
        };
        let result = if self.config.search_threads > 1 {
            best_move_parallel(&self.state, color, &limits, self.config.search_threads)?
        } else {
            search(&mut self.state, color, &limits)?
        };
        Ok(result.best_move)
    }

    /// The move the configured difficulty picks for the side to move, not played
    pub fn engine_move(&mut self) -> EngineResult<Move> {
        if !self.is_active() {
            return Err(EngineError::GameOver);
        }
        let color = self.state.side_to_move();
        match self.config.difficulty.search_depth() {
            Some(depth) => self.best_move(color, depth),
            None => random_move(&mut self.state, &mut self.rng),
        }
    }

    /// Choose and play the engine's move for the side to move
    pub fn play_engine_move(&mut self) -> EngineResult<(Move, Classification)> {
        self.check_can_move()?;
        let mv = self.engine_move()?;
        Ok((mv, self.commit(mv)))
    }

    /// `color` gives up
    pub fn resign(&mut self, color: Color) -> EngineResult<GameResult> {
        self.end_externally(GameResult::Resignation {
            winner: color.opponent(),
        })
    }

    /// `color` ran out of time on an external clock
    pub fn flag(&mut self, color: Color) -> EngineResult<GameResult> {
        self.end_externally(GameResult::Timeout {
            winner: color.opponent(),
        })
    }

    /// Pieces `color` has captured, in the order they were taken
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.state
            .history()
            .iter()
            .filter(|m| m.piece.color == color)
            .filter_map(|m| m.captured)
            .collect()
    }

    /// Numbered move list, e.g. "1. e4 e5 2. Nf3"
    pub fn history_notation(&self) -> String {
        let mut out = String::new();
        for (i, m) in self.state.history().iter().enumerate() {
            if i % 2 == 0 {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{}. ", i / 2 + 1);
            } else {
                out.push(' ');
            }
            out.push_str(&m.to_algebraic());
        }
        out
    }

    /// Back to the initial position; configuration and observers are kept
    pub fn reset(&mut self) {
        self.state = GameState::with_rules(self.config.rules);
        self.result = None;
        self.pending_promotion = None;
        log::debug!("new game");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state.clone(),
            result: self.result,
        }
    }

    pub fn save_json(&self) -> EngineResult<String> {
        self.snapshot().to_json()
    }

    /// Resume from a snapshot. The snapshot's rule set becomes the game's.
    ///
    /// Snapshots that fail [`GameSnapshot::validate`] are rejected and the
    /// current game is kept.
    pub fn restore(&mut self, snapshot: GameSnapshot) -> EngineResult<()> {
        snapshot.validate()?;
        let GameSnapshot { mut state, result } = snapshot;
        state.set_active(result.is_none());
        self.config.rules = state.rules();
        self.state = state;
        self.result = result;
        self.pending_promotion = None;
        Ok(())
    }

    pub fn load_json(&mut self, json: &str) -> EngineResult<()> {
        let snapshot = GameSnapshot::from_json(json)?;
        self.restore(snapshot)
    }

    fn check_can_move(&mut self) -> EngineResult<()> {
        if let Some((_, square)) = self.pending_promotion {
            return Err(self.reject(EngineError::PromotionPending { square }));
        }
        if !self.is_active() {
            return Err(self.reject(EngineError::GameOver));
        }
        Ok(())
    }

    fn reject(&mut self, error: EngineError) -> EngineError {
        log::warn!("rejected: {error}");
        for observer in &mut self.observers {
            observer.on_illegal_move(&error);
        }
        error
    }

    fn commit(&mut self, mv: Move) -> Classification {
        self.state.apply(mv);
        let classification = self.state.classify();
        log::debug!(
            "{} played {} ({classification})",
            mv.piece.color,
            mv.to_algebraic()
        );
        for observer in &mut self.observers {
            observer.on_move_applied(&mv, classification);
        }
        if let Some(result) = self.positional_result_for(classification) {
            self.finish(result);
        }
        classification
    }

    fn positional_result(&mut self) -> Option<GameResult> {
        let classification = self.state.classify();
        self.positional_result_for(classification)
    }

    fn positional_result_for(&self, classification: Classification) -> Option<GameResult> {
        match classification {
            Classification::Checkmate => Some(GameResult::Checkmate {
                winner: self.state.side_to_move().opponent(),
            }),
            Classification::Stalemate => Some(GameResult::Stalemate),
            Classification::Normal | Classification::Check => None,
        }
    }

    fn end_externally(&mut self, result: GameResult) -> EngineResult<GameResult> {
        if !self.is_active() {
            return Err(EngineError::GameOver);
        }
        self.pending_promotion = None;
        self.finish(result);
        Ok(result)
    }

    fn finish(&mut self, result: GameResult) {
        self.result = Some(result);
        self.state.set_active(false);
        log::debug!("game over: {result}");
        for observer in &mut self.observers {
            observer.on_game_ended(&result);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("fen", &self.state.to_fen())
            .field("config", &self.config)
            .field("result", &self.result)
            .field("pending_promotion", &self.pending_promotion)
            .field("observers", &self.observers.len())
            .finish()
    }
}
