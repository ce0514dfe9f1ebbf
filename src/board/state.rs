use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Move, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8×8 grid of optional pieces, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces
    #[must_use]
    pub fn empty() -> Self {
        Board::default()
    }

    /// The standard initial placement
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.set(Square::at(0, col), Some(Piece::new(*kind, Color::Black)));
            board.set(Square::at(1, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set(Square::at(6, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set(Square::at(7, col), Some(Piece::new(*kind, Color::White)));
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row()][sq.col()] = piece;
    }

    /// Remove and return the piece on `sq`
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()].take()
    }

    /// Occupied squares with their pieces, in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Number of kings of `color`; exactly one on any playable board
    #[must_use]
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .count()
    }

    /// Locate the king of `color` by scanning the board
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

/// Special-move rules that can be switched off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub castling: bool,
    pub en_passant: bool,
    pub promotion: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            castling: true,
            en_passant: true,
            promotion: true,
        }
    }
}

impl RuleSet {
    /// Plain piece movement only, no castling, en passant or promotion
    #[must_use]
    pub const fn basic() -> Self {
        RuleSet {
            castling: false,
            en_passant: false,
            promotion: false,
        }
    }
}

/// Full state of a game in progress.
///
/// Mutated only through [`GameState::apply`] and [`GameState::undo`];
/// every simulated apply inside the engine is paired with an undo, so
/// queries that take `&mut self` hand the state back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<Move>,
    pub(crate) active: bool,
    pub(crate) rules: RuleSet,
    /// FEN clocks of the position the history starts from
    #[serde(default)]
    pub(crate) start_clocks: MoveClocks,
}

/// Halfmove clock and fullmove number as written in FEN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveClocks {
    /// Plies since the last capture or pawn move
    pub halfmove: u32,
    /// Starts at 1 and increments after each Black move
    pub fullmove: u32,
}

impl Default for MoveClocks {
    fn default() -> Self {
        MoveClocks {
            halfmove: 0,
            fullmove: 1,
        }
    }
}

impl GameState {
    /// Standard initial position with full castling rights
    #[must_use]
    pub fn new() -> Self {
        GameState::with_rules(RuleSet::default())
    }

    /// Standard initial position under the given rule set
    #[must_use]
    pub fn with_rules(rules: RuleSet) -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling_rights: if rules.castling {
                CastlingRights::all()
            } else {
                CastlingRights::none()
            },
            en_passant_target: None,
            history: Vec::new(),
            active: true,
            rules,
            start_clocks: MoveClocks::default(),
        }
    }

    /// Build a state from parts, with an empty history.
    ///
    /// The caller is responsible for placing exactly one king per color.
    #[must_use]
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        GameState {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            history: Vec::new(),
            active: true,
            rules: RuleSet::default(),
            start_clocks: MoveClocks::default(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Moves played so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Clocks of the current position, counted on from the starting clocks
    #[must_use]
    pub fn clocks(&self) -> MoveClocks {
        let start = self.start_clocks;
        let first_mover = self
            .history
            .first()
            .map_or(self.side_to_move, |m| m.piece.color);
        let offset = u32::from(first_mover == Color::Black);
        let plies = self.history.len() as u32;

        let halfmove = match self
            .history
            .iter()
            .rposition(|m| m.piece.kind == PieceKind::Pawn || m.is_capture())
        {
            Some(idx) => plies - idx as u32 - 1,
            None => start.halfmove + plies,
        };
        MoveClocks {
            halfmove,
            fullmove: start.fullmove + (plies + offset) / 2,
        }
    }

    #[must_use]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Replace the rule set; clears castling rights when castling is disabled.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
        if !rules.castling {
            self.castling_rights = CastlingRights::none();
        }
        if !rules.en_passant {
            self.en_passant_target = None;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
