use std::str::FromStr;

use super::error::FenError;
use super::{
    Board, CastleSide, CastlingRights, Color, GameState, MoveClocks, Piece, PieceKind, Square,
};

/// FEN of the standard initial position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// FEN carries no per-piece move flags, so `has_moved` is inferred: a
    /// piece counts as unmoved only on its standard starting square, and
    /// kings and rooks additionally need a matching castling right. Missing
    /// clocks default to "0 1".
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights.set(Color::White, CastleSide::Kingside),
                'Q' => castling_rights.set(Color::White, CastleSide::Queenside),
                'k' => castling_rights.set(Color::Black, CastleSide::Kingside),
                'q' => castling_rights.set(Color::Black, CastleSide::Queenside),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                Square::from_str(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?,
            )
        };

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let mut piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let Some(sq) = Square::new(row, col) else {
                    return Err(FenError::WrongFileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                };
                piece.has_moved = !starts_unmoved(piece, sq, castling_rights);
                board.set(sq, Some(piece));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        for color in Color::BOTH {
            let found = board.king_count(color);
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }

        let clock = |idx: usize, default: u32| -> Result<u32, FenError> {
            parts.get(idx).map_or(Ok(default), |text| {
                text.parse().map_err(|_| FenError::InvalidClock {
                    found: (*text).to_string(),
                })
            })
        };
        let start_clocks = MoveClocks {
            halfmove: clock(4, 0)?,
            fullmove: clock(5, 1)?.max(1),
        };

        let mut state =
            GameState::from_parts(board, side_to_move, castling_rights, en_passant_target);
        state.start_clocks = start_clocks;
        Ok(state)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut line = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.board.piece_at(Square::at(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            line.push_str(&empty.to_string());
                            empty = 0;
                        }
                        line.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                line.push_str(&empty.to_string());
            }
            rows.push(line);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, side, c) in [
            (Color::White, CastleSide::Kingside, 'K'),
            (Color::White, CastleSide::Queenside, 'Q'),
            (Color::Black, CastleSide::Kingside, 'k'),
            (Color::Black, CastleSide::Queenside, 'q'),
        ] {
            if self.castling_rights.has(color, side) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        let MoveClocks { halfmove, fullmove } = self.clocks();

        format!(
            "{} {active} {castling} {ep} {halfmove} {fullmove}",
            rows.join("/")
        )
    }
}

fn starts_unmoved(piece: Piece, sq: Square, rights: CastlingRights) -> bool {
    let back = piece.color.back_row();
    match piece.kind {
        PieceKind::Pawn => sq.row() == piece.color.pawn_start_row(),
        PieceKind::King => {
            sq == Square::at(back, 4)
                && CastleSide::BOTH
                    .iter()
                    .any(|&side| rights.has(piece.color, side))
        }
        PieceKind::Rook => {
            sq.row() == back
                && CastleSide::for_rook_col(sq.col()).is_some_and(|side| rights.has(piece.color, side))
        }
        PieceKind::Knight => sq.row() == back && (sq.col() == 1 || sq.col() == 6),
        PieceKind::Bishop => sq.row() == back && (sq.col() == 2 || sq.col() == 5),
        PieceKind::Queen => sq == Square::at(back, 3),
    }
}
