//! Algebraic notation.
//!
//! Rendering is a pure function of a completed [`Move`]: piece letter
//! (none for pawns, which show their origin file when capturing), `x` for
//! captures, the destination square, `O-O`/`O-O-O` for castling and
//! `=<Letter>` for promotions. Check suffixes need the resulting position
//! and are left to callers.
//!
//! # Examples
//! ```
//! use chess_advisor::board::GameState;
//!
//! let mut state = GameState::new();
//! let mv = state.parse_san("Nf3").unwrap();
//! assert_eq!(mv.to_algebraic(), "Nf3");
//! ```

use std::str::FromStr;

use super::error::{EngineError, EngineResult};
use super::{GameState, Move, MoveKind, PieceKind, Square};

impl Move {
    /// Render this move in algebraic notation, e.g. "e4", "Nxf7", "O-O", "exd8=Q"
    #[must_use]
    pub fn to_algebraic(&self) -> String {
        match self.kind {
            MoveKind::CastleKingside => return "O-O".to_string(),
            MoveKind::CastleQueenside => return "O-O-O".to_string(),
            _ => {}
        }

        let mut san = String::new();
        match self.piece.kind.notation_letter() {
            Some(letter) => san.push(letter),
            None if self.is_capture() => san.push(self.from.file_char()),
            None => {}
        }
        if self.is_capture() {
            san.push('x');
        }
        san.push_str(&self.to.to_string());
        if let Some(letter) = self.promoted_to.and_then(PieceKind::notation_letter) {
            san.push('=');
            san.push(letter);
        }
        san
    }
}

impl GameState {
    /// Parse a move in coordinate notation ("e2e4", "e7e8q") against the
    /// legal moves of the side to move.
    pub fn parse_coordinate_move(&mut self, text: &str) -> EngineResult<Move> {
        let text = text.trim();
        let illegal = || EngineError::IllegalMove {
            notation: text.to_string(),
        };
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(illegal());
        }
        let from = Square::from_str(&text[0..2]).map_err(|_| illegal())?;
        let to = Square::from_str(&text[2..4]).map_err(|_| illegal())?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(PieceKind::from_char(c).ok_or_else(illegal)?),
            None => None,
        };

        self.legal_moves(from)
            .into_iter()
            .find(|m| m.to == to && m.promoted_to == promotion)
            .ok_or_else(illegal)
    }

    /// Parse a move in algebraic notation ("e4", "Nf3", "Bxc6+", "O-O", "e8=Q")
    /// against the legal moves of the side to move.
    pub fn parse_san(&mut self, san: &str) -> EngineResult<Move> {
        let original = san.trim();
        let illegal = || EngineError::IllegalMove {
            notation: original.to_string(),
        };
        let san = original.trim_end_matches(['+', '#', '!', '?']);

        let castle = match san {
            "O-O" | "0-0" => Some(MoveKind::CastleKingside),
            "O-O-O" | "0-0-0" => Some(MoveKind::CastleQueenside),
            _ => None,
        };
        if let Some(kind) = castle {
            return self
                .all_legal_moves()
                .into_iter()
                .find(|m| m.kind == kind)
                .ok_or_else(illegal);
        }

        let (body, promotion) = match san.split_once('=') {
            Some((body, promo)) => {
                let c = promo.chars().next().ok_or_else(illegal)?;
                (body, Some(PieceKind::from_char(c).ok_or_else(illegal)?))
            }
            None => (san, None),
        };

        let mut chars: Vec<char> = body.chars().filter(|&c| c != 'x').collect();
        let kind = match chars.first() {
            Some(c) if c.is_ascii_uppercase() => {
                let kind = PieceKind::from_char(*c).ok_or_else(illegal)?;
                chars.remove(0);
                kind
            }
            Some(_) => PieceKind::Pawn,
            None => return Err(illegal()),
        };
        if chars.len() < 2 {
            return Err(illegal());
        }
        let dest: String = chars[chars.len() - 2..].iter().collect();
        let dest = Square::from_str(&dest).map_err(|_| illegal())?;
        let hints = &chars[..chars.len() - 2];

        let mut matches = self.all_legal_moves().into_iter().filter(|m| {
            m.piece.kind == kind
                && m.to == dest
                && m.promoted_to == promotion
                && hints.iter().all(|&h| match h {
                    'a'..='h' => m.from.file_char() == h,
                    '1'..='8' => m.from.rank() == h as usize - '0' as usize,
                    _ => false,
                })
        });
        let found = matches.next().ok_or_else(illegal)?;
        if matches.next().is_some() {
            return Err(illegal());
        }
        Ok(found)
    }
}
