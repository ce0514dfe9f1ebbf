use std::fmt::Write as _;

use crate::board::{Board, Square};

/// Text diagram of the board, White at the bottom.
///
/// ```text
///   +-----------------+
/// 8 | r n b q k b n r |
/// ...
///   +-----------------+
///     a b c d e f g h
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  +-----------------+\n");
    for row in 0..8 {
        let _ = write!(out, "{} |", 8 - row);
        for col in 0..8 {
            let c = board
                .piece_at(Square::at(row, col))
                .map_or('.', |p| p.to_fen_char());
            out.push(' ');
            out.push(c);
        }
        out.push_str(" |\n");
    }
    out.push_str("  +-----------------+\n");
    out.push_str("    a b c d e f g h\n");
    out
}
