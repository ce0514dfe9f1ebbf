use crate::board::{PieceKind, Square};
use crate::engine::Difficulty;

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Show,
    Moves(Square),
    Play(String),
    Promote(PieceKind),
    Cancel,
    Undo,
    Status,
    Hint(Option<u32>),
    Go,
    Resign,
    Fen,
    History,
    Captured,
    Difficulty(Difficulty),
    Save(String),
    Load(String),
    Help,
    Quit,
    /// Anything that did not parse, with the reason
    Invalid(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let (&name, args) = parts.split_first()?;

    let arg = |what: &str| {
        args.first()
            .map(|a| (*a).to_string())
            .ok_or_else(|| Command::Invalid(format!("{name} needs {what}")))
    };

    let cmd = match name {
        "new" => Command::NewGame,
        "show" | "board" => Command::Show,
        "moves" => match arg("a square") {
            Ok(a) => a
                .parse::<Square>()
                .map_or_else(|e| Command::Invalid(e.to_string()), Command::Moves),
            Err(cmd) => cmd,
        },
        "play" | "move" => match arg("a move") {
            Ok(a) => Command::Play(a),
            Err(cmd) => cmd,
        },
        "promote" => match arg("a piece") {
            Ok(a) => parse_piece(&a)
                .map_or_else(|| Command::Invalid(format!("unknown piece '{a}'")), Command::Promote),
            Err(cmd) => cmd,
        },
        "cancel" => Command::Cancel,
        "undo" => Command::Undo,
        "status" => Command::Status,
        "hint" => Command::Hint(args.first().and_then(|d| d.parse().ok())),
        "go" | "ai" => Command::Go,
        "resign" => Command::Resign,
        "fen" => Command::Fen,
        "history" => Command::History,
        "captured" => Command::Captured,
        "difficulty" | "level" => match arg("a level") {
            Ok(a) => a
                .parse::<Difficulty>()
                .map_or_else(|e| Command::Invalid(e.to_string()), Command::Difficulty),
            Err(cmd) => cmd,
        },
        "save" => match arg("a file path") {
            Ok(a) => Command::Save(a),
            Err(cmd) => cmd,
        },
        "load" => match arg("a file path") {
            Ok(a) => Command::Load(a),
            Err(cmd) => cmd,
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Invalid(format!("unknown command '{trimmed}'")),
    };

    Some(cmd)
}

/// Piece name or letter: "queen", "q", "N"
fn parse_piece(text: &str) -> Option<PieceKind> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_char(c),
        _ => PieceKind::ALL
            .into_iter()
            .find(|k| k.to_string().eq_ignore_ascii_case(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            parse_command("moves e2"),
            Some(Command::Moves(Square::at(6, 4)))
        );
        assert!(matches!(
            parse_command("moves z9"),
            Some(Command::Invalid(_))
        ));
        assert!(matches!(parse_command("moves"), Some(Command::Invalid(_))));
    }

    #[test]
    fn test_parse_promote() {
        assert_eq!(
            parse_command("promote queen"),
            Some(Command::Promote(PieceKind::Queen))
        );
        assert_eq!(
            parse_command("promote N"),
            Some(Command::Promote(PieceKind::Knight))
        );
        assert!(matches!(
            parse_command("promote dragon"),
            Some(Command::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("play Nf3"), Some(Command::Play("Nf3".into())));
        assert_eq!(parse_command("hint 3"), Some(Command::Hint(Some(3))));
        assert_eq!(parse_command("hint"), Some(Command::Hint(None)));
        assert_eq!(
            parse_command("level beginner"),
            Some(Command::Difficulty(Difficulty::Beginner))
        );
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert!(matches!(parse_command("xyzzy"), Some(Command::Invalid(_))));
    }
}
