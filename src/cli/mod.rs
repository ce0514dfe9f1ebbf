//! Line-oriented console front end.
//!
//! Reads one command per line, drives a [`Game`] and prints plain text.
//! When the configured engine side is on move it replies immediately.

mod command;
mod print;

use std::fs;
use std::io::{self, BufRead, Write};

pub use command::{parse_command, Command};
pub use print::render_board;

use crate::board::{Classification, EngineError, Square};
use crate::engine::{EngineConfig, Game, MoveOutcome};

const HELP: &str = "\
commands:
  new                  start a new game
  show                 print the board
  moves <square>       legal destinations of a piece
  play <move>          e2e4, e7e8q, Nf3, O-O
  promote <piece>      finish a pending promotion
  cancel               drop a pending promotion
  undo                 take back the last move
  status               position and game status
  hint [depth]         suggest a move for the side to move
  go                   let the engine move
  resign               side to move resigns
  fen                  print the position as FEN
  history              numbered move list
  captured             captured pieces per side
  difficulty <level>   beginner, easy, medium, hard
  save <file>          write the game as JSON
  load <file>          resume a game from JSON
  quit";

/// Depth used by `hint` for the random tier, which has none of its own
const DEFAULT_HINT_DEPTH: u32 = 2;

/// Run the console on stdin/stdout until `quit` or end of input
pub fn run_stdio(config: EngineConfig) -> io::Result<()> {
    let mut game = Game::with_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut game, stdin.lock(), stdout.lock())
}

/// Process commands from `input` until `quit` or end of input.
pub fn run_loop<R: BufRead, W: Write>(game: &mut Game, input: R, mut out: W) -> io::Result<()> {
    if game.is_engine_turn() {
        engine_reply(game, &mut out)?;
    }
    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        if cmd == Command::Quit {
            break;
        }
        execute(game, cmd, &mut out)?;
        out.flush()?;
    }
    Ok(())
}

fn execute<W: Write>(game: &mut Game, cmd: Command, out: &mut W) -> io::Result<()> {
    match cmd {
        Command::NewGame => {
            game.reset();
            writeln!(out, "new game")?;
            if game.is_engine_turn() {
                engine_reply(game, out)?;
            }
        }
        Command::Show => write!(out, "{}", render_board(game.state().board()))?,
        Command::Moves(square) => {
            let targets: Vec<String> = game
                .legal_moves(square)
                .iter()
                .map(|m| m.to_coordinate())
                .collect();
            if targets.is_empty() {
                writeln!(out, "no legal moves from {square}")?;
            } else {
                writeln!(out, "{}", targets.join(" "))?;
            }
        }
        Command::Play(text) => play(game, &text, out)?,
        Command::Promote(kind) => match game.complete_promotion(kind) {
            Ok(classification) => after_human_move(game, classification, out)?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        Command::Cancel => {
            if game.cancel_promotion() {
                writeln!(out, "promotion cancelled")?;
            } else {
                writeln!(out, "error: {}", EngineError::NoPendingPromotion)?;
            }
        }
        Command::Undo => undo(game, out)?,
        Command::Status => status(game, out)?,
        Command::Hint(depth) => {
            let depth = depth
                .or_else(|| game.config().difficulty.search_depth())
                .unwrap_or(DEFAULT_HINT_DEPTH);
            let color = game.side_to_move();
            match game.best_move(color, depth) {
                Ok(m) => writeln!(out, "hint: {} ({})", m.to_algebraic(), m.to_coordinate())?,
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
        Command::Go => engine_reply(game, out)?,
        Command::Resign => {
            let color = game.side_to_move();
            match game.resign(color) {
                Ok(result) => writeln!(out, "{result}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
        Command::Fen => writeln!(out, "{}", game.state().to_fen())?,
        Command::History => writeln!(out, "{}", game.history_notation())?,
        Command::Captured => {
            for color in crate::board::Color::BOTH {
                let pieces: String = game
                    .captured_by(color)
                    .iter()
                    .map(|p| p.to_fen_char())
                    .collect();
                writeln!(out, "{color} captured: {pieces}")?;
            }
        }
        Command::Difficulty(difficulty) => {
            let mut config = game.config().clone();
            config.difficulty = difficulty;
            game.set_config(config);
            writeln!(out, "difficulty {difficulty}")?;
        }
        Command::Save(path) => match game.save_json() {
            Ok(json) => match fs::write(&path, json) {
                Ok(()) => writeln!(out, "saved to {path}")?,
                Err(e) => writeln!(out, "error: {path}: {e}")?,
            },
            Err(e) => writeln!(out, "error: {e}")?,
        },
        Command::Load(path) => match fs::read_to_string(&path) {
            Ok(json) => match game.load_json(&json) {
                Ok(()) => writeln!(out, "loaded {path}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Err(e) => writeln!(out, "error: {path}: {e}")?,
        },
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Invalid(reason) => writeln!(out, "error: {reason}")?,
        Command::Quit => {}
    }
    Ok(())
}

/// Plain from/to text goes through the two-step promotion flow; anything
/// else is parsed as a full move.
fn play<W: Write>(game: &mut Game, text: &str, out: &mut W) -> io::Result<()> {
    let squares = (text.len() == 4 && text.is_ascii())
        .then(|| Some((text[..2].parse::<Square>().ok()?, text[2..].parse::<Square>().ok()?)))
        .flatten();

    let applied = match squares {
        Some((from, to)) => game.move_piece(from, to),
        None => game
            .parse_move(text)
            .and_then(|m| game.apply_move(&m))
            .map(MoveOutcome::Applied),
    };
    match applied {
        Ok(MoveOutcome::Applied(classification)) => after_human_move(game, classification, out),
        Ok(MoveOutcome::PromotionPending) => writeln!(out, "promote to? (queen, rook, bishop, knight)"),
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn after_human_move<W: Write>(
    game: &mut Game,
    classification: Classification,
    out: &mut W,
) -> io::Result<()> {
    report_move(game, classification, out)?;
    if game.is_engine_turn() {
        engine_reply(game, out)?;
    }
    Ok(())
}

fn engine_reply<W: Write>(game: &mut Game, out: &mut W) -> io::Result<()> {
    match game.play_engine_move() {
        Ok((_, classification)) => report_move(game, classification, out),
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn report_move<W: Write>(
    game: &Game,
    classification: Classification,
    out: &mut W,
) -> io::Result<()> {
    if let Some(m) = game.state().last_move() {
        let suffix = match classification {
            Classification::Checkmate => "#",
            Classification::Check => "+",
            Classification::Normal | Classification::Stalemate => "",
        };
        writeln!(out, "{} plays {}{suffix}", m.piece.color, m.to_algebraic())?;
    }
    if let Some(result) = game.result() {
        writeln!(out, "{result}")?;
    }
    Ok(())
}

fn undo<W: Write>(game: &mut Game, out: &mut W) -> io::Result<()> {
    match game.try_undo() {
        Ok(m) => {
            writeln!(out, "took back {}", m.to_algebraic())?;
            // Against the engine, take back its reply too so the human is on move
            if game.config().engine_color == Some(game.side_to_move()) {
                if let Ok(m) = game.try_undo() {
                    writeln!(out, "took back {}", m.to_algebraic())?;
                }
            }
            Ok(())
        }
        Err(e) => writeln!(out, "error: {e}"),
    }
}

fn status<W: Write>(game: &mut Game, out: &mut W) -> io::Result<()> {
    if let Some(result) = game.result() {
        return writeln!(out, "{result}");
    }
    if let Some(square) = game.pending_promotion() {
        return writeln!(out, "promotion on {square} waiting for a piece");
    }
    let color = game.side_to_move();
    let classification = game.classify();
    writeln!(out, "{color} to move ({classification})")?;
    writeln!(
        out,
        "material {} eval {}",
        game.state().material_balance(),
        game.state().positional_score()
    )
}
