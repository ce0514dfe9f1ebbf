//! Move generation and legality tests.

use super::{find_move, sq};
use crate::board::{EngineError, GameState, MoveKind, PieceKind, RuleSet, Square};

#[test]
fn test_starting_position_has_twenty_moves() {
    let mut state = GameState::new();
    let moves = state.all_legal_moves();
    assert_eq!(moves.len(), 20);
    assert_eq!(moves.iter().filter(|m| m.piece.kind == PieceKind::Knight).count(), 4);
    assert!(moves.iter().all(|m| !m.is_capture()));
    assert_eq!(
        moves.iter().filter(|m| m.kind == MoveKind::DoublePush).count(),
        8
    );
}

#[test]
fn test_empty_and_opponent_squares_have_no_moves() {
    let mut state = GameState::new();
    assert!(state.legal_moves(sq("e4")).is_empty());
    assert!(state.legal_moves(sq("e7")).is_empty());
    assert_eq!(
        state.candidate_moves(sq("e4")),
        Err(EngineError::EmptySquare { square: sq("e4") })
    );
}

#[test]
fn test_pinned_bishop_cannot_move() {
    let mut state = GameState::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1");
    assert!(state.legal_moves(sq("e2")).is_empty());
    // Pseudo-legal candidates still exist
    assert!(!state.candidate_moves(sq("e2")).unwrap().is_empty());
    assert_eq!(state.legal_moves(sq("e1")).len(), 4);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
    let mut targets: Vec<Square> = state.legal_moves(sq("e1")).iter().map(|m| m.to).collect();
    targets.sort();
    // Rook on d2 covers the d-file and the second rank; capturing it is fine
    assert_eq!(targets, vec![sq("d2"), sq("f1")]);
}

#[test]
fn test_only_check_evasions_are_legal() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2r w - - 0 1");
    let moves = state.all_legal_moves();
    assert!(!moves.is_empty());
    for m in moves {
        state.apply(m);
        assert!(!state.in_check(crate::board::Color::White), "{m} leaves king in check");
        state.undo().unwrap();
    }
}

#[test]
fn test_en_passant_capture_available() {
    let mut state =
        GameState::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let moves = state.legal_moves(sq("e5"));
    assert_eq!(moves.len(), 2);
    let ep = moves
        .iter()
        .find(|m| m.kind == MoveKind::EnPassant)
        .expect("en passant capture");
    assert_eq!(ep.to, sq("f6"));
    assert_eq!(ep.capture_square(), sq("f5"));
    assert_eq!(ep.captured.map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn test_en_passant_only_on_next_ply() {
    let mut state = GameState::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
    let push = find_move(&mut state, "e2", "e4", None);
    assert_eq!(push.kind, MoveKind::DoublePush);
    state.apply(push);
    assert_eq!(state.en_passant_target(), Some(sq("e3")));

    let replies = state.legal_moves(sq("d4"));
    assert_eq!(replies.len(), 2);
    assert!(replies.iter().any(|m| m.kind == MoveKind::EnPassant));

    // Black declines, White waits, and the chance is gone
    let king = find_move(&mut state, "e8", "d7", None);
    state.apply(king);
    assert_eq!(state.en_passant_target(), None);
    let king = find_move(&mut state, "e1", "f1", None);
    state.apply(king);
    let replies = state.legal_moves(sq("d4"));
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].kind, MoveKind::Normal);
}

#[test]
fn test_en_passant_disabled_by_rules() {
    let mut state = GameState::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
    state.set_rules(RuleSet {
        en_passant: false,
        ..RuleSet::default()
    });
    let push = find_move(&mut state, "e2", "e4", None);
    state.apply(push);
    assert_eq!(state.en_passant_target(), None);
    assert_eq!(state.legal_moves(sq("d4")).len(), 1);
}

#[test]
fn test_castling_both_sides() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let moves = state.legal_moves(sq("e1"));
    assert_eq!(moves.len(), 7);
    assert!(moves
        .iter()
        .any(|m| m.kind == MoveKind::CastleKingside && m.to == sq("g1")));
    assert!(moves
        .iter()
        .any(|m| m.kind == MoveKind::CastleQueenside && m.to == sq("c1")));
}

#[test]
fn test_castling_through_attacked_square_refused() {
    let mut state = GameState::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = state.legal_moves(sq("e1"));
    assert!(!moves.iter().any(|m| m.kind == MoveKind::CastleKingside));
    assert!(moves.iter().any(|m| m.kind == MoveKind::CastleQueenside));
}

#[test]
fn test_castling_into_attacked_square_refused() {
    let mut state = GameState::from_fen("1k4r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = state.legal_moves(sq("e1"));
    assert!(!moves.iter().any(|m| m.kind == MoveKind::CastleKingside));
    assert!(moves.iter().any(|m| m.kind == MoveKind::CastleQueenside));
}

#[test]
fn test_castling_out_of_check_refused() {
    let mut state = GameState::from_fen("1k2r3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(state.in_check(crate::board::Color::White));
    assert!(!state.legal_moves(sq("e1")).iter().any(|m| m.is_castling()));
}

#[test]
fn test_castling_blocked_by_pieces() {
    let mut state = GameState::new();
    assert!(!state.all_legal_moves().iter().any(|m| m.is_castling()));

    // b1 must be empty even though the king never crosses it
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
    let moves = state.legal_moves(sq("e1"));
    assert!(!moves.iter().any(|m| m.kind == MoveKind::CastleQueenside));
    assert!(moves.iter().any(|m| m.kind == MoveKind::CastleKingside));
}

#[test]
fn test_castling_right_not_regained() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for (from, to) in [("h1", "h2"), ("a8", "a7"), ("h2", "h1"), ("a7", "a8")] {
        let m = find_move(&mut state, from, to, None);
        state.apply(m);
    }
    let moves = state.legal_moves(sq("e1"));
    assert!(!moves.iter().any(|m| m.kind == MoveKind::CastleKingside));
    assert!(moves.iter().any(|m| m.kind == MoveKind::CastleQueenside));
}

#[test]
fn test_castling_disabled_by_rules() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    state.set_rules(RuleSet::basic());
    assert!(!state.legal_moves(sq("e1")).iter().any(|m| m.is_castling()));
    assert_eq!(state.castling_rights(), crate::board::CastlingRights::none());
}

#[test]
fn test_promotion_offers_four_pieces() {
    let mut state = GameState::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = state.legal_moves(sq("a7"));
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.kind == MoveKind::Promotion));
    for kind in [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ] {
        assert!(moves.iter().any(|m| m.promoted_to == Some(kind)));
    }
}

#[test]
fn test_capture_promotion() {
    let mut state = GameState::from_fen("1n6/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = state.legal_moves(sq("a7"));
    assert_eq!(moves.len(), 8);
    assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 4);
}

#[test]
fn test_promotion_disabled_pawn_stays_pawn() {
    let mut state = GameState::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    state.set_rules(RuleSet {
        promotion: false,
        ..RuleSet::default()
    });
    let moves = state.legal_moves(sq("a7"));
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].kind, MoveKind::Normal);
    state.apply(moves[0]);
    assert_eq!(
        state.board().piece_at(sq("a8")).map(|p| p.kind),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn test_black_pawn_moves_down_the_board() {
    let mut state =
        GameState::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    let moves = state.legal_moves(sq("d7"));
    let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
    assert_eq!(targets, vec![sq("d6"), sq("d5")]);
}
