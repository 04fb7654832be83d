//! Whole-game scenarios played through the public board API.

use chess_core::{
    Board, ChessError, Color, Coordinate, GameStatus, IllegalMoveReason, PieceKind, game_status,
    is_in_check, legal_moves,
};

fn sq(name: &str) -> Coordinate {
    let b = name.as_bytes();
    Coordinate::new((b[0] - b'a') as i8, (b[1] - b'1') as i8).unwrap()
}

fn play(board: &mut Board, moves: &[(&str, &str)]) -> GameStatus {
    let mut status = GameStatus::InProgress;
    for (from, to) in moves {
        let mv = board
            .propose_move(sq(from), sq(to), None)
            .unwrap_or_else(|e| panic!("{from}-{to}: {e}"));
        status = board.apply_move(&mv).unwrap().status;
    }
    status
}

// =============================================================================
// Finished games
// =============================================================================

#[test]
fn test_scholars_mate() {
    let mut board = Board::startpos();
    let status = play(
        &mut board,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );
    assert_eq!(status, GameStatus::Checkmate { winner: Color::White });
    assert!(is_in_check(&board, Color::Black).unwrap());
    assert!(legal_moves(&board, Color::Black).unwrap().is_empty());
    assert_eq!(board.captured_pieces().len(), 1);
}

#[test]
fn test_fools_mate() {
    let mut board = Board::startpos();
    let status = play(
        &mut board,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    assert_eq!(status.winner(), Some(Color::Black));
}

#[test]
fn test_stalemate_king_and_pawn() {
    let board = Board::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(game_status(&board).unwrap(), GameStatus::Stalemate);
}

#[test]
fn test_stalemate_reached_by_move() {
    let mut board = Board::from_fen("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1").unwrap();
    let status = play(&mut board, &[("b5", "b6")]);
    assert_eq!(status, GameStatus::Stalemate);
}

// =============================================================================
// Turn order and rule enforcement
// =============================================================================

#[test]
fn test_turns_alternate() {
    let mut board = Board::startpos();
    play(&mut board, &[("d2", "d4")]);
    let err = board.propose_move(sq("e2"), sq("e4"), None).unwrap_err();
    assert!(matches!(
        err,
        ChessError::IllegalMove { reason: IllegalMoveReason::NotYourPiece, .. }
    ));
    play(&mut board, &[("d7", "d5"), ("e2", "e4")]);
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn test_castle_then_promote_in_one_game() {
    let mut board = Board::from_fen("4k3/1P6/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    play(&mut board, &[("e1", "g1"), ("e8", "d7")]);
    assert_eq!(board.piece_at(sq("f1")).kind, PieceKind::Rook);

    let mv = board
        .propose_move(sq("b7"), sq("b8"), Some(PieceKind::Rook))
        .unwrap();
    let outcome = board.apply_move(&mv).unwrap();
    assert!(!outcome.promotion_pending);
    assert_eq!(board.piece_at(sq("b8")).kind, PieceKind::Rook);
    assert_eq!(board.to_fen(), "1R6/3k4/8/8/8/8/8/5RK1 b - - 0 1");
}

#[test]
fn test_fen_round_trip() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 1",
    ] {
        assert_eq!(Board::from_fen(fen).unwrap().to_fen(), fen);
    }
}
