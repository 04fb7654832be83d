use super::*;
use chess_core::{Coordinate, PieceKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sq(name: &str) -> Coordinate {
    let b = name.as_bytes();
    Coordinate::new((b[0] - b'a') as i8, (b[1] - b'1') as i8).unwrap()
}

fn search(fen: &str, depth: u8, pool: usize, seed: u64) -> SearchOutcome {
    let board = Board::from_fen(fen).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut nodes = 0;
    pick_best_move(&board, board.side_to_move(), depth, pool, &mut rng, &mut nodes).unwrap()
}

#[test]
fn test_pick_best_move_start_position() {
    let board = Board::startpos();
    let mut rng = StdRng::seed_from_u64(7);
    let mut nodes = 0;
    let result = pick_best_move(&board, Color::White, 2, 1, &mut rng, &mut nodes).unwrap();
    assert!(result.best_move.is_some());
    assert_eq!(result.pool, 1);
    assert!(nodes > 20);
}

#[test]
fn test_pick_best_move_finds_mate_in_one() {
    let fen = "6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1";
    let (mv, score) = search(fen, 2, 1, 0).best_move.unwrap();
    assert_eq!((mv.from, mv.to), (sq("e1"), sq("e8")));
    assert_eq!(score, MATE_SCORE - 1);
}

#[test]
fn test_random_pool_still_plays_mate() {
    let fen = "6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1";
    for seed in 0..8 {
        let outcome = search(fen, 2, 4, seed);
        assert_eq!(outcome.pool, 1);
        assert_eq!(outcome.best_move.unwrap().0.to, sq("e8"));
    }
}

#[test]
fn test_wins_hanging_queen() {
    // Black queen on d5 is en prise to the e4 pawn
    let fen = "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1";
    let (mv, score) = search(fen, 2, 1, 0).best_move.unwrap();
    assert_eq!((mv.from, mv.to), (sq("e4"), sq("d5")));
    assert!(score > 0);
}

#[test]
fn test_no_moves_returns_none() {
    let outcome = search("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", 3, 1, 0);
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.pool, 0);
}

#[test]
fn test_wrong_turn_is_rejected() {
    let board = Board::startpos();
    let mut rng = StdRng::seed_from_u64(0);
    let mut nodes = 0;
    let err = pick_best_move(&board, Color::Black, 1, 1, &mut rng, &mut nodes).unwrap_err();
    assert_eq!(
        err,
        ChessError::WrongTurn {
            expected: Color::White,
            got: Color::Black
        }
    );
}

#[test]
fn test_root_pool_skips_lost_moves() {
    let moves = legal_moves(&Board::startpos(), Color::White).unwrap();
    let scored = vec![
        (moves[0], 40),
        (moves[1], 10),
        (moves[2], -(MATE_SCORE - 2)),
        (moves[3], -(MATE_SCORE - 2)),
    ];
    assert_eq!(root_pool(&scored, 4).len(), 2);
    assert_eq!(root_pool(&scored, 1).len(), 1);

    let doomed = vec![(moves[0], -(MATE_SCORE - 4)), (moves[1], -(MATE_SCORE - 2))];
    assert_eq!(root_pool(&doomed, 3).len(), 2);

    let winning = vec![(moves[0], MATE_SCORE - 3), (moves[1], 500)];
    assert_eq!(root_pool(&winning, 3).len(), 1);
}

#[test]
fn test_captures_are_searched_first() {
    // Rook on d1 can take the queen on d8 or the knight on a1
    let board = Board::from_fen("3qk3/8/8/8/8/8/8/n2RK3 w - - 0 1").unwrap();
    let mut moves = legal_moves(&board, Color::White).unwrap();
    order_moves(&mut moves);
    assert_eq!(moves[0].captured_piece.map(|p| p.kind), Some(PieceKind::Queen));
    assert_eq!(moves[1].captured_piece.map(|p| p.kind), Some(PieceKind::Knight));
    assert!(moves[2..].iter().all(|m| !m.is_capture()));
}
