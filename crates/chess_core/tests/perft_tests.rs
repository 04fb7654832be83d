use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Board, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

/// (name, FEN, [(depth, nodes)]); the deeper entries only run with FULL_PERFT set
const CASES: &[(&str, &str, &[(u8, u64)], &[(u8, u64)])] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8902)],
        &[(4, 197_281)],
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        &[(1, 48), (2, 2039)],
        &[(3, 97_862)],
    ),
    (
        "position 3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        &[(1, 14), (2, 191), (3, 2812)],
        &[(4, 43_238)],
    ),
    (
        "position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6), (2, 264)],
        &[(3, 9467)],
    ),
    (
        "position 5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[(1, 44), (2, 1486)],
        &[(3, 62_379)],
    ),
    (
        "position 6",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        &[(1, 46), (2, 2079)],
        &[(3, 89_890)],
    ),
];

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().for_each(|(name, fen, quick, deep)| {
        let start = Instant::now();
        let mut board = Board::from_fen(fen).unwrap_or_else(|e| panic!("{name}: {e}"));
        let original = board.clone();

        let mut depths = quick.to_vec();
        if full {
            depths.extend_from_slice(deep);
        }
        let mut total_nodes = 0u64;
        for (depth, expected) in depths {
            let got = perft(&mut board, depth).unwrap();
            assert_eq!(
                got, expected,
                "Perft mismatch for {name} ('{fen}') at depth {depth}"
            );
            total_nodes += got;
        }

        assert_eq!(board, original, "{name}: perft left the board changed");
        println!(
            "{name} done: {total_nodes} nodes in {:.3?}",
            start.elapsed()
        );
    });
}

#[test]
fn perft_depth_zero_is_one() {
    let mut board = Board::startpos();
    assert_eq!(perft(&mut board, 0).unwrap(), 1);
}
