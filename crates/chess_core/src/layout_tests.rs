use super::*;
use crate::fen::STARTING_FEN;
use crate::types::PieceKind;

#[test]
fn test_standard_layout_matches_fen() {
    let from_layout = Board::new(&STANDARD_LAYOUT).unwrap();
    let from_fen = Board::from_fen(STARTING_FEN).unwrap();
    assert_eq!(from_layout, from_fen);
    assert_eq!(Board::default(), from_layout);
}

#[test]
fn test_new_board_state() {
    let board = Board::startpos();
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.castling(), CastlingRights::all());
    assert_eq!(board.en_passant(), None);
    assert_eq!(board.pending_promotion(), None);
    assert!(board.captured_pieces().is_empty());
    assert_eq!(board.pieces(Color::White).count(), 16);
    assert!(board.pieces(Color::Black).all(|p| !p.has_moved));
}

#[test]
fn test_custom_layout_masks_rights() {
    let mut grid = STANDARD_LAYOUT.grid;
    // Remove the h1 rook and the black queen-side rook
    grid[7][7] = "";
    grid[0][0] = "";
    let board = Board::new(&StartingLayout {
        grid,
        side_to_move: Color::Black,
    })
    .unwrap();
    let rights = board.castling();
    assert!(!rights.white_king_side);
    assert!(rights.white_queen_side);
    assert!(rights.black_king_side);
    assert!(!rights.black_queen_side);
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn test_decode_rejects_bad_cells() {
    let mut grid = STANDARD_LAYOUT.grid;
    grid[3][3] = "x";
    let err = Board::new(&StartingLayout {
        grid,
        side_to_move: Color::White,
    });
    assert!(matches!(err, Err(ChessError::InvalidLayout(_))));

    assert!(decode_cell("Qq", Coordinate::at(0, 0)).is_err());
    assert_eq!(
        decode_cell(" n ", Coordinate::at(1, 7)).unwrap().kind,
        PieceKind::Knight
    );
}

#[test]
fn test_decode_rejects_short_rows() {
    let rows = vec![vec![""; 8]; 7];
    assert!(matches!(decode_rows(&rows), Err(ChessError::InvalidLayout(_))));

    let mut rows = vec![vec![""; 8]; 8];
    rows[2].pop();
    assert!(matches!(decode_rows(&rows), Err(ChessError::InvalidLayout(_))));
}

#[test]
fn test_encode_rank_eight_first() {
    let rows = encode_rows(&Board::startpos());
    assert_eq!(rows[0][4], "k");
    assert_eq!(rows[7][3], "Q");
    assert_eq!(rows[4][4], "");
}
