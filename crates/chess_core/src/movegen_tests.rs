use super::*;
use crate::fen::STARTING_FEN;

fn sq(name: &str) -> Coordinate {
    let b = name.as_bytes();
    Coordinate::new((b[0] - b'a') as i8, (b[1] - b'1') as i8).unwrap()
}

fn lone(kind: PieceKind, color: Color, at: &str) -> Piece {
    Piece::new(kind, color, sq(at))
}

fn ray_len_total(piece: &Piece) -> usize {
    candidate_directions(piece).iter().map(Vec::len).sum()
}

#[test]
fn test_candidate_directions_stop_at_edges() {
    assert_eq!(ray_len_total(&lone(PieceKind::Rook, Color::White, "e4")), 14);
    assert_eq!(ray_len_total(&lone(PieceKind::Bishop, Color::White, "e4")), 13);
    assert_eq!(ray_len_total(&lone(PieceKind::Queen, Color::White, "e4")), 27);
    assert_eq!(ray_len_total(&lone(PieceKind::Knight, Color::White, "a1")), 2);
    assert_eq!(ray_len_total(&lone(PieceKind::King, Color::White, "a1")), 3);
    assert_eq!(ray_len_total(&lone(PieceKind::King, Color::Black, "e4")), 8);
}

#[test]
fn test_rays_are_ordered_by_distance() {
    let rook = lone(PieceKind::Rook, Color::White, "a1");
    let up = candidate_directions(&rook)
        .into_iter()
        .find(|r| r[0] == sq("a2"))
        .unwrap();
    assert_eq!(up.len(), 7);
    assert_eq!(up.last(), Some(&sq("a8")));
}

#[test]
fn test_pawn_candidates_depend_on_color_and_history() {
    let white = lone(PieceKind::Pawn, Color::White, "e2");
    let rays = candidate_directions(&white);
    assert_eq!(rays[0], vec![sq("e3"), sq("e4")]);
    assert_eq!(rays.len(), 3);

    let mut moved = lone(PieceKind::Pawn, Color::Black, "a6");
    moved.has_moved = true;
    let rays = candidate_directions(&moved);
    assert_eq!(rays[0], vec![sq("a5")]);
    // Only one diagonal exists from the a-file
    assert_eq!(rays.len(), 2);
}

#[test]
fn test_every_generated_square_is_on_board() {
    for kind in [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        for color in [Color::White, Color::Black] {
            for at in Coordinate::all() {
                let piece = Piece::new(kind, color, at);
                for r in candidate_directions(&piece) {
                    for c in r {
                        assert!(c.file() < 8 && c.rank() < 8);
                        assert_ne!(c, at);
                    }
                }
            }
        }
    }
}

#[test]
fn test_empty_and_captured_pieces_generate_nothing() {
    assert!(candidate_directions(&Piece::empty(sq("d4"))).is_empty());
    let mut gone = lone(PieceKind::Queen, Color::White, "d4");
    gone.captured = true;
    assert!(candidate_directions(&gone).is_empty());
}

#[test]
fn test_truncation_includes_capture_excludes_friend() {
    // White rook a1; white pawn a4; black knight d1
    let board = Board::from_fen("4k3/8/8/8/P7/8/8/R2nK3 w - - 0 1").unwrap();
    let rook = board.piece_at(sq("a1"));
    let dests = pseudo_legal_destinations(&board, &rook);

    assert!(dests.contains(&sq("a2")));
    assert!(dests.contains(&sq("a3")));
    assert!(!dests.contains(&sq("a4")));
    assert!(dests.contains(&sq("b1")));
    assert!(dests.contains(&sq("d1")));
    assert!(!dests.contains(&sq("e1")));
    assert_eq!(dests.len(), 5);
}

#[test]
fn test_pawn_advance_needs_empty_squares() {
    // Black knight on e3 blocks both advances
    let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
    let pawn = board.piece_at(sq("e2"));
    assert!(pseudo_legal_destinations(&board, &pawn).is_empty());

    // Blocker on e4 still allows the single step
    let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
    let pawn = board.piece_at(sq("e2"));
    assert_eq!(pseudo_legal_destinations(&board, &pawn), vec![sq("e3")]);
}

#[test]
fn test_pawn_diagonals_capture_only() {
    let board = Board::from_fen("4k3/8/8/8/8/3p4/4P3/4K3 w - - 0 1").unwrap();
    let pawn = board.piece_at(sq("e2"));
    let dests = pseudo_legal_destinations(&board, &pawn);
    assert!(dests.contains(&sq("d3")));
    assert!(!dests.contains(&sq("f3")));
    assert_eq!(dests.len(), 3);
}

#[test]
fn test_pawn_attacks_empty_diagonals() {
    let board = Board::from_fen(STARTING_FEN).unwrap();
    let pawn = board.piece_at(sq("e2"));
    assert!(attacks(&board, &pawn, sq("f3")));
    assert!(!attacks(&board, &pawn, sq("e3")));
    assert!(is_square_attacked(&board, sq("f3"), Color::White));
    assert!(!is_square_attacked(&board, sq("e4"), Color::White));
}

#[test]
fn test_slider_attack_blocked() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/R2nK3 w - - 0 1").unwrap();
    let rook = board.piece_at(sq("a1"));
    assert!(attacks(&board, &rook, sq("d1")));
    assert!(!attacks(&board, &rook, sq("e1")));
    assert!(attacks(&board, &rook, sq("a8")));
}
