use super::*;

#[test]
fn test_new_rejects_out_of_range() {
    assert!(Coordinate::new(0, 0).is_ok());
    assert!(Coordinate::new(7, 7).is_ok());
    assert_eq!(
        Coordinate::new(8, 0),
        Err(ChessError::OutOfBounds { file: 8, rank: 0 })
    );
    assert!(Coordinate::new(0, -1).is_err());
}

#[test]
fn test_from_offset() {
    let e2 = Coordinate::new(4, 1).unwrap();
    let e4 = e2.from_offset(0, 2).unwrap();
    assert_eq!((e4.file(), e4.rank()), (4, 3));

    let h1 = Coordinate::new(7, 0).unwrap();
    assert_eq!(
        h1.from_offset(1, 0),
        Err(ChessError::OutOfBounds { file: 8, rank: 0 })
    );
}

#[test]
fn test_is_offset_within_board() {
    let a1 = Coordinate::new(0, 0).unwrap();
    assert!(a1.is_offset_within_board(7, 7));
    assert!(!a1.is_offset_within_board(-1, 0));
    assert!(!a1.is_offset_within_board(1, 8));
}

#[test]
fn test_display_and_index() {
    let e4 = Coordinate::new(4, 3).unwrap();
    assert_eq!(e4.to_string(), "e4");
    assert_eq!(e4.index(), 28);
    assert_eq!(Coordinate::from_index(63).to_string(), "h8");
}

#[test]
fn test_all_covers_board_in_order() {
    let all: Vec<_> = Coordinate::all().collect();
    assert_eq!(all.len(), 64);
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_deserialize_checks_bounds() {
    let ok: Coordinate = serde_json::from_str(r#"{"file":2,"rank":5}"#).unwrap();
    assert_eq!(ok.to_string(), "c6");
    assert!(serde_json::from_str::<Coordinate>(r#"{"file":9,"rank":0}"#).is_err());
}
