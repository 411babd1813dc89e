use super::*;
use crate::error::EngineError;

#[test]
fn test_cell_flip() {
    assert_eq!(Cell::Own.flip(), Cell::Opponent);
    assert_eq!(Cell::Opponent.flip(), Cell::Own);
    assert_eq!(Cell::Empty.flip(), Cell::Empty);
}

#[test]
fn test_coord_ordering_is_row_major() {
    let a = Coord::new(0, 0);
    let b = Coord::new(0, 1);
    let c = Coord::new(1, 0);

    assert!(a < b);
    assert!(b < c);
    assert!(a < c);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(3).unwrap();
    assert_eq!(board.size(), 3);
    assert!(!board.is_full());
    assert_eq!(board.legal_moves().len(), 9);
}

#[test]
fn test_zero_size_rejected() {
    assert_eq!(Board::new(0), Err(EngineError::EmptyBoard));
}

#[test]
fn test_place_and_clear_restore_board() {
    let mut board = Board::new(4).unwrap();
    board.place(Coord::new(1, 2), Cell::Opponent);
    let before = board.clone();

    for at in before.legal_moves() {
        board.place(at, Cell::Own);
        assert_eq!(board.get(at), Cell::Own);
        board.clear(at);
        assert_eq!(board, before);
    }
}

#[test]
fn test_legal_moves_row_major_order() {
    let mut board = Board::new(3).unwrap();
    board.place(Coord::new(0, 1), Cell::Own);
    board.place(Coord::new(2, 0), Cell::Opponent);

    let moves = board.legal_moves();
    assert_eq!(moves.len(), 7);
    assert_eq!(moves[0], Coord::new(0, 0));
    assert_eq!(moves[1], Coord::new(0, 2));
    let mut sorted = moves.clone();
    sorted.sort();
    assert_eq!(moves, sorted);
}

#[test]
fn test_from_rows_rejects_non_square() {
    let rows = vec![
        vec![Cell::Empty, Cell::Empty],
        vec![Cell::Empty, Cell::Empty, Cell::Own],
    ];
    assert_eq!(
        Board::from_rows(rows),
        Err(EngineError::NonSquare {
            row: 1,
            expected: 2,
            found: 3,
        })
    );
}

#[test]
fn test_from_rows_rejects_empty() {
    assert_eq!(Board::from_rows(Vec::new()), Err(EngineError::EmptyBoard));
}

#[test]
fn test_parse_round_trip() {
    let text = "X--\n-O-\n--X";
    let board = Board::parse(text, 'X', 'O').unwrap();
    assert_eq!(board.get(Coord::new(0, 0)), Cell::Own);
    assert_eq!(board.get(Coord::new(1, 1)), Cell::Opponent);
    assert_eq!(board.get(Coord::new(2, 1)), Cell::Empty);
    assert_eq!(board.render('X', 'O'), text);
}

#[test]
fn test_parse_rejects_bad_symbol() {
    assert_eq!(
        Board::parse("X--\n-?-\n---", 'X', 'O'),
        Err(EngineError::BadSymbol {
            row: 1,
            col: 1,
            symbol: '?',
        })
    );
}

#[test]
fn test_parse_rejects_ragged_lines() {
    assert_eq!(
        Board::parse("X--\n--\n---", 'X', 'O'),
        Err(EngineError::NonSquare {
            row: 1,
            expected: 3,
            found: 2,
        })
    );
}

#[test]
fn test_try_place_out_of_bounds() {
    let mut board = Board::new(3).unwrap();
    assert_eq!(
        board.try_place(Coord::new(3, 0), Cell::Own),
        Err(EngineError::OutOfBounds {
            row: 3,
            col: 0,
            size: 3,
        })
    );
    assert!(board.try_place(Coord::new(2, 2), Cell::Own).is_ok());
}

#[test]
fn test_full_board() {
    let board = Board::parse("XOX\nOXO\nXOX", 'X', 'O').unwrap();
    assert!(board.is_full());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_flipped_swaps_marks() {
    let board = Board::parse("X-O\n---\nO-X", 'X', 'O').unwrap();
    let flipped = board.flipped();
    assert_eq!(flipped.get(Coord::new(0, 0)), Cell::Opponent);
    assert_eq!(flipped.get(Coord::new(0, 2)), Cell::Own);
    assert_eq!(flipped.get(Coord::new(1, 1)), Cell::Empty);
    assert_eq!(flipped.flipped(), board);
}
