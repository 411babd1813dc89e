//! Leaf heuristic for depth-exhausted positions
//!
//! A material count: +1 for every Own cell, -1 for every Opponent cell.
//! Deliberately weak — it does not see partial runs or threats — but it
//! preserves the one contract the search relies on: positive favors Own,
//! and no heuristic value ever approaches the win/loss sentinels.

use crate::board::{Board, Cell, Coord};

/// Score a non-terminal position from Own's perspective.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for row in 0..board.size() {
        for col in 0..board.size() {
            match board.get(Coord::new(row, col)) {
                Cell::Own => score += 1,
                Cell::Opponent => score -= 1,
                Cell::Empty => {}
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        let b = Board::new(3).unwrap();
        assert_eq!(evaluate(&b), 0);
    }

    #[test]
    fn test_material_difference() {
        let b = Board::parse("XX-\nO--\n--X", 'X', 'O').unwrap();
        assert_eq!(evaluate(&b), 2);
    }

    #[test]
    fn test_sign_convention() {
        let b = Board::parse("O--\nOO-\n--X", 'X', 'O').unwrap();
        assert_eq!(evaluate(&b), -2);
        assert_eq!(evaluate(&b.flipped()), 2);
    }
}
