//! Run detection around a single cell
//!
//! A win is `target` (K) same-mark cells in a row along any of four axes.
//! Checking is local: from the cell just played, walk outward in both
//! directions of each axis and count contiguous matching cells. This is
//! O(N) per call regardless of board size, far cheaper than rescanning
//! every line of the board after each placement.

use crate::board::{Board, Cell, Coord};

/// Direction vectors for line checking (4 axes).
/// Each axis is scanned both ways from the anchor cell, so the four
/// entries cover all eight compass directions.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check whether the cell at `at` sits inside a run of length >= `target`.
///
/// Returns false unless the board actually holds `mark` at `at`; callers
/// place the mark first, ask, then clear it again if the move was only
/// tentative. With `target == 1` any occupied cell qualifies; a target
/// larger than the board can never be satisfied.
pub fn completes_run(board: &Board, at: Coord, mark: Cell, target: usize) -> bool {
    if mark == Cell::Empty || board.get(at) != mark {
        return false;
    }

    for (dr, dc) in DIRECTIONS {
        // The anchor cell counts once; extend both ways from it.
        let count = 1 + run_length(board, at, dr, dc, mark) + run_length(board, at, -dr, -dc, mark);
        if count >= target {
            return true;
        }
    }
    false
}

/// Count contiguous `mark` cells strictly beyond `from` along (dr, dc).
fn run_length(board: &Board, from: Coord, dr: i32, dc: i32, mark: Cell) -> usize {
    let mut count = 0;
    let mut row = from.row as i32 + dr;
    let mut col = from.col as i32 + dc;
    while board.in_bounds(row, col) && board.get(Coord::new(row as usize, col as usize)) == mark {
        count += 1;
        row += dr;
        col += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::parse(text, 'X', 'O').unwrap()
    }

    #[test]
    fn test_horizontal_run() {
        let b = board("---\nXXX\n---");
        assert!(completes_run(&b, Coord::new(1, 0), Cell::Own, 3));
        assert!(completes_run(&b, Coord::new(1, 1), Cell::Own, 3));
        assert!(completes_run(&b, Coord::new(1, 2), Cell::Own, 3));
    }

    #[test]
    fn test_vertical_run() {
        let b = board("-O-\n-O-\n-O-");
        assert!(completes_run(&b, Coord::new(1, 1), Cell::Opponent, 3));
        assert!(!completes_run(&b, Coord::new(1, 1), Cell::Own, 3));
    }

    #[test]
    fn test_diagonal_run() {
        let b = board("X---\n-X--\n--X-\n---X");
        assert!(completes_run(&b, Coord::new(2, 2), Cell::Own, 4));
    }

    #[test]
    fn test_anti_diagonal_run() {
        let b = board("--X\n-X-\nX--");
        assert!(completes_run(&b, Coord::new(0, 2), Cell::Own, 3));
        assert!(completes_run(&b, Coord::new(2, 0), Cell::Own, 3));
    }

    #[test]
    fn test_run_shorter_than_target() {
        let b = board("XX-\n---\n---");
        assert!(!completes_run(&b, Coord::new(0, 0), Cell::Own, 3));
        assert!(completes_run(&b, Coord::new(0, 0), Cell::Own, 2));
    }

    #[test]
    fn test_run_counted_across_anchor() {
        // Anchor in the middle of the run: one cell each side plus itself.
        let b = board("-----\nXXXXX\n-----\n-----\n-----");
        assert!(completes_run(&b, Coord::new(1, 2), Cell::Own, 5));
    }

    #[test]
    fn test_target_one_on_occupied_cell() {
        let b = board("X--\n---\n---");
        assert!(completes_run(&b, Coord::new(0, 0), Cell::Own, 1));
        assert!(!completes_run(&b, Coord::new(0, 1), Cell::Own, 1));
    }

    #[test]
    fn test_target_larger_than_board() {
        let b = board("XXX\nXXX\nXXX");
        assert!(!completes_run(&b, Coord::new(1, 1), Cell::Own, 4));
    }

    #[test]
    fn test_empty_mark_never_runs() {
        let b = board("---\n---\n---");
        assert!(!completes_run(&b, Coord::new(1, 1), Cell::Empty, 1));
    }

    #[test]
    fn test_run_at_board_edge() {
        let b = board("---\n---\nXXX");
        assert!(completes_run(&b, Coord::new(2, 1), Cell::Own, 3));
    }

    #[test]
    fn test_opponent_cells_break_run() {
        let b = board("XOX\n---\n---");
        assert!(!completes_run(&b, Coord::new(0, 0), Cell::Own, 2));
    }

    /// Rotate a board by 180 degrees.
    fn rotated(b: &Board) -> Board {
        let n = b.size();
        let mut rows = Vec::with_capacity(n);
        for row in 0..n {
            let mut line = Vec::with_capacity(n);
            for col in 0..n {
                line.push(b.get(Coord::new(n - 1 - row, n - 1 - col)));
            }
            rows.push(line);
        }
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_symmetric_under_rotation() {
        let boards = [
            board("XX-\nOO-\nX-O"),
            board("X--O\n-XO-\n-OX-\nO--X"),
            board("XXXX\nOOO-\n-X-O\nOXOX"),
        ];
        for b in &boards {
            let r = rotated(b);
            let n = b.size();
            for row in 0..n {
                for col in 0..n {
                    let at = Coord::new(row, col);
                    let mirror = Coord::new(n - 1 - row, n - 1 - col);
                    for mark in [Cell::Own, Cell::Opponent] {
                        for target in 1..=n {
                            assert_eq!(
                                completes_run(b, at, mark, target),
                                completes_run(&r, mirror, mark, target),
                                "rotation mismatch at {at:?} target {target}"
                            );
                        }
                    }
                }
            }
        }
    }
}
