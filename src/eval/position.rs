//! Terminal-state classification

use crate::board::{Board, Cell, Coord};
use crate::rules::completes_run;

/// What the current position is, before any further search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given mark holds a completed run.
    Win(Cell),
    /// No run exists and no empty cell remains.
    Draw,
    /// Play continues.
    Ongoing,
}

/// Classify a position by rescanning the whole board.
///
/// Every non-empty cell is checked for a completed run of its own mark.
/// Rescanning is the simplest-correct design at the board sizes this
/// engine targets; nothing is tracked incrementally between calls.
///
/// Under alternating play at most one side can hold a completed run. If a
/// malformed board holds runs for both sides, the first cell found in
/// row-major order decides the reported winner; that is scan order, not a
/// priority rule, so reject such boards before they reach the engine.
pub fn classify(board: &Board, target: usize) -> Outcome {
    let mut empty_found = false;

    for row in 0..board.size() {
        for col in 0..board.size() {
            let at = Coord::new(row, col);
            let mark = board.get(at);
            if mark == Cell::Empty {
                empty_found = true;
                continue;
            }
            if completes_run(board, at, mark, target) {
                return Outcome::Win(mark);
            }
        }
    }

    if empty_found {
        Outcome::Ongoing
    } else {
        Outcome::Draw
    }
}
