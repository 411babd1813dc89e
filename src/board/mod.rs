//! Board representation for the m,n,k engine

pub mod grid;

#[cfg(test)]
mod tests;

// Re-exports
pub use grid::Board;

/// Symbol used for an empty cell in text boards.
pub const EMPTY_SYMBOL: char = '-';

/// Cell contents, seen from the engine's side.
///
/// The engine is symbol-agnostic: whichever mark ("X", "O", ...) the
/// surrounding system plays is mapped to `Own` before the board reaches
/// the engine, and the opponent's mark to `Opponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Own,
    Opponent,
}

impl Cell {
    /// Get the opposing mark. Empty flips to itself.
    #[inline]
    pub fn flip(self) -> Cell {
        match self {
            Cell::Own => Cell::Opponent,
            Cell::Opponent => Cell::Own,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// Position on the board, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major order, matching the scan order of `Board::legal_moves`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
