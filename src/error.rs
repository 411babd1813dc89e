//! Error types for board construction and move selection

/// Errors surfaced by the engine and the board builders.
///
/// Malformed input is rejected eagerly at the boundary where it enters
/// (board construction, target validation) so that the search itself can
/// assume a well-formed square grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The board must have at least one row and one column.
    #[error("board must have at least one row and one column")]
    EmptyBoard,

    /// A row's width does not match the number of rows (the grid must be square).
    #[error("board is not square: expected {expected} cells in row {row}, found {found}")]
    NonSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A text board contained a symbol that is neither empty nor either player.
    #[error("unrecognized symbol {symbol:?} at ({row}, {col})")]
    BadSymbol { row: usize, col: usize, symbol: char },

    /// A coordinate fell outside the N x N grid.
    #[error("coordinate ({row}, {col}) is out of bounds for a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// The target run length must be at least 1.
    #[error("target run length must be at least 1")]
    InvalidTarget,

    /// Search produced no candidate even though legal moves exist.
    ///
    /// This cannot happen for a well-formed board; it is surfaced rather
    /// than swallowed into an arbitrary default coordinate.
    #[error("search returned no candidate move despite legal moves existing")]
    NoCandidateMove,
}
