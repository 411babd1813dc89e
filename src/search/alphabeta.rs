//! Minimax with alpha-beta pruning
//!
//! Fixed-depth, single-threaded, depth-first. The board is mutated in
//! place: each node places exactly one mark and clears it again on every
//! exit path, so the caller's board is bit-identical after a search to
//! before it. No transposition table, no iterative deepening, no move
//! ordering beyond the board's row-major scan — at m,n,k scale the plain
//! algorithm is fast enough, and pruning only cuts work, never changes
//! the returned score.
//!
//! # Example
//!
//! ```
//! use mnk::board::Board;
//! use mnk::search::Searcher;
//!
//! let mut board = Board::parse("X--\n-O-\n---", 'X', 'O').unwrap();
//! let mut searcher = Searcher::new(3);
//!
//! let result = searcher.search(&mut board, 3);
//! assert!(result.best_move.is_some());
//! ```

use tracing::trace;

use crate::board::{Board, Cell, Coord};
use crate::eval::{classify, evaluate, Outcome};
use crate::rules::completes_run;

/// Sentinel score for a decisive result.
///
/// Strictly dominates any heuristic value: the material heuristic is
/// bounded by N^2, far below one million for any board this engine
/// will ever see.
pub const WIN_SCORE: i32 = 1_000_000;

/// Search diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Branches abandoned because `beta <= alpha`.
    pub beta_cutoffs: u64,
    /// Branches resolved by the in-node immediate-win check,
    /// skipping the recursive call entirely.
    pub shortcut_wins: u64,
}

/// Result of a root search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any legal move existed.
    pub best_move: Option<Coord>,
    /// Score of the best move, from Own's perspective.
    pub score: i32,
    /// Total nodes visited.
    pub nodes: u64,
    /// Pruning diagnostics.
    pub stats: SearchStats,
}

/// Fixed-depth alpha-beta searcher.
///
/// `max_depth` counts plies searched beyond each root move, so the total
/// lookahead is `max_depth + 1` half-moves.
pub struct Searcher {
    max_depth: u32,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Score every legal move for Own and return the best one.
    ///
    /// Ties break to the first move in row-major scan order (strictly
    /// greater score required to displace the incumbent). Returns
    /// `best_move: None` when the board has no empty cell.
    pub fn search(&mut self, board: &mut Board, target: usize) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut best_move = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        for mv in board.legal_moves() {
            board.place(mv, Cell::Own);
            let score = self.minimax(board, target, self.max_depth, alpha, beta, false);
            board.clear(mv);

            trace!(row = mv.row, col = mv.col, score, "root move scored");
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
            stats: self.stats,
        }
    }

    /// Recursive minimax over one node.
    ///
    /// `maximizing` selects whose mark is placed and which bound moves.
    /// Every placement below is cleared before the next sibling and
    /// before any return, including the pruning break.
    fn minimax(
        &mut self,
        board: &mut Board,
        target: usize,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        match classify(board, target) {
            Outcome::Win(Cell::Own) => return WIN_SCORE,
            Outcome::Win(_) => return -WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::Ongoing => {}
        }
        if depth == 0 {
            return evaluate(board);
        }

        let mark = if maximizing { Cell::Own } else { Cell::Opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in board.legal_moves() {
            board.place(mv, mark);
            // A placement that finishes a run decides this branch on the
            // spot; no deeper search can change a win already on the board.
            let score = if completes_run(board, mv, mark, target) {
                self.stats.shortcut_wins += 1;
                if maximizing {
                    WIN_SCORE
                } else {
                    -WIN_SCORE
                }
            } else {
                self.minimax(board, target, depth - 1, alpha, beta, !maximizing)
            };
            board.clear(mv);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        best
    }
}
