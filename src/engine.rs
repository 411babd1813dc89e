//! Move selection orchestrating the search components
//!
//! The engine decides one move per call, following a two-stage priority:
//!
//! 1. **Immediate win**: any move that completes Own's run is taken on the
//!    spot, without searching.
//! 2. **Alpha-beta**: otherwise every legal move is scored by fixed-depth
//!    minimax and the best one (first in scan order on ties) is chosen.
//!
//! Full and already-decided boards are reported as explicit outcomes, not
//! errors; a search that produces no candidate despite legal moves is an
//! internal-invariant violation and surfaces as [`EngineError::NoCandidateMove`].
//!
//! # Example
//!
//! ```
//! use mnk::{Board, Coord, Engine, MoveOutcome};
//!
//! let mut board = Board::parse("XX-\nOO-\n---", 'X', 'O').unwrap();
//! let mut engine = Engine::new();
//!
//! // The top row wins this turn; no search is needed.
//! let outcome = engine.choose(&mut board, 3).unwrap();
//! assert_eq!(outcome, MoveOutcome::Move(Coord::new(0, 2)));
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Cell, Coord};
use crate::error::EngineError;
use crate::eval::{classify, Outcome};
use crate::rules::completes_run;
use crate::search::{Searcher, WIN_SCORE};

/// Default lookahead beyond the immediate move, in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// What the engine decided for the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play this coordinate.
    Move(Coord),
    /// The board has no empty cell; there is nothing to play.
    NoLegalMove,
    /// A completed run is already on the board; the game is over.
    AlreadyDecided,
}

/// Which stage of the pipeline produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// A one-move win found by the shortcut scan.
    ImmediateWin,
    /// Regular alpha-beta search result.
    AlphaBeta,
}

/// Result of a move decision with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// The decision for this position.
    pub outcome: MoveOutcome,
    /// Score of the chosen move, from Own's perspective.
    pub score: i32,
    /// Stage that produced the move.
    pub kind: SearchKind,
    /// Time taken in milliseconds.
    pub time_ms: u64,
    /// Nodes visited by the search (0 for shortcut results).
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(at: Coord, time_ms: u64) -> Self {
        Self {
            outcome: MoveOutcome::Move(at),
            score: WIN_SCORE,
            kind: SearchKind::ImmediateWin,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn without_move(outcome: MoveOutcome, time_ms: u64) -> Self {
        Self {
            outcome,
            score: 0,
            kind: SearchKind::AlphaBeta,
            time_ms,
            nodes: 0,
        }
    }
}

/// The m,n,k playing engine.
///
/// Holds only the configured search depth; every decision is computed
/// from scratch for the board it is handed, and nothing persists between
/// calls. The board is borrowed mutably for the duration of one decision
/// and returned bit-identical.
pub struct Engine {
    searcher: Searcher,
    depth: u32,
}

impl Engine {
    /// Create an engine with the default search depth.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine searching `depth` plies beyond each candidate move.
    ///
    /// Deeper values trade latency for strength.
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Self {
            searcher: Searcher::new(depth),
            depth,
        }
    }

    /// Configured search depth.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Decide Own's move for the given position.
    ///
    /// Convenience wrapper around [`Engine::choose_with_stats`] returning
    /// only the outcome.
    pub fn choose(&mut self, board: &mut Board, target: usize) -> Result<MoveOutcome, EngineError> {
        self.choose_with_stats(board, target).map(|r| r.outcome)
    }

    /// Decide Own's move, with timing and node counts.
    ///
    /// `target` is the run length K required to win; it must be at least 1.
    /// Full boards yield [`MoveOutcome::NoLegalMove`] and positions already
    /// containing a completed run yield [`MoveOutcome::AlreadyDecided`] —
    /// both are results the caller must check for, not errors.
    pub fn choose_with_stats(
        &mut self,
        board: &mut Board,
        target: usize,
    ) -> Result<MoveResult, EngineError> {
        if target == 0 {
            return Err(EngineError::InvalidTarget);
        }
        let start = Instant::now();

        let moves = board.legal_moves();
        if moves.is_empty() {
            return Ok(MoveResult::without_move(
                MoveOutcome::NoLegalMove,
                elapsed_ms(start),
            ));
        }
        if classify(board, target) != Outcome::Ongoing {
            return Ok(MoveResult::without_move(
                MoveOutcome::AlreadyDecided,
                elapsed_ms(start),
            ));
        }

        // Stage 1: take a one-move win without searching.
        for &mv in &moves {
            board.place(mv, Cell::Own);
            let wins = completes_run(board, mv, Cell::Own, target);
            board.clear(mv);
            if wins {
                debug!(row = mv.row, col = mv.col, "immediate winning move");
                return Ok(MoveResult::immediate_win(mv, elapsed_ms(start)));
            }
        }

        // Stage 2: score every move by minimax.
        let result = self.searcher.search(board, target);
        match result.best_move {
            Some(mv) => {
                debug!(
                    row = mv.row,
                    col = mv.col,
                    score = result.score,
                    nodes = result.nodes,
                    cutoffs = result.stats.beta_cutoffs,
                    "alpha-beta move"
                );
                Ok(MoveResult {
                    outcome: MoveOutcome::Move(mv),
                    score: result.score,
                    kind: SearchKind::AlphaBeta,
                    time_ms: elapsed_ms(start),
                    nodes: result.nodes,
                })
            }
            // Legal moves existed but none was scored; never substitute a
            // default coordinate for a defect.
            None => Err(EngineError::NoCandidateMove),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
