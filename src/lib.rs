//! Generalized m,n,k-in-a-row playing engine
//!
//! An automated player for tic-tac-toe generalized to an N x N board
//! requiring K consecutive marks: given a board snapshot and the target
//! run length, the engine selects one move. It is pure in-process
//! computation — fetching game state, posting moves, and any other
//! transport concern belongs to the caller.
//!
//! # Architecture
//!
//! - [`board`]: N x N grid of Own/Opponent/Empty cells with scoped
//!   place/clear mutation and text decoding
//! - [`rules`]: run detection around a just-placed mark (4 axes)
//! - [`eval`]: terminal classification and the material leaf heuristic
//! - [`search`]: fixed-depth minimax with alpha-beta pruning
//! - [`engine`]: move selection with an immediate-win shortcut
//! - [`error`]: fail-fast rejection of malformed input
//!
//! # Quick Start
//!
//! ```
//! use mnk::{Board, Coord, Engine, MoveOutcome};
//!
//! // Own plays 'X'; the top row can be completed this turn.
//! let mut board = Board::parse("XX-\nOO-\n---", 'X', 'O').unwrap();
//! let mut engine = Engine::new();
//!
//! match engine.choose(&mut board, 3).unwrap() {
//!     MoveOutcome::Move(at) => assert_eq!(at, Coord::new(0, 2)),
//!     other => panic!("expected a move, got {other:?}"),
//! }
//! ```
//!
//! # Move Selection
//!
//! Each decision runs two stages:
//! 1. Immediate winning move (no search)
//! 2. Alpha-beta search at a fixed depth (default 3 plies beyond the
//!    candidate move), ties broken to the first move in row-major order
//!
//! The board is borrowed mutably during a decision and handed back
//! bit-identical; nothing persists between calls.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Coord};
pub use engine::{Engine, MoveOutcome, MoveResult, SearchKind, DEFAULT_DEPTH};
pub use error::EngineError;
