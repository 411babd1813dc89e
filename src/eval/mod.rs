//! Position evaluation
//!
//! Terminal classification ([`classify`]) and the leaf heuristic
//! ([`evaluate`]) used when the search runs out of depth.

pub mod heuristic;
pub mod position;

// Re-exports
pub use heuristic::evaluate;
pub use position::{classify, Outcome};
