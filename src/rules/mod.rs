//! Win-condition rules for k-in-a-row

pub mod win;

// Re-exports for convenient access
pub use win::{completes_run, DIRECTIONS};
