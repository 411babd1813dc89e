//! Search algorithms for the m,n,k engine

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, WIN_SCORE};
