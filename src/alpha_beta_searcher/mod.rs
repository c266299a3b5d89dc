//! Depth-limited minimax search with alpha-beta pruning.

mod search;


use std::time::Duration;

use thiserror::Error;

use crate::evaluate::Score;

pub use search::AlphaBetaSearcher;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

/// Counters collected during the most recent search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub termination_count: usize,
    pub depth: u8,
    pub last_score: Option<Score>,
    pub last_search_duration: Option<Duration>,
}
