//! Depth-limited minimax / alpha-beta search under a cooperative deadline.
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod alphabeta;
pub mod eval;
pub mod iterative;
pub mod time;

pub use alphabeta::{SearchContext, Searcher};
pub use eval::{Evaluator, Heuristic};
pub use iterative::SearchReport;
pub use time::{Countdown, Deadline, Flow, Governor, Unlimited};

/// Precondition violations at the search boundary. Timeouts are never errors.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u32),
    #[error("invalid search window: alpha {alpha} > beta {beta}")]
    InvalidWindow { alpha: f64, beta: f64 },
    #[error("time threshold {name} must be finite and non-negative, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
    #[error("node floor {node_floor_ms} ms is below the turn threshold {turn_threshold_ms} ms")]
    FloorBelowThreshold { node_floor_ms: f64, turn_threshold_ms: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    Minimax,
    #[default]
    AlphaBeta,
}

/// Score and chosen move of one search call. `best_move == None` is the "no move" sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult<M> {
    pub score: f64,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    /// Value of a side that has no legal move: -inf when maximizing, +inf when minimizing.
    pub fn no_moves(maximizing: bool) -> Self {
        Self { score: if maximizing { f64::NEG_INFINITY } else { f64::INFINITY }, best_move: None }
    }
}
