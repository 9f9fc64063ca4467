//! Agent configuration, loadable from JSON.
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::search::{Heuristic, SearchMethod};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Plies searched when `iterative` is off.
    pub search_depth: u32,
    pub iterative: bool,
    pub method: SearchMethod,
    pub heuristic: Heuristic,
    /// Per-turn abort: no new deepening iteration starts below this many ms.
    pub timer_threshold_ms: f64,
    /// Per-node floor: nodes stop scanning siblings below this many ms.
    pub node_floor_ms: f64,
    /// Ceiling for iterative deepening.
    pub max_depth: u32,
    pub use_opening_book: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            iterative: true,
            method: SearchMethod::AlphaBeta,
            heuristic: Heuristic::Mobility,
            timer_threshold_ms: 10.0,
            node_floor_ms: 10.0,
            max_depth: 64,
            use_opening_book: true,
        }
    }
}

impl AgentConfig {
    pub fn fixed_depth(method: SearchMethod, depth: u32) -> Self {
        Self { search_depth: depth, iterative: false, method, use_opening_book: false, ..Self::default() }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: AgentConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 { return Err(ConfigError::Invalid("search_depth must be at least 1".into())); }
        if self.max_depth == 0 { return Err(ConfigError::Invalid("max_depth must be at least 1".into())); }
        for (name, v) in [("timer_threshold_ms", self.timer_threshold_ms), ("node_floor_ms", self.node_floor_ms)] {
            if !v.is_finite() || v < 0.0 { return Err(ConfigError::Invalid(format!("{name} must be finite and non-negative, got {v}"))); }
        }
        // Nodes must stop no later than the driver would, or the turn margin is lost.
        if self.node_floor_ms < self.timer_threshold_ms {
            return Err(ConfigError::Invalid(format!(
                "node_floor_ms ({}) must not be below timer_threshold_ms ({})", self.node_floor_ms, self.timer_threshold_ms
            )));
        }
        Ok(())
    }
}
