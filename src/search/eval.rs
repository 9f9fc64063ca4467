use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::board::GameState;

/// Scores a state from the point of view of `player`; higher is better for `player`.
/// Called only on leaves of the search tree.
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: S::Player) -> f64;
}

impl<S: GameState, F: Fn(&S, S::Player) -> f64> Evaluator<S> for F {
    fn score(&self, state: &S, player: S::Player) -> f64 { self(state, player) }
}

fn opponent_of<S: GameState>(state: &S, player: S::Player) -> S::Player {
    if state.active_player() == player { state.inactive_player() } else { state.active_player() }
}

// +inf / -inf once the side to move is stuck, None while the game is open.
fn decided<S: GameState>(state: &S, player: S::Player) -> Option<f64> {
    if !state.active_moves().is_empty() { return None; }
    Some(if state.active_player() == player { f64::NEG_INFINITY } else { f64::INFINITY })
}

/// Own mobility minus opponent mobility.
#[derive(Clone, Copy, Debug, Default)]
pub struct MobilityEval;

impl<S: GameState> Evaluator<S> for MobilityEval {
    fn score(&self, state: &S, player: S::Player) -> f64 {
        if let Some(v) = decided(state, player) { return v; }
        let own = state.legal_moves(player).len() as f64;
        let opp = state.legal_moves(opponent_of(state, player)).len() as f64;
        own - opp
    }
}

/// Own mobility minus `weight` times opponent mobility; weights above 1 play more aggressively.
#[derive(Clone, Copy, Debug)]
pub struct WeightedMobilityEval {
    pub weight: f64,
}

impl<S: GameState> Evaluator<S> for WeightedMobilityEval {
    fn score(&self, state: &S, player: S::Player) -> f64 {
        if let Some(v) = decided(state, player) { return v; }
        let own = state.legal_moves(player).len() as f64;
        let opp = state.legal_moves(opponent_of(state, player)).len() as f64;
        own - self.weight * opp
    }
}

/// Own mobility only.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenMoveEval;

impl<S: GameState> Evaluator<S> for OpenMoveEval {
    fn score(&self, state: &S, player: S::Player) -> f64 {
        if let Some(v) = decided(state, player) { return v; }
        state.legal_moves(player).len() as f64
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullEval;

impl<S: GameState> Evaluator<S> for NullEval {
    fn score(&self, _state: &S, _player: S::Player) -> f64 { 0.0 }
}

/// Evaluator selectable from configuration or the command line.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Heuristic {
    #[default]
    Mobility,
    Weighted { weight: f64 },
    OpenMove,
    Null,
}

impl<S: GameState> Evaluator<S> for Heuristic {
    fn score(&self, state: &S, player: S::Player) -> f64 {
        match *self {
            Heuristic::Mobility => MobilityEval.score(state, player),
            Heuristic::Weighted { weight } => WeightedMobilityEval { weight }.score(state, player),
            Heuristic::OpenMove => OpenMoveEval.score(state, player),
            Heuristic::Null => NullEval.score(state, player),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    // "mobility", "open_move", "null" or "weighted:<w>"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobility" => Ok(Heuristic::Mobility),
            "open_move" | "open" => Ok(Heuristic::OpenMove),
            "null" => Ok(Heuristic::Null),
            _ => {
                let w = s.strip_prefix("weighted:").ok_or_else(|| format!("unknown heuristic: {s}"))?;
                let weight = w.parse::<f64>().map_err(|e| format!("bad weight {w:?}: {e}"))?;
                Ok(Heuristic::Weighted { weight })
            }
        }
    }
}
