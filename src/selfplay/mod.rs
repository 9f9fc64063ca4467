use std::time::Duration;
use anyhow::Context;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use crate::agent::Agent;
use crate::board::{Board, Cell, GameState, PlayerId};
use crate::search::{Countdown, Deadline, Evaluator};

/// Anything that can choose a move on an Isolation board within a deadline.
pub trait MovePicker {
    fn pick(&mut self, board: &Board, deadline: &dyn Deadline) -> anyhow::Result<Option<Cell>>;
}

impl<E: Evaluator<Board>> MovePicker for Agent<Board, E> {
    fn pick(&mut self, board: &Board, deadline: &dyn Deadline) -> anyhow::Result<Option<Cell>> {
        self.get_move(board, deadline).context("agent search failed")
    }
}

/// Uniformly random legal move; deterministic for a given seed.
pub struct RandomPlayer {
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self { Self { rng: SmallRng::seed_from_u64(seed) } }
}

impl MovePicker for RandomPlayer {
    fn pick(&mut self, board: &Board, _deadline: &dyn Deadline) -> anyhow::Result<Option<Cell>> {
        let moves = board.active_moves();
        if moves.is_empty() { return Ok(None); }
        Ok(Some(moves[self.rng.gen_range(0..moves.len())]))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Side to move had no legal move.
    NoMoves,
    /// Side to move answered after its time ran out.
    Timeout,
    /// Side to move returned no move or an illegal one while legal moves existed.
    Forfeit,
    MaxPlies,
}

#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    pub moves: Vec<Cell>,
    pub winner: Option<PlayerId>,
    pub reason: EndReason,
}

#[derive(Clone, Copy, Debug)]
pub struct MatchParams {
    pub time_limit: Duration,
    pub max_plies: usize,
}

/// Plays `start` to the end. `players[0]` moves for player 1, `players[1]` for player 2.
/// Returns the record and the final board.
pub fn play_game(start: Board, players: [&mut dyn MovePicker; 2], params: &MatchParams) -> anyhow::Result<(GameRecord, Board)> {
    let [p1, p2] = players;
    let mut board = start;
    let mut moves = Vec::new();
    let (winner, reason) = loop {
        if moves.len() >= params.max_plies { break (None, EndReason::MaxPlies); }
        let side = board.active_player();
        let legal = board.active_moves();
        if legal.is_empty() { break (Some(side.opponent()), EndReason::NoMoves); }

        let clock = Countdown::new(params.time_limit);
        let picker: &mut dyn MovePicker = if side == PlayerId::One { &mut *p1 } else { &mut *p2 };
        let chosen = picker.pick(&board, &clock)?;
        if clock.remaining_ms() <= 0.0 {
            debug!("{} overran by {:.2} ms", side, -clock.remaining_ms());
            break (Some(side.opponent()), EndReason::Timeout);
        }
        match chosen {
            Some(c) if legal.contains(&c) => {
                board = board.forecast(c);
                moves.push(c);
            }
            other => {
                debug!("{} forfeits with {:?}", side, other);
                break (Some(side.opponent()), EndReason::Forfeit);
            }
        }
    };
    info!("game over after {} plies: {:?} ({:?})", moves.len(), winner, reason);
    Ok((GameRecord { moves, winner, reason }, board))
}
