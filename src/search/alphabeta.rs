use log::trace;
use crate::board::GameState;
use crate::search::eval::Evaluator;
use crate::search::time::{Flow, Governor};
use crate::search::{SearchError, SearchMethod, SearchResult};

/// Per-turn search state: the player every leaf score is oriented to, the
/// timeout governor, and counters. Created for one `get_move` call and dropped
/// when it returns.
pub struct SearchContext<'a, P> {
    player: P,
    governor: Governor<'a>,
    pub(crate) nodes: u64,
    timed_out: bool,
}

impl<'a, P: Copy> SearchContext<'a, P> {
    pub fn new(player: P, governor: Governor<'a>) -> Self {
        Self { player, governor, nodes: 0, timed_out: false }
    }

    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn governor(&self) -> &Governor<'a> { &self.governor }

    /// True once any node stopped scanning because the per-node floor was crossed.
    pub fn timed_out(&self) -> bool { self.timed_out }

    pub(crate) fn mark_timed_out(&mut self) { self.timed_out = true; }

    fn out_of_time(&mut self) -> bool {
        if self.timed_out { return true; }
        if self.governor.check_node() == Flow::Stop { self.timed_out = true; }
        self.timed_out
    }
}

/// Depth-limited minimax and alpha-beta over any `GameState`, scoring leaves with `E`.
#[derive(Clone, Debug, Default)]
pub struct Searcher<E> {
    evaluator: E,
}

impl<E> Searcher<E> {
    pub fn new(evaluator: E) -> Self { Self { evaluator } }
    pub fn evaluator(&self) -> &E { &self.evaluator }

    /// Unpruned minimax to `depth` plies. `Ok(None)` means the deadline expired
    /// before any move at the root was scored.
    pub fn minimax<S>(&self, ctx: &mut SearchContext<'_, S::Player>, state: &S, depth: u32, maximizing: bool)
        -> Result<Option<SearchResult<S::Move>>, SearchError>
    where S: GameState, E: Evaluator<S> {
        if depth == 0 { return Err(SearchError::InvalidDepth(depth)); }
        Ok(self.search_node(ctx, state, depth, maximizing, f64::NEG_INFINITY, f64::INFINITY, false))
    }

    /// Alpha-beta to `depth` plies inside the window `[alpha, beta]`. Returns the
    /// same score and move as `minimax` for the full window.
    pub fn alphabeta<S>(&self, ctx: &mut SearchContext<'_, S::Player>, state: &S, depth: u32, maximizing: bool, alpha: f64, beta: f64)
        -> Result<Option<SearchResult<S::Move>>, SearchError>
    where S: GameState, E: Evaluator<S> {
        if depth == 0 { return Err(SearchError::InvalidDepth(depth)); }
        if alpha.is_nan() || beta.is_nan() || alpha > beta { return Err(SearchError::InvalidWindow { alpha, beta }); }
        Ok(self.search_node(ctx, state, depth, maximizing, alpha, beta, true))
    }

    pub fn search<S>(&self, ctx: &mut SearchContext<'_, S::Player>, state: &S, method: SearchMethod, depth: u32, maximizing: bool)
        -> Result<Option<SearchResult<S::Move>>, SearchError>
    where S: GameState, E: Evaluator<S> {
        match method {
            SearchMethod::Minimax => self.minimax(ctx, state, depth, maximizing),
            SearchMethod::AlphaBeta => self.alphabeta(ctx, state, depth, maximizing, f64::NEG_INFINITY, f64::INFINITY),
        }
    }

    // Shared recursion. With `prune == false` the window stays at its initial
    // (-inf, +inf) and no sibling is ever skipped, which is plain minimax.
    #[allow(clippy::too_many_arguments)]
    fn search_node<S>(&self, ctx: &mut SearchContext<'_, S::Player>, state: &S, depth: u32, maximizing: bool, mut alpha: f64, mut beta: f64, prune: bool)
        -> Option<SearchResult<S::Move>>
    where S: GameState, E: Evaluator<S> {
        ctx.nodes += 1;
        let moves = state.active_moves();
        if moves.is_empty() { return Some(SearchResult::no_moves(maximizing)); }
        if depth <= 1 { return self.scan_leaves(ctx, state, &moves, maximizing); }

        let mut value = if maximizing { alpha } else { beta };
        let mut best_move = None;
        let mut first = None;
        for m in moves {
            if ctx.out_of_time() { break; }
            let child = state.forecast(m);
            let Some(r) = self.search_node(ctx, &child, depth - 1, !maximizing, alpha, beta, prune) else { break; };
            first.get_or_insert(m);
            let improved = if maximizing { r.score > value } else { r.score < value };
            if improved {
                value = r.score;
                best_move = Some(m);
                if prune {
                    if maximizing { alpha = alpha.max(value); } else { beta = beta.min(value); }
                }
            }
            if prune && beta <= alpha {
                trace!("cutoff at depth {} after {:?}", depth, m);
                break;
            }
        }
        // Nothing scored before the clock ran out: no result at this node.
        let first = first?;
        Some(SearchResult { score: value, best_move: best_move.or(Some(first)) })
    }

    // Horizon: score every child for the fixed root player and keep the first extremal one.
    fn scan_leaves<S>(&self, ctx: &mut SearchContext<'_, S::Player>, state: &S, moves: &[S::Move], maximizing: bool)
        -> Option<SearchResult<S::Move>>
    where S: GameState, E: Evaluator<S> {
        let mut value = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        let mut best_move = None;
        let mut first = None;
        for &m in moves {
            if ctx.out_of_time() { break; }
            ctx.nodes += 1;
            let score = self.evaluator.score(&state.forecast(m), ctx.player);
            first.get_or_insert(m);
            let improved = if maximizing { score > value } else { score < value };
            if improved { value = score; best_move = Some(m); }
        }
        let first = first?;
        Some(SearchResult { score: value, best_move: best_move.or(Some(first)) })
    }
}
