use log::debug;
use crate::board::GameState;
use crate::search::alphabeta::{SearchContext, Searcher};
use crate::search::eval::Evaluator;
use crate::search::time::Flow;
use crate::search::{SearchError, SearchMethod, SearchResult};

/// Outcome of one turn's search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchReport<M> {
    pub result: SearchResult<M>,
    /// Deepest iteration started.
    pub depth_attempted: u32,
    /// Deepest iteration that finished without hitting the clock.
    pub depth_completed: u32,
    pub nodes: u64,
    pub timed_out: bool,
}

impl<M: Copy> SearchReport<M> {
    pub fn best_move(&self) -> Option<M> { self.result.best_move }

    pub(crate) fn immediate(result: SearchResult<M>) -> Self {
        Self { result, depth_attempted: 0, depth_completed: 0, nodes: 0, timed_out: false }
    }
}

impl<E> Searcher<E> {
    /// Iterative deepening: searches depth 1, 2, ... up to `max_depth`, keeping the
    /// most recent result returned, until the per-turn threshold is crossed. A
    /// depth cut short by the per-node floor still contributes its partial result.
    /// If nothing was ever returned the result carries the "no move" sentinel.
    ///
    /// Deepening also ends as soon as a completed depth scores +inf or -inf: the
    /// proven result is kept, even though a deeper pass might name a different
    /// move with the same value.
    pub fn iterative_search<S>(&self, ctx: &mut SearchContext<'_, S::Player>, state: &S, method: SearchMethod, maximizing: bool, max_depth: u32)
        -> Result<SearchReport<S::Move>, SearchError>
    where S: GameState, E: Evaluator<S> {
        if max_depth == 0 { return Err(SearchError::InvalidDepth(max_depth)); }
        let mut best: Option<SearchResult<S::Move>> = None;
        let mut depth_attempted = 0;
        let mut depth_completed = 0;
        for depth in 1..=max_depth {
            if ctx.governor().check_turn() == Flow::Stop { ctx.mark_timed_out(); break; }
            depth_attempted = depth;
            if let Some(r) = self.search(ctx, state, method, depth, maximizing)? { best = Some(r); }
            if ctx.timed_out() {
                debug!("depth {} cut short after {} nodes", depth, ctx.nodes());
                break;
            }
            depth_completed = depth;
            if let Some(r) = &best {
                debug!("depth {} complete: score {} move {:?} nodes {}", depth, r.score, r.best_move, ctx.nodes());
                // A proven win or loss cannot change with more depth.
                if r.score.is_infinite() { break; }
            }
        }
        Ok(SearchReport {
            result: best.unwrap_or_else(|| SearchResult::no_moves(maximizing)),
            depth_attempted,
            depth_completed,
            nodes: ctx.nodes(),
            timed_out: ctx.timed_out(),
        })
    }
}
