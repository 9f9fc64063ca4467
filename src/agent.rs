//! Per-turn decision procedure: opening book, then fixed-depth or iterative search.
use log::{debug, info, warn};
use crate::board::GameState;
use crate::config::{AgentConfig, ConfigError};
use crate::opening::OpeningBook;
use crate::search::{
    Deadline, Evaluator, Flow, Governor, Heuristic, SearchContext, SearchError, SearchReport, SearchResult, Searcher,
};

pub struct Agent<S: GameState, E = Heuristic> {
    config: AgentConfig,
    searcher: Searcher<E>,
    opening: Option<Box<dyn OpeningBook<S>>>,
}

impl<S: GameState> Agent<S, Heuristic> {
    /// Agent scoring leaves with the heuristic named in `config`.
    pub fn from_config(config: AgentConfig) -> Result<Self, ConfigError> {
        let heuristic = config.heuristic;
        Self::new(config, heuristic)
    }
}

impl<S: GameState, E: Evaluator<S>> Agent<S, E> {
    pub fn new(config: AgentConfig, evaluator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, searcher: Searcher::new(evaluator), opening: None })
    }

    pub fn with_opening_book(mut self, book: impl OpeningBook<S> + 'static) -> Self {
        self.opening = Some(Box::new(book));
        self
    }

    pub fn config(&self) -> &AgentConfig { &self.config }

    /// Move to play, or `None` when the side to move has no legal move (or, under
    /// an extremely tight budget, when no depth produced a result).
    pub fn get_move(&self, state: &S, deadline: &dyn Deadline) -> Result<Option<S::Move>, SearchError> {
        Ok(self.search(state, deadline)?.best_move())
    }

    pub fn search(&self, state: &S, deadline: &dyn Deadline) -> Result<SearchReport<S::Move>, SearchError> {
        let legal = state.active_moves();
        if legal.is_empty() { return Ok(SearchReport::immediate(SearchResult::no_moves(true))); }

        let player = state.active_player();
        if self.config.use_opening_book {
            if let Some(m) = self.opening.as_ref().and_then(|book| book.lookup(state, &legal)) {
                debug!("opening book move {:?}", m);
                let score = self.searcher.evaluator().score(&state.forecast(m), player);
                return Ok(SearchReport::immediate(SearchResult { score, best_move: Some(m) }));
            }
        }

        let governor = Governor::new(deadline, self.config.timer_threshold_ms, self.config.node_floor_ms)?;
        let mut ctx = SearchContext::new(player, governor);
        let report = if self.config.iterative {
            self.searcher.iterative_search(&mut ctx, state, self.config.method, true, self.config.max_depth)?
        } else {
            self.fixed_depth(&mut ctx, state)?
        };

        match report.best_move() {
            Some(m) => info!(
                "{:?} plays {:?}: score {} depth {}/{} nodes {}{}",
                player, m, report.result.score, report.depth_completed, report.depth_attempted, report.nodes,
                if report.timed_out { " (timeout)" } else { "" }
            ),
            None => warn!("{:?} found no move before the deadline ({} legal)", player, legal.len()),
        }
        Ok(report)
    }

    fn fixed_depth(&self, ctx: &mut SearchContext<'_, S::Player>, state: &S) -> Result<SearchReport<S::Move>, SearchError> {
        let depth = self.config.search_depth;
        if ctx.governor().check_turn() == Flow::Stop {
            ctx.mark_timed_out();
            return Ok(SearchReport { timed_out: true, ..SearchReport::immediate(SearchResult::no_moves(true)) });
        }
        let r = self.searcher.search(ctx, state, self.config.method, depth, true)?;
        Ok(SearchReport {
            result: r.unwrap_or_else(|| SearchResult::no_moves(true)),
            depth_attempted: depth,
            depth_completed: if ctx.timed_out() { 0 } else { depth },
            nodes: ctx.nodes(),
            timed_out: ctx.timed_out(),
        })
    }
}
