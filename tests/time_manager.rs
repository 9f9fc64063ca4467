use isobot::board::{Board, Cell, GameState, PlayerId};
use isobot::search::{Countdown, Deadline, SearchMethod};
use isobot::{Agent, AgentConfig};
use std::cell::Cell as StdCell;
use std::time::{Duration, Instant};

/// Reports plenty of time for the first `budget` queries, then zero.
struct QueryBudget {
    budget: u64,
    queries: StdCell<u64>,
}

impl QueryBudget {
    fn new(budget: u64) -> Self { Self { budget, queries: StdCell::new(0) } }
    fn queries(&self) -> u64 { self.queries.get() }
}

impl Deadline for QueryBudget {
    fn remaining_ms(&self) -> f64 {
        let n = self.queries.get() + 1;
        self.queries.set(n);
        if n <= self.budget { 1_000.0 } else { 0.0 }
    }
}

fn midgame() -> Board {
    let mut b = Board::new(7, 7);
    b.place(PlayerId::One, Cell::new(3, 3)).unwrap();
    b.place(PlayerId::Two, Cell::new(1, 5)).unwrap();
    b
}

#[test]
fn any_query_budget_terminates_with_a_legal_move_or_sentinel() {
    let b = midgame();
    let legal = b.active_moves();
    for method in [SearchMethod::AlphaBeta, SearchMethod::Minimax] {
        let cfg = AgentConfig { method, max_depth: 64, ..AgentConfig::default() };
        let agent: Agent<Board> = Agent::from_config(cfg).unwrap();
        for budget in (0..60).chain([100, 500, 2_000]) {
            let clock = QueryBudget::new(budget);
            let report = agent.search(&b, &clock).unwrap();
            assert!(report.timed_out, "budget {budget} should run out");
            match report.best_move() {
                Some(m) => assert!(legal.contains(&m), "illegal move {m} for budget {budget}"),
                // Only possible when depth 1 never scored a single child.
                None => assert!(budget <= 2, "no move with budget {budget}"),
            }
            // The clock is never polled again once it reports zero.
            assert!(clock.queries() <= budget + 1, "{} queries for budget {budget}", clock.queries());
        }
    }
}

#[test]
fn zero_budget_yields_the_sentinel() {
    let agent: Agent<Board> = Agent::from_config(AgentConfig::default()).unwrap();
    let clock = QueryBudget::new(0);
    assert_eq!(agent.get_move(&midgame(), &clock).unwrap(), None);
}

#[test]
fn wall_clock_turn_returns_before_deadline() {
    let agent: Agent<Board> = Agent::from_config(AgentConfig::default()).unwrap();
    let b = midgame();
    for ms in [20u64, 50, 150] {
        let clock = Countdown::new(Duration::from_millis(ms));
        let t0 = Instant::now();
        let report = agent.search(&b, &clock).unwrap();
        assert!(clock.remaining_ms() > 0.0, "overran a {ms} ms budget by {:.2} ms", -clock.remaining_ms());
        assert!(t0.elapsed() < Duration::from_millis(ms));
        assert!(report.best_move().is_some());
        assert!(report.depth_completed >= 1);
    }
}

#[test]
fn fixed_depth_search_also_honours_the_clock() {
    let cfg = AgentConfig::fixed_depth(SearchMethod::Minimax, 12);
    let agent: Agent<Board> = Agent::from_config(cfg).unwrap();
    let clock = Countdown::new(Duration::from_millis(30));
    let report = agent.search(&midgame(), &clock).unwrap();
    assert!(clock.remaining_ms() > 0.0);
    assert!(report.timed_out);
    assert_eq!(report.depth_completed, 0);
    assert!(report.best_move().is_some());
}

#[test]
fn iterative_search_keeps_the_node_floor_margin() {
    use isobot::search::{Governor, SearchContext, SearchError, Searcher};
    use isobot::search::eval::MobilityEval;

    let b = midgame();
    let s = Searcher::new(MobilityEval);
    let clock = Countdown::new(Duration::from_millis(40));
    assert!(matches!(Governor::new(&clock, 10.0, 0.0), Err(SearchError::FloorBelowThreshold { .. })));

    let mut ctx = SearchContext::new(b.active_player(), Governor::new(&clock, 10.0, 10.0).unwrap());
    let report = s.iterative_search(&mut ctx, &b, SearchMethod::AlphaBeta, true, 64).unwrap();
    assert!(clock.remaining_ms() > 0.0, "overran by {:.3} ms", -clock.remaining_ms());
    assert!(report.best_move().is_some());
}
