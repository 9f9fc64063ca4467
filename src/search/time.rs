//! Deadline oracles and the cooperative timeout checks consulted by the search.
use std::time::{Duration, Instant};
use crate::search::SearchError;

/// Milliseconds left in the current turn. Treated as monotonically decreasing.
pub trait Deadline {
    fn remaining_ms(&self) -> f64;
}

impl<F: Fn() -> f64> Deadline for F {
    fn remaining_ms(&self) -> f64 { self() }
}

/// Wall-clock budget started at construction.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    start: Instant,
    budget: Duration,
}

impl Countdown {
    pub fn new(budget: Duration) -> Self { Self { start: Instant::now(), budget } }
    pub fn elapsed(&self) -> Duration { self.start.elapsed() }
}

impl Deadline for Countdown {
    fn remaining_ms(&self) -> f64 {
        self.budget.as_secs_f64() * 1000.0 - self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Never expires; used for fixed-depth analysis.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl Deadline for Unlimited {
    fn remaining_ms(&self) -> f64 { f64::INFINITY }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Pairs the caller's deadline with the two stop thresholds: the coarse
/// per-turn abort checked between deepening iterations and the per-node floor
/// checked before every descent or sibling evaluation.
pub struct Governor<'a> {
    deadline: &'a dyn Deadline,
    turn_threshold_ms: f64,
    node_floor_ms: f64,
}

fn check_threshold(name: &'static str, value: f64) -> Result<f64, SearchError> {
    if value.is_finite() && value >= 0.0 { Ok(value) } else { Err(SearchError::InvalidThreshold { name, value }) }
}

impl<'a> Governor<'a> {
    /// Both thresholds finite and non-negative, and the per-node floor at or
    /// above the per-turn threshold.
    pub fn new(deadline: &'a dyn Deadline, turn_threshold_ms: f64, node_floor_ms: f64) -> Result<Self, SearchError> {
        let turn_threshold_ms = check_threshold("turn_threshold_ms", turn_threshold_ms)?;
        let node_floor_ms = check_threshold("node_floor_ms", node_floor_ms)?;
        if node_floor_ms < turn_threshold_ms {
            return Err(SearchError::FloorBelowThreshold { node_floor_ms, turn_threshold_ms });
        }
        Ok(Self { deadline, turn_threshold_ms, node_floor_ms })
    }

    /// No margins: stops only once the deadline drops below zero. Meant for
    /// analysis against `Unlimited` or synthetic clocks, not for timed play.
    pub fn bare(deadline: &'a dyn Deadline) -> Self { Self { deadline, turn_threshold_ms: 0.0, node_floor_ms: 0.0 } }

    pub fn remaining_ms(&self) -> f64 { self.deadline.remaining_ms() }

    pub fn check_turn(&self) -> Flow { self.check(self.turn_threshold_ms) }

    pub fn check_node(&self) -> Flow { self.check(self.node_floor_ms) }

    // A NaN reading counts as out of time.
    fn check(&self, threshold_ms: f64) -> Flow {
        let left = self.deadline.remaining_ms();
        if left.is_nan() || left < threshold_ms { Flow::Stop } else { Flow::Continue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn closure_deadline_drives_both_thresholds() {
        let left = Cell::new(50.0);
        let clock = || left.get();
        let g = Governor::new(&clock, 10.0, 20.0).unwrap();
        assert_eq!(g.check_turn(), Flow::Continue);
        assert_eq!(g.check_node(), Flow::Continue);
        left.set(15.0);
        assert_eq!(g.check_turn(), Flow::Continue);
        assert_eq!(g.check_node(), Flow::Stop);
        left.set(5.0);
        assert_eq!(g.check_turn(), Flow::Stop);
    }

    #[test]
    fn rejects_negative_or_nan_thresholds() {
        let d = Unlimited;
        assert!(Governor::new(&d, -1.0, 0.0).is_err());
        assert!(Governor::new(&d, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_node_floor_below_turn_threshold() {
        let c = Countdown::new(Duration::from_millis(40));
        assert_eq!(
            Governor::new(&c, 10.0, 0.0).err(),
            Some(SearchError::FloorBelowThreshold { node_floor_ms: 0.0, turn_threshold_ms: 10.0 })
        );
        assert!(Governor::new(&c, 10.0, 10.0).is_ok());
    }

    #[test]
    fn nan_clock_reading_stops_both_checks() {
        let clock = || f64::NAN;
        let g = Governor::new(&clock, 10.0, 10.0).unwrap();
        assert_eq!(g.check_turn(), Flow::Stop);
        assert_eq!(g.check_node(), Flow::Stop);
        let g = Governor::bare(&clock);
        assert_eq!(g.check_node(), Flow::Stop);
    }

    #[test]
    fn countdown_goes_negative_after_budget() {
        let c = Countdown::new(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert!(c.remaining_ms() < 0.0);
    }
}
