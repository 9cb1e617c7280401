//! Wall-clock budget for cooperative search cancellation.

use std::time::{Duration, Instant};

/// A monotonic deadline over a fixed time budget.
///
/// The search samples this at the top of every candidate branch; once the
/// budget has elapsed the whole recursion unwinds. Built on [`Instant`],
/// so calendar clock adjustments cannot move it. A zero budget counts as
/// expired from the start.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use sightseer::solver::Deadline;
///
/// let deadline = Deadline::start(Duration::from_secs(60));
/// assert!(!deadline.expired());
///
/// let spent = Deadline::start(Duration::ZERO);
/// assert!(spent.expired());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    /// Starts a deadline running from now with the given budget.
    pub fn start(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// Returns `true` once the budget has elapsed.
    pub fn expired(&self) -> bool {
        self.started.elapsed() >= self.budget
    }

    /// Time left on the budget; zero once expired.
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_is_expired() {
        let deadline = Deadline::start(Duration::ZERO);
        assert!(deadline.expired());
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_generous_budget_is_not_expired() {
        let deadline = Deadline::start(Duration::from_secs(3600));
        assert!(!deadline.expired());
        assert!(deadline.remaining() <= Duration::from_secs(3600));
        assert!(deadline.remaining() > Duration::from_secs(3599));
    }

    #[test]
    fn test_expires_after_budget_elapses() {
        let deadline = Deadline::start(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(20));
        assert!(deadline.expired());
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }
}
