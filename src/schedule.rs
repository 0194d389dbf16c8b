// src/schedule.rs

//! Fixed-period tick sources polled by the host event loop.

use std::time::{Duration, Instant};

/// A periodic task that re-arms itself each time it fires.
///
/// The next deadline is measured from the moment the task fired, so a late
/// poll delays every following tick instead of causing a burst of catch-up
/// ticks.
#[derive(Debug, Clone)]
pub struct PeriodicTask {
    name: &'static str,
    period: Duration,
    next_due: Instant,
    fired: u64,
}

impl PeriodicTask {
    /// A task that is due immediately at `now`.
    pub fn new(name: &'static str, period: Duration, now: Instant) -> Self {
        Self { name, period, next_due: now, fired: 0 }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of times the task has fired.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Returns `true` if the task is due, re-arming it for `now + period`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        self.fired += 1;
        log::trace!("{} tick #{}", self.name, self.fired);
        true
    }

    /// Time left until the task is next due (zero if already due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
