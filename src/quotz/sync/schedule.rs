//! Fixed-rate cadence for sync cycles with an explicit in-flight guard.
//!
//! Ticks fall on a grid anchored at construction: `anchor + k * interval`.
//! The first cycle is due immediately. A tick that comes due while a cycle is
//! running is skipped, never queued; after a slow cycle the next run lands on
//! the next grid point, so at most one fetch is in flight at any time.

use std::time::{Duration, Instant};

// Floor for the interval: `complete` walks the grid forward, so a zero step
// would never get past `now`.
const MIN_INTERVAL: Duration = Duration::from_secs(1);

pub struct SyncSchedule {
    interval: Duration,
    next_tick: Instant,
    in_flight: bool,
}

impl SyncSchedule {
    pub fn new(interval: Duration) -> Self {
        Self::new_at(interval, Instant::now())
    }

    pub fn new_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            // The anchor itself is the first tick: first run is immediate.
            next_tick: now,
            in_flight: false,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        !self.in_flight && now >= self.next_tick
    }

    /// When the next cycle should run, or `None` while one is in flight.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.in_flight {
            None
        } else {
            Some(self.next_tick)
        }
    }

    pub fn begin(&mut self, _now: Instant) {
        self.in_flight = true;
    }

    /// Mark the running cycle finished (success or failure — the next tick
    /// retries either way) and move to the first grid point after `now`.
    pub fn complete(&mut self, now: Instant) {
        self.in_flight = false;
        while self.next_tick <= now {
            self.next_tick += self.interval;
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}
