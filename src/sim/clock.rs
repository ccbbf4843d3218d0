//! Virtual tick clock
//!
//! Real time arrives in irregular frame-sized chunks; the simulation moves in
//! whole ticks of `1000 / snake_speed` ms. The clock decides how many ticks
//! each update call runs and where the current tick interval started.

use serde::{Deserialize, Serialize};

/// What to do when more than one tick interval elapsed between updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickPolicy {
    /// Run a single tick and restart the interval at `now`
    #[default]
    Drop,
    /// Run up to `max_ticks` ticks, keeping the interval grid aligned
    CatchUp { max_ticks: u32 },
}

/// Tracks when the last tick fired
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickClock {
    interval_ms: f64,
    last_tick_ms: f64,
    policy: TickPolicy,
}

impl TickClock {
    /// `ticks_per_second` must be positive; non-positive speeds are clamped
    pub fn new(ticks_per_second: f32, now_ms: f64, policy: TickPolicy) -> Self {
        let speed = f64::from(ticks_per_second.max(f32::EPSILON));
        Self {
            interval_ms: 1000.0 / speed,
            last_tick_ms: now_ms,
            policy,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }

    /// Whether a full interval has elapsed since the last tick
    pub fn is_due(&self, now_ms: f64) -> bool {
        now_ms - self.last_tick_ms >= self.interval_ms
    }

    /// Maximum number of ticks a single update may run
    pub fn budget(&self) -> u32 {
        match self.policy {
            TickPolicy::Drop => 1,
            TickPolicy::CatchUp { max_ticks } => max_ticks.max(1),
        }
    }

    /// Consume one due tick, advancing the interval start.
    ///
    /// Returns false if no tick is due.
    pub fn consume(&mut self, now_ms: f64) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        match self.policy {
            TickPolicy::Drop => self.last_tick_ms = now_ms,
            TickPolicy::CatchUp { .. } => self.last_tick_ms += self.interval_ms,
        }
        true
    }

    /// Fraction of the current interval that has elapsed, clamped to [0, 1]
    pub fn progress(&self, now_ms: f64) -> f32 {
        ((now_ms - self.last_tick_ms) / self.interval_ms).clamp(0.0, 1.0) as f32
    }
}
