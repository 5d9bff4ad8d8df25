//! Per-family cooldown timer.
//!
//! Each gesture family owns one timer. A timer is ARMED until it fires and
//! then COOLING until `duration` seconds have passed since the fire time.

/// Minimum interval between two firings of the same gesture family
#[derive(Debug, Clone, Copy)]
pub struct CooldownTimer {
    duration: f64,
    last_fire_time: Option<f64>,
}

impl CooldownTimer {
    /// Create an armed timer
    #[must_use]
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            last_fire_time: None,
        }
    }

    /// True while a previous fire is less than `duration` seconds old
    #[must_use]
    pub fn is_cooling(&self, now: f64) -> bool {
        self.last_fire_time
            .is_some_and(|last| now - last < self.duration)
    }

    /// Record a fire at `now`
    pub fn fire(&mut self, now: f64) {
        self.last_fire_time = Some(now);
    }

    /// Seconds until the timer re-arms, never negative
    #[must_use]
    pub fn remaining(&self, now: f64) -> f64 {
        self.last_fire_time
            .map_or(0.0, |last| (self.duration - (now - last)).max(0.0))
    }

    /// Forget the last fire
    pub fn reset(&mut self) {
        self.last_fire_time = None;
    }

    /// Time of the last fire, if any
    #[must_use]
    pub const fn last_fire_time(&self) -> Option<f64> {
        self.last_fire_time
    }

    /// Cooldown length in seconds
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }
}
