use log::debug;

use super::GestureEvent;
use crate::{
    config::SwipeConfig,
    cooldown::CooldownTimer,
    motion_history::MotionHistory,
};

/// Swipe classifier working on the endpoints of the motion history
///
/// Only the oldest and newest samples are compared; the window bounds how
/// much motion is considered, not the shape of the path.
#[derive(Debug, Clone)]
pub struct SwipeClassifier {
    min_samples: usize,
    min_elapsed_s: f64,
    min_distance: f64,
    min_velocity: f64,
    directionality_ratio: f64,
    cooldown: CooldownTimer,
}

impl SwipeClassifier {
    /// Create a classifier with the default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&SwipeConfig::default())
    }

    /// Create a classifier from configured thresholds
    #[must_use]
    pub fn from_config(config: &SwipeConfig) -> Self {
        Self {
            min_samples: config.min_samples,
            min_elapsed_s: config.min_elapsed_s,
            min_distance: config.min_distance,
            min_velocity: config.min_velocity,
            directionality_ratio: config.directionality_ratio,
            cooldown: CooldownTimer::new(config.cooldown_s),
        }
    }

    /// Evaluate the history for a swipe at time `now`
    ///
    /// On success the cooldown starts and `history` is cleared, so the hand
    /// returning to its start position has no evidence left to fire on.
    pub fn check(&mut self, history: &mut MotionHistory, now: f64) -> Option<GestureEvent> {
        if self.cooldown.is_cooling(now) || history.size() < self.min_samples {
            return None;
        }

        let (first, last) = (history.oldest()?, history.newest()?);
        let dt = last.timestamp - first.timestamp;
        if dt < self.min_elapsed_s {
            return None;
        }

        let dx = last.x - first.x;
        let dy = last.y - first.y;
        let dist = dx.hypot(dy);
        if dist < self.min_distance || dist / dt < self.min_velocity {
            return None;
        }

        let direction = classify_displacement(dx, dy, self.directionality_ratio)?;
        debug!(
            "Swipe {} fired: dist={:.3} velocity={:.3} over {} samples",
            direction,
            dist,
            dist / dt,
            history.size()
        );

        self.cooldown.fire(now);
        history.clear();
        Some(direction)
    }

    /// Seconds until another swipe may fire
    #[must_use]
    pub fn cooldown_remaining(&self, now: f64) -> f64 {
        self.cooldown.remaining(now)
    }

    /// Re-arm the cooldown
    pub fn reset(&mut self) {
        self.cooldown.reset();
    }
}

impl Default for SwipeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction of a net displacement, if one axis dominates
///
/// The horizontal axis is checked first whenever `|dx| >= |dy|`, so an exact
/// diagonal is judged horizontally. Zero displacement yields `None`.
#[must_use]
pub fn classify_displacement(dx: f64, dy: f64, ratio: f64) -> Option<GestureEvent> {
    let (adx, ady) = (dx.abs(), dy.abs());
    let total = adx + ady;
    if total == 0.0 {
        return None;
    }

    if adx >= ady {
        if adx / total < ratio {
            return None;
        }
        Some(if dx > 0.0 { GestureEvent::Right } else { GestureEvent::Left })
    } else {
        if ady / total < ratio {
            return None;
        }
        Some(if dy > 0.0 { GestureEvent::Down } else { GestureEvent::Up })
    }
}
