use log::debug;

use crate::{
    config::ConfirmConfig,
    constants::{FINGER_TIP_PIP_PAIRS, THUMB_MCP, THUMB_TIP},
    cooldown::CooldownTimer,
    landmarks::LandmarkSnapshot,
};

/// Thumbs-up classifier: thumb raised, the other four fingers curled
///
/// Works on one frame's static pose and ignores the motion history.
#[derive(Debug, Clone)]
pub struct ConfirmClassifier {
    thumb_rise_min: f64,
    cooldown: CooldownTimer,
}

impl ConfirmClassifier {
    /// Create a classifier with the default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&ConfirmConfig::default())
    }

    /// Create a classifier from configured thresholds
    #[must_use]
    pub fn from_config(config: &ConfirmConfig) -> Self {
        Self {
            thumb_rise_min: config.thumb_rise_min,
            cooldown: CooldownTimer::new(config.cooldown_s),
        }
    }

    /// True if the frame shows the confirm pose and the cooldown allows it to fire
    pub fn check(&mut self, snapshot: &LandmarkSnapshot, now: f64) -> bool {
        if self.cooldown.is_cooling(now) || !self.matches_pose(snapshot) {
            return false;
        }

        debug!("Confirm fired at {now:.3}");
        self.cooldown.fire(now);
        true
    }

    /// Pose test alone, without touching the cooldown
    #[must_use]
    pub fn matches_pose(&self, snapshot: &LandmarkSnapshot) -> bool {
        // y grows downward, so a raised thumb tip has the smaller y
        let rise = snapshot.landmark(THUMB_MCP).y - snapshot.landmark(THUMB_TIP).y;
        if rise <= self.thumb_rise_min {
            return false;
        }

        FINGER_TIP_PIP_PAIRS
            .iter()
            .all(|&(tip, pip)| snapshot.landmark(tip).y >= snapshot.landmark(pip).y)
    }

    /// Seconds until another confirm may fire
    #[must_use]
    pub fn cooldown_remaining(&self, now: f64) -> f64 {
        self.cooldown.remaining(now)
    }

    /// Re-arm the cooldown
    pub fn reset(&mut self) {
        self.cooldown.reset();
    }
}

impl Default for ConfirmClassifier {
    fn default() -> Self {
        Self::new()
    }
}
