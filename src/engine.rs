//! Per-frame gesture engine.
//!
//! The engine owns the extension gate, the fingertip motion history and both
//! classifiers. Each call to [`GestureEngine::process`] handles exactly one
//! frame and yields at most one gesture; the confirm pose is evaluated first
//! and suppresses swipe evaluation for that frame when it fires.
//!
//! The engine is not reentrant. Callers sharing one instance across threads
//! must serialize access themselves.

use crate::{
    classifiers::{ConfirmClassifier, GestureEvent, SwipeClassifier},
    config::Config,
    constants::INDEX_TIP,
    extension::ExtensionGate,
    landmarks::LandmarkSnapshot,
    motion_history::MotionHistory,
    Result,
};

/// Readiness summary for a status display
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineStatus {
    /// Swipes are blocked for this many more seconds
    Cooldown(f64),
    /// The index finger is not extended, so no swipe evidence is collected
    PointIndex,
    /// A swipe can fire
    Ready,
}

/// Gesture classification state machine
#[derive(Debug, Clone)]
pub struct GestureEngine {
    gate: ExtensionGate,
    history: MotionHistory,
    swipe: SwipeClassifier,
    confirm: ConfirmClassifier,
    index_extended: bool,
}

impl GestureEngine {
    /// Create an engine with the default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self {
            gate: ExtensionGate::default(),
            history: MotionHistory::new(),
            swipe: SwipeClassifier::new(),
            confirm: ConfirmClassifier::new(),
            index_extended: false,
        }
    }

    /// Create an engine from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the classifier thresholds fail validation. The
    /// dispatch section is not inspected.
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate_engine()?;

        Ok(Self {
            gate: ExtensionGate::new(config.extension.index_extend_threshold),
            history: MotionHistory::with_window(config.swipe.history_window_s),
            swipe: SwipeClassifier::from_config(&config.swipe),
            confirm: ConfirmClassifier::from_config(&config.confirm),
            index_extended: false,
        })
    }

    /// Process one frame
    ///
    /// `hand` is `None` when no hand was detected. `now` is read once per
    /// frame by the caller and shared by every check in this call.
    pub fn process(&mut self, hand: Option<&LandmarkSnapshot>, now: f64) -> Option<GestureEvent> {
        let Some(snapshot) = hand else {
            self.index_extended = false;
            self.history.clear();
            return None;
        };

        self.index_extended = self.gate.is_extended(snapshot);
        if self.index_extended {
            let tip = snapshot.landmark(INDEX_TIP);
            self.history.push(now, tip.x, tip.y);
        } else {
            self.history.clear();
        }

        if self.confirm.check(snapshot, now) {
            return Some(GestureEvent::Center);
        }

        if self.index_extended {
            self.swipe.check(&mut self.history, now)
        } else {
            None
        }
    }

    /// Clear the motion history and re-arm both cooldowns
    pub fn reset(&mut self) {
        self.history.clear();
        self.swipe.reset();
        self.confirm.reset();
        self.index_extended = false;
    }

    /// Fingertip samples currently held as swipe evidence
    #[must_use]
    pub const fn history(&self) -> &MotionHistory {
        &self.history
    }

    /// Whether the index finger was extended in the last processed frame
    #[must_use]
    pub const fn index_extended(&self) -> bool {
        self.index_extended
    }

    /// Seconds until a swipe may fire again
    #[must_use]
    pub fn swipe_cooldown_remaining(&self, now: f64) -> f64 {
        self.swipe.cooldown_remaining(now)
    }

    /// Seconds until the confirm gesture may fire again
    #[must_use]
    pub fn confirm_cooldown_remaining(&self, now: f64) -> f64 {
        self.confirm.cooldown_remaining(now)
    }

    /// Swipe readiness at `now`
    #[must_use]
    pub fn status(&self, now: f64) -> EngineStatus {
        let remaining = self.swipe_cooldown_remaining(now);
        if remaining > 0.0 {
            EngineStatus::Cooldown(remaining)
        } else if !self.index_extended {
            EngineStatus::PointIndex
        } else {
            EngineStatus::Ready
        }
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{FINGER_TIP_PIP_PAIRS, INDEX_MCP, NUM_HAND_LANDMARKS, THUMB_MCP, THUMB_TIP},
        landmarks::Landmark,
    };

    fn pointing(x: f64, y: f64, t: f64) -> LandmarkSnapshot {
        let mut landmarks = vec![Landmark::new(0.5, 0.7); NUM_HAND_LANDMARKS];
        landmarks[INDEX_TIP] = Landmark::new(x, y);
        landmarks[INDEX_MCP] = Landmark::new(x, y + 0.2);
        LandmarkSnapshot::new(&landmarks, t).unwrap()
    }

    fn thumbs_up(t: f64) -> LandmarkSnapshot {
        let mut landmarks = vec![Landmark::new(0.5, 0.6); NUM_HAND_LANDMARKS];
        landmarks[THUMB_TIP] = Landmark::new(0.45, 0.30);
        landmarks[THUMB_MCP] = Landmark::new(0.45, 0.45);
        for (tip, pip) in FINGER_TIP_PIP_PAIRS {
            landmarks[pip] = Landmark::new(0.5, 0.55);
            landmarks[tip] = Landmark::new(0.52, 0.60);
        }
        LandmarkSnapshot::new(&landmarks, t).unwrap()
    }

    #[test]
    fn test_no_hand_clears_history() {
        let mut engine = GestureEngine::new();
        engine.process(Some(&pointing(0.3, 0.5, 0.0)), 0.0);
        engine.process(Some(&pointing(0.31, 0.5, 0.033)), 0.033);
        assert_eq!(engine.history().size(), 2);

        assert_eq!(engine.process(None, 0.066), None);
        assert_eq!(engine.history().size(), 0);
        assert!(!engine.index_extended());
    }

    #[test]
    fn test_curled_index_clears_history() {
        let mut engine = GestureEngine::new();
        engine.process(Some(&pointing(0.3, 0.5, 0.0)), 0.0);
        engine.process(Some(&thumbs_up(0.033)), 0.033);
        assert_eq!(engine.history().size(), 0);
        assert!(!engine.index_extended());
    }

    #[test]
    fn test_confirm_fires_center() {
        let mut engine = GestureEngine::new();
        assert_eq!(engine.process(Some(&thumbs_up(0.0)), 0.0), Some(GestureEvent::Center));
        assert_eq!(engine.process(Some(&thumbs_up(0.5)), 0.5), None);
        assert!((engine.confirm_cooldown_remaining(0.5) - 0.5).abs() < 1e-12);
        assert_eq!(engine.swipe_cooldown_remaining(0.5), 0.0);
    }

    #[test]
    fn test_status() {
        let mut engine = GestureEngine::new();
        assert_eq!(engine.status(0.0), EngineStatus::PointIndex);

        engine.process(Some(&pointing(0.3, 0.5, 0.0)), 0.0);
        assert_eq!(engine.status(0.0), EngineStatus::Ready);

        let mut fired = None;
        for i in 1..=6 {
            let t = f64::from(i) / 30.0;
            fired = fired.or(engine.process(Some(&pointing(0.3 + 0.05 * f64::from(i), 0.5, t)), t));
        }
        assert_eq!(fired, Some(GestureEvent::Right));
        assert!(matches!(engine.status(0.5), EngineStatus::Cooldown(r) if r > 0.0));
    }

    #[test]
    fn test_reset_rearms_cooldowns() {
        let mut engine = GestureEngine::new();
        assert!(engine.process(Some(&thumbs_up(0.0)), 0.0).is_some());
        engine.reset();
        assert_eq!(engine.confirm_cooldown_remaining(0.1), 0.0);
        assert_eq!(engine.process(Some(&thumbs_up(0.1)), 0.1), Some(GestureEvent::Center));
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = Config::default();
        config.swipe.directionality_ratio = 0.0;
        assert!(GestureEngine::with_config(&config).is_err());
        assert!(GestureEngine::with_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_with_config_ignores_dispatch_sink() {
        let mut config = Config::default();
        config.dispatch.sink = "recording".to_string();
        assert!(GestureEngine::with_config(&config).is_ok());
    }
}
