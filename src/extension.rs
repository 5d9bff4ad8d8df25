//! Index-finger extension gate.
//!
//! Swipe evidence is only collected while the index finger is pointing.
//! A curled finger keeps its tip close to the base knuckle whatever the
//! hand orientation, so the tip-to-MCP distance works for all four swipe
//! directions.

use crate::{
    constants::{INDEX_EXTEND_THRESHOLD, INDEX_MCP, INDEX_TIP},
    landmarks::LandmarkSnapshot,
};

/// Decides whether the index finger is extended in a frame
#[derive(Debug, Clone, Copy)]
pub struct ExtensionGate {
    threshold: f64,
}

impl ExtensionGate {
    /// Create a gate with a custom tip-to-MCP distance threshold
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// True when the index tip is strictly farther than the threshold from its MCP knuckle
    #[must_use]
    pub fn is_extended(&self, snapshot: &LandmarkSnapshot) -> bool {
        let tip = snapshot.landmark(INDEX_TIP);
        let mcp = snapshot.landmark(INDEX_MCP);
        tip.distance_2d(mcp) > self.threshold
    }

    /// Distance threshold in normalized units
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ExtensionGate {
    fn default() -> Self {
        Self::new(INDEX_EXTEND_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::NUM_HAND_LANDMARKS, landmarks::Landmark};

    fn hand_with_index(tip: (f64, f64), mcp: (f64, f64)) -> LandmarkSnapshot {
        let mut landmarks = vec![Landmark::new(0.5, 0.5); NUM_HAND_LANDMARKS];
        landmarks[INDEX_TIP] = Landmark::new(tip.0, tip.1);
        landmarks[INDEX_MCP] = Landmark::new(mcp.0, mcp.1);
        LandmarkSnapshot::new(&landmarks, 0.0).unwrap()
    }

    #[test]
    fn test_threshold_is_strict() {
        let gate = ExtensionGate::default();
        assert!(!gate.is_extended(&hand_with_index((0.14, 0.0), (0.0, 0.0))));
        assert!(gate.is_extended(&hand_with_index((0.141, 0.0), (0.0, 0.0))));
    }

    #[test]
    fn test_orientation_invariant() {
        let gate = ExtensionGate::default();
        let mcp = (0.5, 0.5);
        for tip in [(0.7, 0.5), (0.3, 0.5), (0.5, 0.3), (0.5, 0.7)] {
            assert!(gate.is_extended(&hand_with_index(tip, mcp)), "tip {tip:?}");
        }
        assert!(!gate.is_extended(&hand_with_index((0.55, 0.55), mcp)));
    }
}
