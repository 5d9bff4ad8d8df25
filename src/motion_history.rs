//! Time-windowed history of index-fingertip positions.
//!
//! The history is the only evidence the swipe classifier looks at. Samples
//! are kept oldest-first and anything older than the window relative to the
//! newest push is evicted from the front immediately.

use std::collections::{vec_deque, VecDeque};

use crate::constants::HISTORY_WINDOW_S;

/// One fingertip observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Time in seconds
    pub timestamp: f64,
    /// Normalized horizontal position
    pub x: f64,
    /// Normalized vertical position
    pub y: f64,
}

/// Sliding time window of fingertip samples
#[derive(Debug, Clone)]
pub struct MotionHistory {
    window_s: f64,
    samples: VecDeque<MotionSample>,
}

impl MotionHistory {
    /// Create an empty history with the default window
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(HISTORY_WINDOW_S)
    }

    /// Create an empty history keeping `window_s` seconds of samples
    #[must_use]
    pub fn with_window(window_s: f64) -> Self {
        Self {
            window_s,
            samples: VecDeque::new(),
        }
    }

    /// Append a sample and evict everything older than the window
    pub fn push(&mut self, timestamp: f64, x: f64, y: f64) {
        self.samples.push_back(MotionSample { timestamp, x, y });

        let cutoff = timestamp - self.window_s;
        while self.samples.front().is_some_and(|s| s.timestamp < cutoff) {
            self.samples.pop_front();
        }
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of retained samples
    #[must_use]
    pub fn size(&self) -> usize {
        self.samples.len()
    }

    /// True when no samples are retained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest retained sample
    #[must_use]
    pub fn oldest(&self) -> Option<&MotionSample> {
        self.samples.front()
    }

    /// Most recently pushed sample
    #[must_use]
    pub fn newest(&self) -> Option<&MotionSample> {
        self.samples.back()
    }

    /// Iterate samples oldest to newest
    pub fn iter(&self) -> vec_deque::Iter<'_, MotionSample> {
        self.samples.iter()
    }

    /// Window length in seconds
    #[must_use]
    pub const fn window(&self) -> f64 {
        self.window_s
    }
}

impl Default for MotionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a MotionHistory {
    type Item = &'a MotionSample;
    type IntoIter = vec_deque::Iter<'a, MotionSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
