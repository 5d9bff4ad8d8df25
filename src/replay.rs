//! Landmark traces for driving the engine offline.
//!
//! A trace is a YAML document listing frames in capture order:
//!
//! ```yaml
//! frames:
//!   - timestamp: 0.0
//!     landmarks: [[0.51, 0.72], [0.48, 0.66, -0.01], ...]   # 21 points
//!   - timestamp: 0.033
//!     landmarks: null                                     # no hand
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{landmarks::LandmarkSnapshot, Error, Result};

/// One recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Capture time in seconds
    pub timestamp: f64,

    /// Hand landmarks as `[x, y]` or `[x, y, z]`, absent when no hand was detected
    #[serde(default)]
    pub landmarks: Option<Vec<Vec<f64>>>,
}

impl TraceFrame {
    /// Validated snapshot for this frame, `None` when no hand was detected
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLandmarks`] for malformed landmark data.
    pub fn snapshot(&self) -> Result<Option<LandmarkSnapshot>> {
        self.landmarks
            .as_deref()
            .map(|coords| LandmarkSnapshot::from_coords(coords, self.timestamp))
            .transpose()
    }
}

/// Sequence of recorded frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Frames in capture order
    pub frames: Vec<TraceFrame>,
}

impl Trace {
    /// Load a trace from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Load a trace from any reader, e.g. stdin
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        Self::from_yaml(&content)
    }

    /// Parse a trace from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let trace: Self = serde_yaml::from_str(content)
            .map_err(|e| Error::TraceFormat(format!("Failed to parse trace: {e}")))?;
        trace.validate()?;
        Ok(trace)
    }

    /// Serialize the trace to YAML text
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::TraceFormat(format!("Failed to serialize trace: {e}")))
    }

    /// Append a frame recorded from a snapshot, or an empty frame
    pub fn push(&mut self, timestamp: f64, hand: Option<&LandmarkSnapshot>) {
        let landmarks = hand.map(|snapshot| {
            snapshot
                .landmarks()
                .iter()
                .map(|lm| vec![lm.x, lm.y, lm.z])
                .collect()
        });
        self.frames.push(TraceFrame { timestamp, landmarks });
    }

    /// Check that timestamps are finite and never go backwards
    pub fn validate(&self) -> Result<()> {
        let mut previous = f64::NEG_INFINITY;
        for (index, frame) in self.frames.iter().enumerate() {
            if !frame.timestamp.is_finite() {
                return Err(Error::TraceFormat(format!("frame {index} has a non-finite timestamp")));
            }
            if frame.timestamp < previous {
                return Err(Error::TraceFormat(format!(
                    "frame {index} timestamp {} is earlier than {previous}",
                    frame.timestamp
                )));
            }
            previous = frame.timestamp;
        }
        Ok(())
    }

    /// Number of frames
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the trace holds no frames
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
