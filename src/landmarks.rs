//! Hand landmark frames supplied by the pose-estimation model.
//!
//! A [`LandmarkSnapshot`] holds the 21 keypoints of one detected hand in
//! normalized image coordinates (x to the right, y downward, both nominally
//! in `[0, 1]`). Snapshots are validated once at construction so the
//! classifiers can index them without further checks.

use crate::{constants::NUM_HAND_LANDMARKS, Error, Result};

/// A single hand keypoint in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    /// Horizontal position, 0 at the left edge
    pub x: f64,
    /// Vertical position, 0 at the top edge
    pub y: f64,
    /// Relative depth reported by the model (unused by classification)
    pub z: f64,
}

impl Landmark {
    /// Create a landmark with zero depth
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Euclidean distance to another landmark in the image plane
    #[must_use]
    pub fn distance_2d(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// One frame's worth of hand keypoints plus its capture time
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSnapshot {
    landmarks: [Landmark; NUM_HAND_LANDMARKS],
    timestamp: f64,
}

impl LandmarkSnapshot {
    /// Build a snapshot from exactly 21 landmarks
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLandmarks`] if the landmark count is wrong or
    /// any coordinate is not finite, and [`Error::InvalidInput`] if the
    /// timestamp is not finite.
    pub fn new(landmarks: &[Landmark], timestamp: f64) -> Result<Self> {
        if !timestamp.is_finite() {
            return Err(Error::InvalidInput(format!("non-finite frame timestamp: {timestamp}")));
        }

        let landmarks: [Landmark; NUM_HAND_LANDMARKS] = landmarks.try_into().map_err(|_| {
            Error::InvalidLandmarks(format!(
                "expected {NUM_HAND_LANDMARKS} landmarks, got {}",
                landmarks.len()
            ))
        })?;

        if let Some(index) = landmarks.iter().position(|lm| !lm.is_finite()) {
            return Err(Error::InvalidLandmarks(format!(
                "landmark {index} has a non-finite coordinate"
            )));
        }

        Ok(Self { landmarks, timestamp })
    }

    /// Build a snapshot from raw `[x, y]` or `[x, y, z]` coordinate lists
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLandmarks`] if a point does not have two or
    /// three components, or if [`LandmarkSnapshot::new`] rejects the result.
    pub fn from_coords(coords: &[Vec<f64>], timestamp: f64) -> Result<Self> {
        let landmarks = coords
            .iter()
            .enumerate()
            .map(|(index, point)| match point.as_slice() {
                [x, y] => Ok(Landmark::new(*x, *y)),
                [x, y, z] => Ok(Landmark { x: *x, y: *y, z: *z }),
                other => Err(Error::InvalidLandmarks(format!(
                    "landmark {index} has {} components, expected 2 or 3",
                    other.len()
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(&landmarks, timestamp)
    }

    /// Landmark at a fixed skeleton index (see [`crate::constants`])
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`NUM_HAND_LANDMARKS`].
    #[must_use]
    pub fn landmark(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }

    /// All landmarks in skeleton order
    #[must_use]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Capture time in seconds
    #[must_use]
    pub const fn timestamp(&self) -> f64 {
        self.timestamp
    }
}
