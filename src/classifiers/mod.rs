//! Gesture classifiers.
//!
//! Two independent families feed the engine: directional swipes judged from
//! fingertip motion, and the static thumbs-up confirm pose. Each classifier
//! owns its own cooldown timer.

/// Directional swipe detection from the fingertip motion history
pub mod swipe;

/// Thumbs-up confirm pose detection from a single frame
pub mod confirm;

use std::fmt;

use crate::constants::{
    KEYCODE_DPAD_CENTER, KEYCODE_DPAD_DOWN, KEYCODE_DPAD_LEFT, KEYCODE_DPAD_RIGHT, KEYCODE_DPAD_UP,
};

pub use confirm::ConfirmClassifier;
pub use swipe::{classify_displacement, SwipeClassifier};

/// A recognized gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureEvent {
    /// Swipe toward the left edge of the image
    Left,
    /// Swipe toward the right edge of the image
    Right,
    /// Swipe toward the top of the image
    Up,
    /// Swipe toward the bottom of the image
    Down,
    /// Thumbs-up confirm
    Center,
}

impl GestureEvent {
    /// Every gesture, swipes first
    pub const ALL: [Self; 5] = [Self::Left, Self::Right, Self::Up, Self::Down, Self::Center];

    /// Upper-case name used in logs and on the HUD
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Center => "CENTER",
        }
    }

    /// Android key code the remote maps this gesture to
    #[must_use]
    pub const fn key_code(&self) -> u16 {
        match self {
            Self::Left => KEYCODE_DPAD_LEFT,
            Self::Right => KEYCODE_DPAD_RIGHT,
            Self::Up => KEYCODE_DPAD_UP,
            Self::Down => KEYCODE_DPAD_DOWN,
            Self::Center => KEYCODE_DPAD_CENTER,
        }
    }

    /// True for the four directional gestures
    #[must_use]
    pub const fn is_swipe(&self) -> bool {
        !matches!(self, Self::Center)
    }
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
