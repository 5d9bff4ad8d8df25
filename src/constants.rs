//! Constants used throughout the application

/// Number of landmarks in one hand skeleton
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Landmark indices of the hand skeleton
pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// (tip, PIP) pairs of the four non-thumb fingers
pub const FINGER_TIP_PIP_PAIRS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Seconds of index-tip history considered for a swipe
pub const HISTORY_WINDOW_S: f64 = 0.35;

/// Normalized displacement a swipe must cover
pub const MIN_SWIPE_DISTANCE: f64 = 0.12;

/// Normalized units per second a swipe must reach
pub const MIN_SWIPE_VELOCITY: f64 = 0.35;

/// Share of the total displacement the primary axis must carry
pub const DIRECTIONALITY_RATIO: f64 = 0.70;

/// Seconds before another swipe can fire
pub const GESTURE_COOLDOWN_S: f64 = 1.0;

/// Minimum samples in the history before a swipe is evaluated
pub const MIN_SWIPE_SAMPLES: usize = 5;

/// Minimum time span between the oldest and newest sample
pub const MIN_SWIPE_ELAPSED_S: f64 = 0.04;

/// Normalized height the thumb tip must sit above its MCP knuckle
pub const THUMB_RISE_MIN: f64 = 0.08;

/// Seconds before the confirm gesture can fire again
pub const THUMBS_UP_COOLDOWN_S: f64 = 1.0;

/// Normalized tip-to-MCP distance above which the index finger counts as extended
pub const INDEX_EXTEND_THRESHOLD: f64 = 0.14;

/// Android key codes sent to the remote
pub const KEYCODE_DPAD_UP: u16 = 19;
pub const KEYCODE_DPAD_DOWN: u16 = 20;
pub const KEYCODE_DPAD_LEFT: u16 = 21;
pub const KEYCODE_DPAD_RIGHT: u16 = 22;
pub const KEYCODE_DPAD_CENTER: u16 = 23;
