//! Gesture classification from hand-skeleton landmarks for driving a remote.
//!
//! This library turns a stream of 21-point hand skeletons (as produced by a
//! hand landmark model at roughly 30 frames per second) into discrete,
//! debounced gesture events:
//! - four swipe directions, made by pointing the index finger and moving it
//! - a confirm gesture, made by raising the thumb with the other fingers curled
//!
//! The classification pipeline per frame:
//! 1. The extension gate decides whether the index finger is pointing
//! 2. While it points, the fingertip is appended to a short time-windowed history
//! 3. The confirm classifier checks the static pose; if it fires, the frame yields `CENTER`
//! 4. Otherwise the swipe classifier judges the history by distance, speed and direction
//!
//! Each gesture family has its own cooldown, and a fired swipe wipes the
//! history so the hand swinging back never produces a second event.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use hand_gesture_remote::{GestureEngine, GestureEvent, Landmark, LandmarkSnapshot};
//!
//! # fn main() -> hand_gesture_remote::Result<()> {
//! let mut engine = GestureEngine::new();
//!
//! // Index finger pointing, moving right at 30 fps
//! let mut fired = None;
//! for i in 0..8 {
//!     let t = f64::from(i) / 30.0;
//!     let x = 0.2 + 0.05 * f64::from(i);
//!     let mut landmarks = vec![Landmark::new(0.5, 0.8); 21];
//!     landmarks[8] = Landmark::new(x, 0.5); // index tip
//!     landmarks[5] = Landmark::new(x, 0.7); // index MCP
//!     let hand = LandmarkSnapshot::new(&landmarks, t)?;
//!
//!     if let Some(gesture) = engine.process(Some(&hand), t) {
//!         fired.get_or_insert(gesture);
//!     }
//! }
//! assert_eq!(fired, Some(GestureEvent::Right));
//! # Ok(())
//! # }
//! ```
//!
//! ## Replaying a Trace
//!
//! ```no_run
//! use hand_gesture_remote::{app::GestureApp, config::Config, replay::Trace};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_file("gestures.yaml")?;
//! let trace = Trace::from_file("session.yaml")?;
//!
//! let mut app = GestureApp::new(&config)?;
//! let summary = app.run(&trace)?;
//! for (t, gesture) in summary.gestures {
//!     println!("{t:.2}s {gesture}");
//! }
//! # Ok(())
//! # }
//! ```

/// Hand landmark frames and boundary validation
pub mod landmarks;

/// Index finger extension gate
pub mod extension;

/// Time-windowed fingertip history
pub mod motion_history;

/// Per-family cooldown timers
pub mod cooldown;

/// Swipe and confirm classifiers
pub mod classifiers;

/// Per-frame gesture engine
pub mod engine;

/// Delivery of gestures to a remote device
pub mod dispatch;

/// Recorded landmark traces
pub mod replay;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use classifiers::GestureEvent;
pub use engine::{EngineStatus, GestureEngine};
pub use error::{Error, Result};
pub use landmarks::{Landmark, LandmarkSnapshot};
pub use motion_history::{MotionHistory, MotionSample};
