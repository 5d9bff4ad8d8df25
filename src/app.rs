//! Main application module: frames in, gestures out to a sink.

use crate::{
    classifiers::GestureEvent,
    config::Config,
    dispatch::{create_sink, GestureSink},
    engine::GestureEngine,
    error::Result,
    landmarks::LandmarkSnapshot,
    replay::Trace,
};
use log::{debug, info, warn};

/// Outcome of replaying a trace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    /// Frames processed
    pub frames: usize,
    /// Frames in which a hand was present
    pub hand_frames: usize,
    /// Gestures emitted, with the frame time they fired at
    pub gestures: Vec<(f64, GestureEvent)>,
    /// Gestures the sink failed to deliver
    pub dispatch_failures: usize,
}

/// Gesture application tying the engine to a sink
pub struct GestureApp {
    engine: GestureEngine,
    sink: Box<dyn GestureSink>,
    last_gesture: Option<GestureEvent>,
}

impl GestureApp {
    /// Create the application from configuration and open the sink
    pub fn new(config: &Config) -> Result<Self> {
        info!("Initializing gesture engine");
        let engine = GestureEngine::with_config(config)?;

        let mut sink = create_sink(&config.dispatch)?;
        info!("Dispatching gestures with {}", sink.name());
        sink.open()?;

        Ok(Self::with_parts(engine, sink))
    }

    /// Create the application from an existing engine and sink
    #[must_use]
    pub fn with_parts(engine: GestureEngine, sink: Box<dyn GestureSink>) -> Self {
        Self {
            engine,
            sink,
            last_gesture: None,
        }
    }

    /// Classify one frame and forward any gesture to the sink
    ///
    /// Delivery failures are logged and do not stop processing.
    pub fn process_frame(&mut self, hand: Option<&LandmarkSnapshot>, now: f64) -> Option<GestureEvent> {
        let gesture = self.engine.process(hand, now)?;

        info!("[GESTURE] {gesture}");
        self.emit(gesture);
        Some(gesture)
    }

    /// Replay every frame of a trace, using each frame's timestamp as the clock
    ///
    /// # Errors
    ///
    /// Stops at the first frame with malformed landmarks.
    pub fn run(&mut self, trace: &Trace) -> Result<ReplaySummary> {
        info!("Replaying {} frames", trace.len());
        let mut summary = ReplaySummary::default();

        for frame in &trace.frames {
            let hand = frame.snapshot()?;
            summary.frames += 1;
            if hand.is_some() {
                summary.hand_frames += 1;
            }

            let Some(gesture) = self.engine.process(hand.as_ref(), frame.timestamp) else {
                continue;
            };

            info!("[GESTURE] {gesture} at {:.3}s", frame.timestamp);
            summary.gestures.push((frame.timestamp, gesture));
            if !self.emit(gesture) {
                summary.dispatch_failures += 1;
            }
        }

        debug!("Replay finished: {summary:?}");
        Ok(summary)
    }

    /// Record and deliver a gesture, returning false if the sink failed
    fn emit(&mut self, gesture: GestureEvent) -> bool {
        self.last_gesture = Some(gesture);
        match self.sink.send(gesture) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to dispatch {gesture}: {e}");
                false
            }
        }
    }

    /// Most recent gesture emitted
    #[must_use]
    pub const fn last_gesture(&self) -> Option<GestureEvent> {
        self.last_gesture
    }

    /// The underlying engine, for status display
    #[must_use]
    pub const fn engine(&self) -> &GestureEngine {
        &self.engine
    }
}
