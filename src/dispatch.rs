//! Delivery of recognized gestures to a remote device.
//!
//! Gestures map to Android key codes. The ADB sink sends them with
//! `adb shell input keyevent` without waiting for the command to finish,
//! so a slow connection never stalls frame processing.

use std::process::{Child, Command, Stdio};

use log::{debug, info, warn};

use crate::{classifiers::GestureEvent, config::DispatchConfig, Error, Result};

/// Trait for everything that consumes recognized gestures
pub trait GestureSink: Send {
    /// Prepare the transport before the first gesture
    fn open(&mut self) -> Result<()> {
        Ok(())
    }

    /// Deliver one gesture
    fn send(&mut self, gesture: GestureEvent) -> Result<()>;

    /// Get sink name
    fn name(&self) -> &str;
}

/// Sink that only logs gestures
pub struct LogSink;

impl GestureSink for LogSink {
    fn send(&mut self, gesture: GestureEvent) -> Result<()> {
        info!("Gesture {} (keycode {})", gesture, gesture.key_code());
        Ok(())
    }

    fn name(&self) -> &str {
        "LogSink"
    }
}

/// Sink that sends key events through `adb`
pub struct AdbSink {
    program: String,
    host: Option<String>,
    in_flight: Vec<Child>,
}

impl AdbSink {
    /// Create a sink for the given adb executable and optional device
    #[must_use]
    pub fn new(program: impl Into<String>, host: Option<String>) -> Self {
        Self {
            program: program.into(),
            host,
            in_flight: Vec::new(),
        }
    }

    /// Run `adb connect HOST` and return its output
    ///
    /// Does nothing when no host is configured.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Dispatch`] if adb cannot be started.
    pub fn connect(&self) -> Result<Option<String>> {
        let Some(host) = &self.host else {
            return Ok(None);
        };

        info!("Connecting ADB to {host}");
        let output = Command::new(&self.program)
            .args(["connect", host.as_str()])
            .output()
            .map_err(|e| Error::Dispatch(format!("Failed to run {}: {e}", self.program)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() {
            warn!("adb connect exited with {}: {stdout}", output.status);
        }
        Ok(Some(stdout))
    }

    /// Arguments passed to adb for a gesture
    #[must_use]
    pub fn keyevent_args(&self, gesture: GestureEvent) -> Vec<String> {
        let mut args = Vec::with_capacity(6);
        if let Some(host) = &self.host {
            args.push("-s".to_string());
            args.push(host.clone());
        }
        args.extend(["shell", "input", "keyevent"].map(String::from));
        args.push(gesture.key_code().to_string());
        args
    }

    /// Number of key-event processes not yet reaped
    #[must_use]
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Wait for every outstanding key-event process
    pub fn flush(&mut self) {
        for mut child in self.in_flight.drain(..) {
            if let Err(e) = child.wait() {
                warn!("Failed to wait for {}: {e}", self.program);
            }
        }
    }

    /// Reap finished key-event processes
    fn reap(&mut self) {
        self.in_flight.retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

impl Drop for AdbSink {
    fn drop(&mut self) {
        self.flush();
    }
}

impl GestureSink for AdbSink {
    fn open(&mut self) -> Result<()> {
        if let Some(output) = self.connect()? {
            info!("{output}");
        }
        Ok(())
    }

    fn send(&mut self, gesture: GestureEvent) -> Result<()> {
        self.reap();

        let args = self.keyevent_args(gesture);
        debug!("Running {} {}", self.program, args.join(" "));

        let child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Dispatch(format!("Failed to run {}: {e}", self.program)))?;

        self.in_flight.push(child);
        Ok(())
    }

    fn name(&self) -> &str {
        "AdbSink"
    }
}

/// Create a gesture sink from dispatch configuration
pub fn create_sink(config: &DispatchConfig) -> Result<Box<dyn GestureSink>> {
    match config.sink.to_lowercase().as_str() {
        "log" => Ok(Box::new(LogSink)),
        "adb" => Ok(Box::new(AdbSink::new(config.adb_program.clone(), config.adb_host.clone()))),
        _ => Err(Error::Dispatch(format!("Unknown sink type: {}", config.sink))),
    }
}
