//! Renderer seam - what the host hands to whatever draws the face

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use reloj_core::{Controls, DialTime, HandAngles, Mode};
use reloj_time::Chronograph;

/// Everything a renderer needs for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct DialFrame {
    /// Face being shown
    pub mode: Mode,
    /// Discrete hand angles of the face being shown
    pub angles: HandAngles,
    /// Wall-clock time, for renderers that sweep hands smoothly
    pub clock_time: DialTime,
    /// Digital display string
    pub readout: String,
    pub controls: Controls,
    /// Ticks applied by the host so far
    pub ticks: u64,
}

impl DialFrame {
    pub fn capture(engine: &Chronograph, ticks: u64) -> Self {
        DialFrame {
            mode: engine.mode(),
            angles: engine.angles(),
            clock_time: engine.clock().time(),
            readout: engine.readout(),
            controls: engine.controls(),
            ticks,
        }
    }
}

/// Draws frames
pub trait Renderer {
    fn render(&mut self, frame: &DialFrame);
}

/// Logs each frame at debug level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingRenderer;

impl Renderer for TracingRenderer {
    fn render(&mut self, frame: &DialFrame) {
        tracing::debug!(
            mode = %frame.mode,
            readout = %frame.readout,
            second = frame.angles.second,
            minute = frame.angles.minute,
            hour = frame.angles.hour,
            "frame"
        );
    }
}

/// Keeps every frame; clones share the same buffer
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    frames: Arc<Mutex<Vec<DialFrame>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<DialFrame> {
        self.frames.lock().clone()
    }

    pub fn last(&self) -> Option<DialFrame> {
        self.frames.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.lock().is_empty()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &DialFrame) {
        self.frames.lock().push(frame.clone());
    }
}

/// Latest frame, readable from any thread
///
/// The host writes on its own task; render threads copy the frame out
/// under the read lock and draw from the copy.
#[derive(Clone, Debug)]
pub struct SharedFrame {
    inner: Arc<RwLock<DialFrame>>,
}

impl SharedFrame {
    pub fn new(frame: DialFrame) -> Self {
        SharedFrame {
            inner: Arc::new(RwLock::new(frame)),
        }
    }

    pub fn snapshot(&self) -> DialFrame {
        self.inner.read().clone()
    }

    pub(crate) fn publish(&self, frame: DialFrame) {
        *self.inner.write() = frame;
    }
}

/// Smoothly sweeping hand angles for a face at `time`
///
/// The engine's angles jump between discrete positions. Renderers that want
/// the hour hand to creep between numerals add the minute (and second)
/// fraction here.
pub fn sweep_angles(time: DialTime) -> HandAngles {
    let second = time.second() as f64;
    let minute = time.minute() as f64 + second / 60.0;
    let hour = time.hour() as f64 + minute / 60.0;

    HandAngles {
        second: second * 6.0,
        minute: minute * 6.0,
        hour: hour * 30.0,
    }
}

/// Dial coordinates of the point at `degrees` on a circle of `radius`
/// centered on the origin. 0° is 12 o'clock; y grows downward.
pub fn point_on_circle(radius: f64, degrees: f64) -> (f64, f64) {
    let radians = (degrees - 90.0).to_radians();
    (radius * radians.cos(), radius * radians.sin())
}
