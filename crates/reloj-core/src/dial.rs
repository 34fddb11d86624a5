//! Renderer-facing dial primitives

use std::fmt;

use serde::{Deserialize, Serialize};

/// Degrees in a full turn of the dial
pub const FULL_TURN: f64 = 360.0;

/// Angles of the three hands, in degrees
/// 0 is the 12 o'clock position, increasing clockwise, always in [0, 360)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct HandAngles {
    pub second: f64,
    pub minute: f64,
    pub hour: f64,
}

/// What the face is currently showing
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Clock,
    Stopwatch,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Clock => f.write_str("clock"),
            Mode::Stopwatch => f.write_str("stopwatch"),
        }
    }
}

/// Which host controls are usable in the current state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct Controls {
    pub start: bool,
    pub stop: bool,
    pub reset: bool,
    pub start_label: StartLabel,
}

impl Controls {
    /// Clock mode: every stopwatch control is disabled
    pub const DISABLED: Controls = Controls {
        start: false,
        stop: false,
        reset: false,
        start_label: StartLabel::Start,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum StartLabel {
    #[default]
    Start,
    Resume,
}

impl StartLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            StartLabel::Start => "Start",
            StartLabel::Resume => "Resume",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!(Mode::default(), Mode::Clock);
        assert_eq!(Mode::Stopwatch.to_string(), "stopwatch");
    }

    #[test]
    fn test_disabled_controls() {
        let c = Controls::DISABLED;
        assert!(!c.start && !c.stop && !c.reset);
        assert_eq!(c.start_label.as_str(), "Start");
    }
}
