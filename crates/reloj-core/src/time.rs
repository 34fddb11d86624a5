//! Time primitives for the clock face
//!
//! The dial only knows about three discrete positions:
//! - second (0..60)
//! - minute (0..60)
//! - hour (0..12, a twelve-hour face)
//!
//! `DialTime` is the validated triple used to seed hands; `Elapsed` is the
//! unbounded readout of the stopwatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ClockError, ClockResult};

/// Positions on the second ring
pub const SECONDS_PER_MINUTE: usize = 60;
/// Positions on the minute ring
pub const MINUTES_PER_HOUR: usize = 60;
/// Positions on the hour ring
pub const HOURS_PER_DIAL: usize = 12;
/// Hours a host clock may report before they are folded onto the dial
pub const HOURS_PER_DAY: i64 = 24;

const SECONDS_PER_DAY: u64 = 86_400;

/// A validated position of all three hands
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64, i64)", into = "(i64, i64, i64)")]
pub struct DialTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl DialTime {
    pub const MIDNIGHT: DialTime = DialTime {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Validate a host-supplied time.
    ///
    /// Hours are accepted on a 24-hour scale and folded onto the 12-hour
    /// dial, so `12:00:00` lands on ordinal 0. Anything outside
    /// `0..24`, `0..60`, `0..60` is rejected.
    pub fn new(hour: i64, minute: i64, second: i64) -> ClockResult<Self> {
        let in_range = (0..HOURS_PER_DAY).contains(&hour)
            && (0..MINUTES_PER_HOUR as i64).contains(&minute)
            && (0..SECONDS_PER_MINUTE as i64).contains(&second);
        if !in_range {
            return Err(ClockError::InvalidTime {
                hour,
                minute,
                second,
            });
        }

        Ok(DialTime {
            hour: (hour % HOURS_PER_DIAL as i64) as u8,
            minute: minute as u8,
            second: second as u8,
        })
    }

    /// Build from raw hand ordinals, reducing each onto its ring
    pub fn wrapping(hour: usize, minute: usize, second: usize) -> Self {
        DialTime {
            hour: (hour % HOURS_PER_DIAL) as u8,
            minute: (minute % MINUTES_PER_HOUR) as u8,
            second: (second % SECONDS_PER_MINUTE) as u8,
        }
    }

    /// Wall time of a UNIX timestamp, in UTC
    pub fn from_unix_secs(secs: u64) -> Self {
        let of_day = secs % SECONDS_PER_DAY;
        DialTime {
            hour: ((of_day / 3600) % HOURS_PER_DIAL as u64) as u8,
            minute: ((of_day / 60) % 60) as u8,
            second: (of_day % 60) as u8,
        }
    }

    /// Hour ordinal on the dial (0..12)
    #[inline]
    pub fn hour(self) -> usize {
        self.hour as usize
    }

    #[inline]
    pub fn minute(self) -> usize {
        self.minute as usize
    }

    #[inline]
    pub fn second(self) -> usize {
        self.second as usize
    }
}

impl TryFrom<(i64, i64, i64)> for DialTime {
    type Error = ClockError;

    fn try_from((hour, minute, second): (i64, i64, i64)) -> ClockResult<Self> {
        DialTime::new(hour, minute, second)
    }
}

impl From<DialTime> for (i64, i64, i64) {
    fn from(t: DialTime) -> Self {
        (t.hour as i64, t.minute as i64, t.second as i64)
    }
}

/// Twelve-hour face readout: ordinal 0 is shown as 12
impl fmt::Display for DialTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = if self.hour == 0 {
            HOURS_PER_DIAL as u8
        } else {
            self.hour
        };
        write!(f, "{:02}:{:02}:{:02}", hour, self.minute, self.second)
    }
}

impl fmt::Debug for DialTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dial({}h {}m {}s)",
            self.hour, self.minute, self.second
        )
    }
}

/// Stopwatch elapsed time
/// Hours are unbounded: the stopwatch counts completed dial laps
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Elapsed {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    /// Hundredths of a second; whole-second ticks keep this at zero
    pub centis: u8,
}

impl Elapsed {
    pub const ZERO: Elapsed = Elapsed {
        hours: 0,
        minutes: 0,
        seconds: 0,
        centis: 0,
    };

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Elapsed::ZERO
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.centis
        )
    }
}

impl fmt::Debug for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Elapsed({})", self)
    }
}
