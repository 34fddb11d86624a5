//! Stopwatch - a second carry chain that only moves while running

use reloj_core::{ClockResult, Controls, Elapsed, HandAngles, StartLabel, HOURS_PER_DIAL};

use crate::{ClockModel, TickReport};

/// Elapsed-time hands, counted from 00:00:00
///
/// Hours beyond the dial are tracked as completed laps of the hour ring,
/// so the readout is still derived from hand positions.
#[derive(Clone, Debug)]
pub struct Stopwatch {
    hands: ClockModel,
    running: bool,
    laps: u64,
}

impl Stopwatch {
    pub fn new() -> ClockResult<Self> {
        Ok(Stopwatch {
            hands: ClockModel::new()?,
            running: false,
            laps: 0,
        })
    }

    /// Start, or resume after `stop`
    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!(elapsed = %self.elapsed(), "stopwatch started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(elapsed = %self.elapsed(), "stopwatch stopped");
        }
        self.running = false;
    }

    /// Back to zero, stopped
    pub fn reset(&mut self) {
        self.running = false;
        self.laps = 0;
        self.hands.rewind();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one unit if running
    pub fn tick(&mut self) -> Option<TickReport> {
        if !self.running {
            return None;
        }

        let report = self.hands.tick();
        if report.wrapped {
            self.laps += 1;
        }
        Some(report)
    }

    pub fn angles(&self) -> HandAngles {
        self.hands.angles()
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed {
            hours: self.laps * HOURS_PER_DIAL as u64 + self.hands.hour_hand().ordinal() as u64,
            minutes: self.hands.minute_hand().ordinal() as u8,
            seconds: self.hands.second_hand().ordinal() as u8,
            centis: 0,
        }
    }

    #[inline]
    pub fn has_elapsed(&self) -> bool {
        !self.elapsed().is_zero()
    }

    /// Host control state for stopwatch mode
    pub fn controls(&self) -> Controls {
        let elapsed = self.has_elapsed();
        Controls {
            start: !self.running,
            stop: self.running,
            reset: elapsed,
            start_label: if elapsed {
                StartLabel::Resume
            } else {
                StartLabel::Start
            },
        }
    }
}
