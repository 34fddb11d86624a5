//! Chronograph - wall clock and stopwatch behind one face

use reloj_core::{ClockResult, Controls, DialTime, HandAngles, Mode};

use crate::{ClockModel, Stopwatch, TickReport};

/// Clock plus stopwatch, with a selectable display mode
///
/// The wall clock keeps running while the stopwatch is shown.
#[derive(Clone, Debug)]
pub struct Chronograph {
    clock: ClockModel,
    stopwatch: Stopwatch,
    mode: Mode,
}

impl Chronograph {
    /// Create a chronograph in clock mode at 12:00:00
    pub fn new() -> ClockResult<Self> {
        Ok(Chronograph {
            clock: ClockModel::new()?,
            stopwatch: Stopwatch::new()?,
            mode: Mode::Clock,
        })
    }

    pub fn seeded(time: DialTime) -> ClockResult<Self> {
        let mut chrono = Self::new()?;
        chrono.clock.seed_time(time)?;
        Ok(chrono)
    }

    /// Advance by one external time unit
    pub fn tick(&mut self) -> TickReport {
        self.stopwatch.tick();
        self.clock.tick()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "mode switched");
        }
        self.mode = mode;
    }

    /// Angles of the face being shown
    pub fn angles(&self) -> HandAngles {
        match self.mode {
            Mode::Clock => self.clock.angles(),
            Mode::Stopwatch => self.stopwatch.angles(),
        }
    }

    /// Digital readout of the face being shown
    pub fn readout(&self) -> String {
        match self.mode {
            Mode::Clock => self.clock.time().to_string(),
            Mode::Stopwatch => self.stopwatch.elapsed().to_string(),
        }
    }

    pub fn controls(&self) -> Controls {
        match self.mode {
            Mode::Clock => Controls::DISABLED,
            Mode::Stopwatch => self.stopwatch.controls(),
        }
    }

    pub fn clock(&self) -> &ClockModel {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut ClockModel {
        &mut self.clock
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn stopwatch_mut(&mut self) -> &mut Stopwatch {
        &mut self.stopwatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_runs_in_stopwatch_mode() {
        let mut chrono = Chronograph::seeded(DialTime::new(10, 0, 0).unwrap()).unwrap();
        chrono.set_mode(Mode::Stopwatch);

        for _ in 0..61 {
            chrono.tick();
        }

        assert_eq!(chrono.clock().time().to_string(), "10:01:01");
        assert_eq!(chrono.readout(), "00:00:00.00");
        assert_eq!(chrono.angles(), HandAngles::default());
    }

    #[test]
    fn test_stopwatch_runs_in_clock_mode() {
        let mut chrono = Chronograph::new().unwrap();
        chrono.stopwatch_mut().start();

        for _ in 0..5 {
            chrono.tick();
        }

        assert_eq!(chrono.readout(), "12:00:05");
        chrono.set_mode(Mode::Stopwatch);
        assert_eq!(chrono.readout(), "00:00:05.00");
        assert_eq!(chrono.angles().second, 30.0);
    }

    #[test]
    fn test_controls_follow_mode() {
        let mut chrono = Chronograph::new().unwrap();
        assert_eq!(chrono.controls(), Controls::DISABLED);

        chrono.set_mode(Mode::Stopwatch);
        assert!(chrono.controls().start);
    }
}
