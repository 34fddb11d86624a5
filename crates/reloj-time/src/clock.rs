//! Clock model - second → minute → hour carry chain

use std::sync::Arc;

use reloj_core::{ClockResult, DialTime, HandAngles, HOURS_PER_DIAL, SECONDS_PER_MINUTE};

use crate::{Hand, PositionRing};

/// Which hands carried during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Second hand wrapped, minute hand advanced
    pub minute_carried: bool,
    /// Minute hand wrapped, hour hand advanced
    pub hour_carried: bool,
    /// Hour hand wrapped past 11 back to 0 (12-hour rollover)
    pub wrapped: bool,
}

/// Three hands wired as a carry chain
///
/// The model never reads wall-clock time: it moves only when `tick` is called,
/// so any source (a timer, a test stepper) can drive it.
#[derive(Clone, Debug)]
pub struct ClockModel {
    second: Hand,
    minute: Hand,
    hour: Hand,
}

impl ClockModel {
    /// Create a clock at 12:00:00
    /// The second and minute hands share one 60-position ring
    pub fn new() -> ClockResult<Self> {
        let sixty = Arc::new(PositionRing::build(SECONDS_PER_MINUTE)?);
        let twelve = Arc::new(PositionRing::build(HOURS_PER_DIAL)?);

        Ok(ClockModel {
            second: Hand::new(Arc::clone(&sixty)),
            minute: Hand::new(sixty),
            hour: Hand::new(twelve),
        })
    }

    /// Create a clock already aligned to `time`
    pub fn seeded(time: DialTime) -> ClockResult<Self> {
        let mut clock = Self::new()?;
        clock.seed_time(time)?;
        Ok(clock)
    }

    /// Advance by one external time unit
    /// Carry stops at the hour hand; there is no day rollover
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();

        if self.second.advance_one() {
            report.minute_carried = true;
            if self.minute.advance_one() {
                report.hour_carried = true;
                report.wrapped = self.hour.advance_one();
                tracing::trace!(hour = self.hour.ordinal(), "hour carry");
            }
        }

        report
    }

    /// Current angles of all three hands. Pure.
    pub fn angles(&self) -> HandAngles {
        HandAngles {
            second: self.second.angle(),
            minute: self.minute.angle(),
            hour: self.hour.angle(),
        }
    }

    /// Validate and apply a host time.
    ///
    /// All-or-nothing: on `InvalidTime` no hand moves.
    pub fn seed(&mut self, hh: i64, mm: i64, ss: i64) -> ClockResult<()> {
        let time = DialTime::new(hh, mm, ss)?;
        self.seed_time(time)
    }

    /// Align all three hands to an already validated time
    pub fn seed_time(&mut self, time: DialTime) -> ClockResult<()> {
        // Resolve every node before touching any hand
        let second = self.second.ring().node_at(time.second())?;
        let minute = self.minute.ring().node_at(time.minute())?;
        let hour = self.hour.ring().node_at(time.hour())?;

        self.second.place(second);
        self.minute.place(minute);
        self.hour.place(hour);

        tracing::debug!(%time, "clock seeded");
        Ok(())
    }

    /// Move every hand back to 0
    pub fn rewind(&mut self) {
        self.second.rewind();
        self.minute.rewind();
        self.hour.rewind();
    }

    /// Current hand positions
    pub fn time(&self) -> DialTime {
        DialTime::wrapping(
            self.hour.ordinal(),
            self.minute.ordinal(),
            self.second.ordinal(),
        )
    }

    pub fn second_hand(&self) -> &Hand {
        &self.second
    }

    pub fn minute_hand(&self) -> &Hand {
        &self.minute
    }

    pub fn hour_hand(&self) -> &Hand {
        &self.hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reloj_core::ClockError;

    fn ordinals(clock: &ClockModel) -> (usize, usize, usize) {
        (
            clock.hour_hand().ordinal(),
            clock.minute_hand().ordinal(),
            clock.second_hand().ordinal(),
        )
    }

    #[test]
    fn test_second_to_minute_carry() {
        let mut clock = ClockModel::new().unwrap();
        clock.seed(0, 0, 59).unwrap();

        let report = clock.tick();

        assert_eq!(ordinals(&clock), (0, 1, 0));
        assert!(report.minute_carried);
        assert!(!report.hour_carried);
    }

    #[test]
    fn test_minute_to_hour_carry() {
        let mut clock = ClockModel::new().unwrap();
        clock.seed(0, 59, 59).unwrap();

        let report = clock.tick();

        assert_eq!(ordinals(&clock), (1, 0, 0));
        assert!(report.hour_carried);
        assert!(!report.wrapped);
    }

    #[test]
    fn test_hour_wraps_to_zero() {
        let mut clock = ClockModel::new().unwrap();
        clock.seed(11, 59, 59).unwrap();

        let report = clock.tick();

        assert_eq!(ordinals(&clock), (0, 0, 0));
        assert!(report.wrapped);
    }

    #[test]
    fn test_sixty_seconds_advance_minute_once() {
        let mut clock = ClockModel::new().unwrap();
        clock.seed(4, 10, 0).unwrap();

        for _ in 0..60 {
            clock.tick();
        }

        assert_eq!(ordinals(&clock), (4, 11, 0));
    }

    #[test]
    fn test_angles_idempotent() {
        let mut clock = ClockModel::seeded(DialTime::new(3, 15, 30).unwrap()).unwrap();
        clock.tick();

        assert_eq!(clock.angles(), clock.angles());
    }

    #[test]
    fn test_angles_after_tick() {
        let mut clock = ClockModel::new().unwrap();
        clock.seed(0, 0, 0).unwrap();
        assert_eq!(clock.angles().second, 0.0);

        clock.tick();
        assert_eq!(clock.angles().second, 6.0);
    }

    #[test]
    fn test_seed_afternoon_hour_succeeds() {
        let mut clock = ClockModel::new().unwrap();
        assert!(clock.seed(12, 0, 0).is_ok());
        assert_eq!(ordinals(&clock), (0, 0, 0));
    }

    #[test]
    fn test_invalid_seed_leaves_hands_untouched() {
        let mut clock = ClockModel::new().unwrap();
        clock.seed(7, 8, 9).unwrap();
        let before = clock.angles();

        let err = clock.seed(-1, 0, 0).unwrap_err();
        assert!(matches!(err, ClockError::InvalidTime { hour: -1, .. }));
        assert_eq!(ordinals(&clock), (7, 8, 9));
        assert_eq!(clock.angles(), before);

        assert!(clock.seed(3, 30, 60).is_err());
        assert_eq!(ordinals(&clock), (7, 8, 9));
    }

    #[test]
    fn test_rewind_and_time() {
        let mut clock = ClockModel::seeded(DialTime::new(9, 45, 12).unwrap()).unwrap();
        assert_eq!(clock.time().to_string(), "09:45:12");

        clock.rewind();
        assert_eq!(clock.time(), DialTime::MIDNIGHT);
    }

    proptest! {
        #[test]
        fn prop_hour_of_ticks_advances_hour_once(h in 0i64..12, m in 0i64..60, s in 0i64..60) {
            let mut clock = ClockModel::new().unwrap();
            clock.seed(h, m, s).unwrap();

            let carries = (0..3600).filter(|_| clock.tick().hour_carried).count();

            prop_assert_eq!(carries, 1);
            prop_assert_eq!(ordinals(&clock), (((h + 1) % 12) as usize, m as usize, s as usize));
        }
    }
}
