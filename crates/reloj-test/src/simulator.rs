//! Tick Simulator - drives the engine and checks it against an oracle
//!
//! The engine only ever follows ring links. The simulator keeps a plain
//! seconds-since-midnight counter beside it and reports the first tick at
//! which the two disagree.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reloj_core::{ClockResult, DialTime, HOURS_PER_DIAL};
use reloj_time::ClockModel;

const SECONDS_PER_DIAL: u64 = HOURS_PER_DIAL as u64 * 3600;

/// Arithmetic reference clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OracleClock {
    seconds: u64,
}

impl OracleClock {
    pub fn new(time: DialTime) -> Self {
        OracleClock {
            seconds: time.hour() as u64 * 3600 + time.minute() as u64 * 60 + time.second() as u64,
        }
    }

    pub fn tick(&mut self) {
        self.seconds = (self.seconds + 1) % SECONDS_PER_DIAL;
    }

    pub fn time(&self) -> DialTime {
        DialTime::from_unix_secs(self.seconds)
    }

    /// Expected angles, degrees
    pub fn angles(&self) -> (f64, f64, f64) {
        let t = self.time();
        (
            t.second() as f64 * 6.0,
            t.minute() as f64 * 6.0,
            t.hour() as f64 * 30.0,
        )
    }
}

/// First point where engine and oracle disagreed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Divergence {
    pub tick: u64,
    pub expected: DialTime,
    pub actual: DialTime,
}

/// Outcome of a simulation run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationResult {
    pub ticks: u64,
    pub minute_carries: u64,
    pub hour_carries: u64,
    pub wraps: u64,
    pub divergence: Option<Divergence>,
}

impl SimulationResult {
    pub fn is_consistent(&self) -> bool {
        self.divergence.is_none()
    }
}

/// Engine under test plus its oracle
pub struct TickSimulator {
    clock: ClockModel,
    oracle: OracleClock,
    start: DialTime,
}

impl TickSimulator {
    pub fn new(start: DialTime) -> ClockResult<Self> {
        Ok(TickSimulator {
            clock: ClockModel::seeded(start)?,
            oracle: OracleClock::new(start),
            start,
        })
    }

    /// Start at a random dial position drawn from `seed`
    pub fn random(seed: u64) -> ClockResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = DialTime::wrapping(
            rng.gen_range(0..HOURS_PER_DIAL),
            rng.gen_range(0..60),
            rng.gen_range(0..60),
        );
        Self::new(start)
    }

    pub fn start(&self) -> DialTime {
        self.start
    }

    pub fn clock(&self) -> &ClockModel {
        &self.clock
    }

    /// Tick `ticks` times, stopping at the first divergence
    pub fn run(&mut self, ticks: u64) -> SimulationResult {
        let mut result = SimulationResult::default();

        for n in 1..=ticks {
            let report = self.clock.tick();
            self.oracle.tick();

            result.ticks = n;
            result.minute_carries += report.minute_carried as u64;
            result.hour_carries += report.hour_carried as u64;
            result.wraps += report.wrapped as u64;

            let expected = self.oracle.time();
            let actual = self.clock.time();
            if expected != actual || !self.angles_match() {
                result.divergence = Some(Divergence {
                    tick: n,
                    expected,
                    actual,
                });
                break;
            }
        }

        result
    }

    fn angles_match(&self) -> bool {
        let a = self.clock.angles();
        let (second, minute, hour) = self.oracle.angles();
        const EPS: f64 = 1e-9;
        (a.second - second).abs() < EPS
            && (a.minute - minute).abs() < EPS
            && (a.hour - hour).abs() < EPS
    }
}
