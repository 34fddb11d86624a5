//! Tick sources - the only place the clock waits on real time

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use reloj_core::{ClockError, ClockResult};

/// One external time unit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// 1-based sequence number within the source
    pub seq: u64,
}

/// Anything that can pace the clock
pub trait TickSource {
    /// Wait for the next tick. `None` means the source is exhausted.
    fn next_tick(&mut self) -> impl Future<Output = Option<Tick>> + Send;
}

/// Periodic real-time ticks backed by a tokio interval
///
/// Missed ticks (a stalled executor, a suspended laptop) are delivered in a
/// burst so the face catches up instead of drifting behind.
pub struct IntervalTicks {
    interval: Interval,
    seq: u64,
}

impl IntervalTicks {
    /// First tick fires one `period` from now.
    /// Must be called from within a tokio runtime.
    pub fn new(period: Duration) -> ClockResult<Self> {
        if period.is_zero() {
            return Err(ClockError::InvalidConfig(
                "tick period must be non-zero".into(),
            ));
        }

        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        Ok(IntervalTicks { interval, seq: 0 })
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl TickSource for IntervalTicks {
    async fn next_tick(&mut self) -> Option<Tick> {
        self.interval.tick().await;
        self.seq += 1;
        Some(Tick { seq: self.seq })
    }
}

/// A fixed number of ticks delivered immediately
/// Deterministic stepping for tests and fast-forwarding
#[derive(Clone, Debug)]
pub struct ManualTicks {
    remaining: u64,
    seq: u64,
}

impl ManualTicks {
    pub fn new(count: u64) -> Self {
        ManualTicks {
            remaining: count,
            seq: 0,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl TickSource for ManualTicks {
    async fn next_tick(&mut self) -> Option<Tick> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.seq += 1;
        Some(Tick { seq: self.seq })
    }
}
