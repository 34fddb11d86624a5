//! Runtime configuration

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Deserialize;

use reloj_core::{ClockError, ClockResult, DialTime, Mode};

/// Where the clock face starts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    /// Current UTC wall time
    #[default]
    System,
    /// 12:00:00
    Midnight,
    Fixed(DialTime),
}

impl SeedSource {
    pub fn resolve(self) -> DialTime {
        match self {
            SeedSource::System => system_dial_time(),
            SeedSource::Midnight => DialTime::MIDNIGHT,
            SeedSource::Fixed(time) => time,
        }
    }
}

/// UTC wall time of the host, folded onto the dial
pub fn system_dial_time() -> DialTime {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since_epoch) => DialTime::from_unix_secs(since_epoch.as_secs()),
        Err(e) => {
            tracing::warn!("System clock before UNIX epoch: {}", e);
            DialTime::MIDNIGHT
        }
    }
}

/// Host runtime configuration
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Period of the tick source
    pub tick_interval: Duration,
    /// Initial face time
    pub seed: SeedSource,
    /// Face shown at startup
    pub initial_mode: Mode,
    /// Capacity of the control command channel
    pub command_buffer: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::realtime()
    }
}

impl RuntimeConfig {
    /// One tick per second, seeded from the system clock
    pub fn realtime() -> Self {
        RuntimeConfig {
            tick_interval: Duration::from_secs(1),
            seed: SeedSource::System,
            initial_mode: Mode::Clock,
            command_buffer: 32,
        }
    }

    /// Accelerated clock starting at midnight, for demos and tests
    pub fn fast(tick_interval: Duration) -> Self {
        RuntimeConfig {
            tick_interval,
            seed: SeedSource::Midnight,
            ..Self::realtime()
        }
    }

    pub fn validate(&self) -> ClockResult<()> {
        if self.tick_interval.is_zero() {
            return Err(ClockError::InvalidConfig(
                "tick_interval must be non-zero".into(),
            ));
        }
        if self.command_buffer == 0 {
            return Err(ClockError::InvalidConfig(
                "command_buffer must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Parse a JSON document. Missing fields keep their `realtime` defaults.
    ///
    /// ```json
    /// { "tick_interval": "250ms", "seed": { "fixed": [3, 15, 30] }, "mode": "stopwatch" }
    /// ```
    pub fn from_json(json: &str) -> ClockResult<Self> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| ClockError::InvalidConfig(e.to_string()))?;

        let mut config = Self::realtime();
        if let Some(interval) = raw.tick_interval {
            config.tick_interval = humantime::parse_duration(&interval)
                .map_err(|e| ClockError::InvalidConfig(format!("tick_interval: {}", e)))?;
        }
        if let Some(seed) = raw.seed {
            config.seed = seed;
        }
        if let Some(mode) = raw.mode {
            config.initial_mode = mode;
        }
        if let Some(buffer) = raw.command_buffer {
            config.command_buffer = buffer;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    tick_interval: Option<String>,
    seed: Option<SeedSource>,
    mode: Option<Mode>,
    command_buffer: Option<usize>,
}
