//! Logging setup for hosts

use tracing_subscriber::EnvFilter;

use reloj_core::{ClockError, ClockResult};

/// Pick the default filter directive for a verbosity count
/// (0 → info, 1 → debug, more → trace)
pub fn level_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level.
/// Fails if the directive is malformed or a subscriber is already installed.
pub fn init_tracing(verbosity: u8) -> ClockResult<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(directives),
        Err(_) => EnvFilter::try_new(level_directive(verbosity)),
    }
    .map_err(|e| ClockError::InvalidConfig(format!("log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| ClockError::InvalidConfig(format!("tracing already initialized: {}", e)))
}
