//! Error types for the clock engine

use thiserror::Error;

/// Core clock errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    // Construction errors
    #[error("Invalid ring size: {size} (must be positive)")]
    InvalidSize { size: usize },

    #[error("Ordinal {ordinal} is not on a ring of size {size}")]
    OrdinalOutOfRange { ordinal: usize, size: usize },

    // Seeding errors
    #[error("Invalid time: {hour}:{minute}:{second}")]
    InvalidTime { hour: i64, minute: i64, second: i64 },

    // Host errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Clock host is no longer running")]
    HostStopped,
}

/// Result type for clock operations
pub type ClockResult<T> = Result<T, ClockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ClockError::InvalidSize { size: 0 };
        assert_eq!(err.to_string(), "Invalid ring size: 0 (must be positive)");

        let err = ClockError::InvalidTime {
            hour: -1,
            minute: 0,
            second: 0,
        };
        assert_eq!(err.to_string(), "Invalid time: -1:0:0");
    }
}
