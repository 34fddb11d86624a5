//! Reloj Core - Fundamental types and primitives
//!
//! This crate defines the types shared by the clock engine and its hosts:
//! - Errors (ClockError, ClockResult)
//! - Dial time (DialTime, Elapsed)
//! - Hand angles and renderer-facing snapshots

pub mod dial;
pub mod error;
pub mod time;

pub use dial::*;
pub use error::*;
pub use time::*;
