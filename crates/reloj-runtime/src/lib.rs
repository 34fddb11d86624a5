//! Reloj Runtime - host side of the clock
//!
//! The engine never reads wall-clock time or sleeps. This crate supplies
//! what it needs from the outside:
//! - Tick sources (tokio interval, manual stepping)
//! - The host event loop and control commands
//! - Frame snapshots for renderers, shared across threads
//! - Configuration and logging setup

pub mod config;
pub mod host;
pub mod observability;
pub mod render;
pub mod tick;

pub use config::*;
pub use host::*;
pub use observability::*;
pub use render::*;
pub use tick::*;
