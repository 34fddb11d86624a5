//! Reloj Time Engine - hands driven by list traversal
//!
//! This crate implements the clock engine:
//! - Position rings: circular doubly linked dial positions
//! - Hands: cursors that advance by following links, detecting carry on wrap
//! - Clock model: second → minute → hour carry chain
//! - Stopwatch and chronograph mode switching

pub mod clock;
pub mod engine;
pub mod hand;
pub mod ring;
pub mod stopwatch;

pub use clock::*;
pub use engine::*;
pub use hand::*;
pub use ring::*;
pub use stopwatch::*;
