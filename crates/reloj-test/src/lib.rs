//! Reloj Test Harness - engine validation
//!
//! This crate provides:
//! - Long-run tick simulation checked against an arithmetic oracle
//! - Criterion benchmarks for the tick and seeding paths

pub mod simulator;

pub use simulator::*;
