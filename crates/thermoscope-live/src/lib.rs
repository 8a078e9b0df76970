//! # thermoscope-live
//!
//! Boundary adapter for the upstream current-weather service: fetch one
//! Celsius scalar per call, through either a blocking or a suspending
//! discipline, and surface upstream failures verbatim.
//!
//! The rest of the system consumes the [`TemperatureSource`] trait, a
//! single abstract operation returning a scalar or a failure, so the
//! choice of discipline never leaks past this crate.

#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod source;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use client::LiveTemperatureClient;
pub use error::{LiveError, LiveResult};
pub use source::{fetch_reading, TemperatureSource};
