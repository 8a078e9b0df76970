//! # thermoscope-types
//!
//! Shared data model for the Thermoscope temperature analytics
//! pipeline: raw and analyzed readings, the per-city and merged tables,
//! seasonal profiles, decomposition output, live readings, and the
//! configuration surface.
//!
//! Everything the pipeline hands to downstream consumers derives
//! `Serialize`/`Deserialize`; the one exception is [`LiveReading`],
//! which is ephemeral by contract.

#![deny(unsafe_code)]

pub mod config;
pub mod decomposition;
pub mod live;
pub mod profile;
pub mod reading;
pub mod season;
pub mod table;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use config::{
    AnalysisConfig, Parallelism, DEFAULT_WINDOW, SEASONAL_PERIOD, SIGMA_BAND,
};
pub use decomposition::{Decomposition, DecompositionRow};
pub use live::{ConsistencyVerdict, LiveReading};
pub use profile::{SeasonalProfile, SeasonalStat};
pub use reading::{AnalyzedReading, Reading};
pub use season::{ParseSeasonError, Season};
pub use table::{CitySeries, MergedTable, ReadingTable};
