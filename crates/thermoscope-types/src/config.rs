//! Pipeline configuration surface.

use serde::{Deserialize, Serialize};

/// Width of every tolerance band in the system, in standard deviations.
///
/// Shared by the rolling anomaly detector and the live consistency
/// checker; the two thresholds are not configurable independently.
pub const SIGMA_BAND: f64 = 2.0;

/// Default trailing-window size for rolling features.
pub const DEFAULT_WINDOW: usize = 30;

/// Seasonal cycle length in steps for daily data.
pub const SEASONAL_PERIOD: usize = 365;

/// Worker-count policy for the partitioned pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parallelism {
    /// Use all available parallelism, clamped to the partition count.
    Auto,
    /// Use exactly this many workers (clamped to the partition count).
    /// Zero is rejected at orchestrator construction.
    Fixed(usize),
}

/// Tuning knobs for one pipeline invocation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Trailing-window size for rolling mean/std. Must be at least 1.
    pub window: usize,
    /// Seasonal period for decomposition. Must be at least 2.
    pub period: usize,
    /// Worker-count policy.
    pub parallelism: Parallelism,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            period: SEASONAL_PERIOD,
            parallelism: Parallelism::Auto,
        }
    }
}
