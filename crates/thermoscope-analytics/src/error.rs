//! Errors from the statistical engines.

use chrono::NaiveDate;
use thermoscope_types::Season;

/// Errors from the statistical engines. Each failure is scoped to the
/// call that raised it and names the city (and season, where relevant)
/// so callers can diagnose without replaying the computation.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("{city}: insufficient history for decomposition: have {have} points, need {need}")]
    InsufficientHistory {
        city: String,
        have: usize,
        need: usize,
    },
    #[error("no seasonal baseline for {city}/{season}")]
    NoBaseline { city: String, season: Season },
    #[error("seasonal baseline for {city}/{season} has a single observation; spread is undefined")]
    UndefinedSpread { city: String, season: Season },
    #[error("{city}: series is empty")]
    EmptySeries { city: String },
    #[error("{city}: non-finite temperature at {timestamp}")]
    NonFiniteTemperature { city: String, timestamp: NaiveDate },
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
