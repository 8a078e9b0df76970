//! Raw and analyzed temperature observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::season::Season;

/// One daily temperature observation for one city.
///
/// Timestamps are calendar dates (one reading per city per day); the
/// ingestion layer has already parsed them and attached the season.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Partition key; all per-entity computation is scoped to one city.
    pub city: String,
    /// Observation date.
    pub timestamp: NaiveDate,
    /// Observed temperature in degrees Celsius.
    pub temperature: f64,
    /// Season label supplied by the caller.
    pub season: Season,
}

impl Reading {
    pub fn new(
        city: impl Into<String>,
        timestamp: NaiveDate,
        temperature: f64,
        season: Season,
    ) -> Self {
        Self {
            city: city.into(),
            timestamp,
            temperature,
            season,
        }
    }
}

/// A reading augmented with its trailing-window features and anomaly flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedReading {
    #[serde(flatten)]
    pub reading: Reading,
    /// Mean of the trailing window ending at this reading.
    pub rolling_mean: Option<f64>,
    /// Sample standard deviation of the same window; `None` for a
    /// single-point window.
    pub rolling_std: Option<f64>,
    /// Whether the temperature falls outside the rolling 2-sigma band.
    pub anomaly: bool,
}
