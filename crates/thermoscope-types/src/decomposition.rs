//! Additive trend/seasonal/residual decomposition output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Additive components for one timestamp:
/// `trend + seasonal + resid ≈ temperature`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecompositionRow {
    pub timestamp: NaiveDate,
    pub trend: f64,
    pub seasonal: f64,
    pub resid: f64,
}

impl DecompositionRow {
    /// Sum of the components; should match the observed temperature.
    pub fn reconstructed(&self) -> f64 {
        self.trend + self.seasonal + self.resid
    }
}

/// Full decomposition of one city's series, one row per input
/// timestamp. Computed on demand and never cached by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    pub city: String,
    /// Seasonal cycle length in steps.
    pub period: usize,
    pub rows: Vec<DecompositionRow>,
}

impl Decomposition {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
