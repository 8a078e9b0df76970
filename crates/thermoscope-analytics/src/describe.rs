//! Per-city descriptive summary of observed temperatures.

use serde::{Deserialize, Serialize};

use thermoscope_types::CitySeries;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::stats;

/// Five-number-plus summary of one city's temperatures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` below two observations.
    pub std: Option<f64>,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

/// Summarize one city's temperatures. Quartiles use linear
/// interpolation between order statistics.
pub fn describe(series: &CitySeries) -> AnalyticsResult<DescriptiveStats> {
    if series.is_empty() {
        return Err(AnalyticsError::EmptySeries {
            city: series.city().to_string(),
        });
    }

    let mut sorted: Vec<f64> = series.temperatures().collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = stats::mean(&sorted);
    Ok(DescriptiveStats {
        count: sorted.len(),
        mean,
        std: stats::sample_std(&sorted, mean),
        min: sorted[0],
        p25: quantile(&sorted, 0.25),
        p50: quantile(&sorted, 0.50),
        p75: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Linear-interpolation quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lo = position.floor() as usize;
    let frac = position - lo as f64;
    if lo + 1 < sorted.len() {
        sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
    } else {
        sorted[lo]
    }
}
