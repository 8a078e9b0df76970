//! Additive trend/seasonal/residual decomposition with a fixed yearly
//! period.

use tracing::debug;

use thermoscope_types::{CitySeries, Decomposition, DecompositionRow};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::stats;

/// Decompose one city's series into additive trend, seasonal, and
/// residual components over a fixed `period`.
///
/// - Trend: centered moving average with half-window `period / 2`; the
///   window shrinks symmetrically at the series edges so every
///   timestamp receives a trend value.
/// - Seasonal: mean of the detrended values at each cycle position,
///   centered so one full cycle sums to zero.
/// - Residual: whatever remains, so
///   `trend + seasonal + resid` reconstructs the observation exactly.
///
/// Requires at least two full cycles of data; with fewer points the
/// engine fails rather than extrapolate. The result is recomputed in
/// full on every call; callers own any caching.
pub fn decompose(series: &CitySeries, period: usize) -> AnalyticsResult<Decomposition> {
    assert!(period >= 2, "seasonal period must be at least 2");

    let n = series.len();
    let need = 2 * period;
    if n < need {
        return Err(AnalyticsError::InsufficientHistory {
            city: series.city().to_string(),
            have: n,
            need,
        });
    }
    if let Some(bad) = series.readings().iter().find(|r| !r.temperature.is_finite()) {
        return Err(AnalyticsError::NonFiniteTemperature {
            city: series.city().to_string(),
            timestamp: bad.timestamp,
        });
    }

    let temps: Vec<f64> = series.temperatures().collect();

    // Centered moving average; reach shrinks near the edges to stay
    // symmetric around i.
    let half = period / 2;
    let mut trend = Vec::with_capacity(n);
    for i in 0..n {
        let reach = half.min(i).min(n - 1 - i);
        trend.push(stats::mean(&temps[i - reach..=i + reach]));
    }

    // Cycle-position means of the detrended series.
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for i in 0..n {
        sums[i % period] += temps[i] - trend[i];
        counts[i % period] += 1;
    }
    let mut seasonal: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(sum, &count)| sum / count as f64)
        .collect();

    // Center so the seasonal component sums to zero over one cycle;
    // any level shift belongs to the trend.
    let offset = stats::mean(&seasonal);
    for s in &mut seasonal {
        *s -= offset;
    }

    let rows: Vec<DecompositionRow> = series
        .readings()
        .iter()
        .enumerate()
        .map(|(i, reading)| {
            let seasonal_i = seasonal[i % period];
            DecompositionRow {
                timestamp: reading.timestamp,
                trend: trend[i],
                seasonal: seasonal_i,
                resid: temps[i] - trend[i] - seasonal_i,
            }
        })
        .collect();

    debug!(
        city = series.city(),
        points = n,
        period,
        "decomposition complete"
    );

    Ok(Decomposition {
        city: series.city().to_string(),
        period,
        rows,
    })
}
