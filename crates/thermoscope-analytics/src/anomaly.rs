//! 2-sigma anomaly flagging over rolling features.

use thermoscope_types::{AnalyzedReading, CitySeries, SIGMA_BAND};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::rolling::{rolling_features, RollingFeature};

/// Whether a temperature falls strictly outside the rolling
/// `mean ± 2·std` band.
///
/// An undefined rolling std (single-point window) never flags: a
/// zero-width band cannot be exceeded meaningfully. This is a
/// convention, not a statistical claim; near-zero std with two or more
/// identical points flags any deviation at all.
pub fn is_anomalous(temperature: f64, feature: &RollingFeature) -> bool {
    match feature.std {
        Some(std) => (temperature - feature.mean).abs() > SIGMA_BAND * std,
        None => false,
    }
}

/// Attach rolling features and anomaly flags to every reading in a
/// series. `features` must come from [`rolling_features`] over the same
/// series.
pub fn flag_anomalies(series: &CitySeries, features: &[RollingFeature]) -> Vec<AnalyzedReading> {
    assert_eq!(
        series.len(),
        features.len(),
        "feature vector must match series length"
    );

    series
        .readings()
        .iter()
        .zip(features)
        .map(|(reading, feature)| AnalyzedReading {
            reading: reading.clone(),
            rolling_mean: Some(feature.mean),
            rolling_std: feature.std,
            anomaly: is_anomalous(reading.temperature, feature),
        })
        .collect()
}

/// Run the full per-partition chain (rolling features, then anomaly
/// flags) for one city's series. This is the unit of work a pipeline
/// worker executes.
///
/// Fails on an empty series or a non-finite temperature; the pipeline
/// validates input ahead of dispatch, so these fire only for direct
/// callers feeding the engine unvalidated data.
pub fn analyze_series(series: &CitySeries, window: usize) -> AnalyticsResult<Vec<AnalyzedReading>> {
    if series.is_empty() {
        return Err(AnalyticsError::EmptySeries {
            city: series.city().to_string(),
        });
    }
    if let Some(bad) = series.readings().iter().find(|r| !r.temperature.is_finite()) {
        return Err(AnalyticsError::NonFiniteTemperature {
            city: series.city().to_string(),
            timestamp: bad.timestamp,
        });
    }

    let features = rolling_features(series, window);
    Ok(flag_anomalies(series, &features))
}
