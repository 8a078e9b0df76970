//! The single abstract retrieval operation consumed by the analytics
//! side.

use std::time::Instant;

use async_trait::async_trait;

use thermoscope_types::{LiveReading, Season};

use crate::client::LiveTemperatureClient;
use crate::error::LiveResult;

/// One Celsius reading for a city, or a failure.
///
/// Whether the round trip blocks a thread or suspends a task is an
/// adapter concern; consumers of this trait only ever see the resolved
/// scalar.
#[async_trait]
pub trait TemperatureSource: Send + Sync {
    async fn current_temperature(&self, city: &str) -> LiveResult<f64>;
}

#[async_trait]
impl TemperatureSource for LiveTemperatureClient {
    async fn current_temperature(&self, city: &str) -> LiveResult<f64> {
        self.fetch_async(city).await
    }
}

/// Fetch a live reading from `source` and stamp it with the season in
/// effect, measuring the round trip at the call site.
pub async fn fetch_reading(
    source: &dyn TemperatureSource,
    city: &str,
    season: Season,
) -> LiveResult<LiveReading> {
    let started = Instant::now();
    let temperature = source.current_temperature(city).await?;
    Ok(LiveReading::from_parts(temperature, started.elapsed(), season))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LiveError;

    struct FixedSource(f64);

    #[async_trait]
    impl TemperatureSource for FixedSource {
        async fn current_temperature(&self, _city: &str) -> LiveResult<f64> {
            Ok(self.0)
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TemperatureSource for FailingSource {
        async fn current_temperature(&self, _city: &str) -> LiveResult<f64> {
            Err(LiveError::Upstream {
                status: 503,
                payload: "unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn fetch_reading_stamps_season_and_elapsed() {
        let reading = fetch_reading(&FixedSource(17.5), "Oslo", Season::Summer)
            .await
            .unwrap();
        assert_eq!(reading.temperature, 17.5);
        assert_eq!(reading.season, Season::Summer);
    }

    #[tokio::test]
    async fn fetch_reading_propagates_failure() {
        let err = fetch_reading(&FailingSource, "Oslo", Season::Summer)
            .await
            .unwrap_err();
        assert!(matches!(err, LiveError::Upstream { status: 503, .. }));
    }
}
