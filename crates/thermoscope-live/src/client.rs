//! HTTP client for the upstream current-weather service.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::debug;

use crate::error::{LiveError, LiveResult};

/// Default endpoint of the upstream current-weather service.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Round-trip budget for one retrieval.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Success payload shape: `{ "main": { "temp": <celsius> } }`. Every
/// other field is ignored.
#[derive(Debug, Deserialize)]
struct WeatherBody {
    main: Option<MainSection>,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: Option<f64>,
}

/// Client for fetching one live Celsius reading per call.
///
/// Offers the same retrieval through two disciplines: `fetch_async`
/// suspends the calling task for the round trip, `fetch_sync` occupies
/// the calling thread. Both produce the same logical result and report
/// upstream failures identically.
pub struct LiveTemperatureClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LiveTemperatureClient {
    /// Build a client against the default upstream endpoint.
    pub fn new(api_key: impl Into<String>) -> LiveResult<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Build a client against a custom endpoint (stub servers in tests,
    /// regional mirrors in deployment).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> LiveResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Fetch the current temperature, suspending the calling task for
    /// the round trip.
    pub async fn fetch_async(&self, city: &str) -> LiveResult<f64> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&self.query(city))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        let temp = decode_payload(status.as_u16(), status.is_success(), &body)?;
        debug!(city, temp, "fetched live temperature (async)");
        Ok(temp)
    }

    /// `fetch_async` plus the measured round-trip time.
    pub async fn fetch_async_timed(&self, city: &str) -> LiveResult<(f64, Duration)> {
        let started = Instant::now();
        let temp = self.fetch_async(city).await?;
        Ok((temp, started.elapsed()))
    }

    /// Fetch the current temperature, occupying the calling thread for
    /// the round trip.
    ///
    /// Must not be called from inside an async runtime; async callers
    /// use [`fetch_async`](Self::fetch_async) instead.
    pub fn fetch_sync(&self, city: &str) -> LiveResult<f64> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response = client.get(&self.base_url).query(&self.query(city)).send()?;
        let status = response.status();
        let body = response.text()?;
        let temp = decode_payload(status.as_u16(), status.is_success(), &body)?;
        debug!(city, temp, "fetched live temperature (sync)");
        Ok(temp)
    }

    /// `fetch_sync` plus the measured round-trip time.
    pub fn fetch_sync_timed(&self, city: &str) -> LiveResult<(f64, Duration)> {
        let started = Instant::now();
        let temp = self.fetch_sync(city)?;
        Ok((temp, started.elapsed()))
    }

    fn query<'a>(&'a self, city: &'a str) -> [(&'static str, &'a str); 3] {
        [
            ("q", city),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
        ]
    }
}

/// Decode one upstream response into a Celsius scalar.
///
/// A non-success status surfaces the body verbatim as failure context;
/// a success body must carry `main.temp`.
fn decode_payload(status: u16, success: bool, body: &str) -> LiveResult<f64> {
    if !success {
        return Err(LiveError::Upstream {
            status,
            payload: body.to_string(),
        });
    }

    let parsed: WeatherBody =
        serde_json::from_str(body).map_err(|e| LiveError::MalformedPayload {
            reason: e.to_string(),
        })?;

    parsed
        .main
        .and_then(|m| m.temp)
        .ok_or_else(|| LiveError::MalformedPayload {
            reason: "missing main.temp".to_string(),
        })
}
