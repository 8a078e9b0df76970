//! Live reading and consistency verdict types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::season::Season;

/// A just-fetched live temperature, consumed immediately by the
/// consistency check and never stored.
///
/// `elapsed` is the round-trip time measured at the call site; it rides
/// along for logging and display, not for any decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveReading {
    /// Observed temperature in degrees Celsius.
    pub temperature: f64,
    /// Round-trip time of the retrieval call.
    pub elapsed: Duration,
    /// Season in effect: the season of the city's most recent
    /// historical reading.
    pub season: Season,
}

impl LiveReading {
    pub fn from_parts(temperature: f64, elapsed: Duration, season: Season) -> Self {
        Self {
            temperature,
            elapsed,
            season,
        }
    }
}

/// Outcome of reconciling a live reading against its seasonal baseline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyVerdict {
    /// Whether the observed temperature lies inside the seasonal band
    /// (inclusive at both ends).
    pub is_normal: bool,
    /// The observed live temperature.
    pub observed: f64,
    /// Lower edge of the band: `mean - 2·std`.
    pub lower: f64,
    /// Upper edge of the band: `mean + 2·std`.
    pub upper: f64,
}
