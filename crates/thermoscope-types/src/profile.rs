//! Seasonal aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::season::Season;

/// Aggregate temperature statistics for one observed `(city, season)`
/// group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonalStat {
    pub city: String,
    pub season: Season,
    /// Mean temperature over the group.
    pub mean: f64,
    /// Sample standard deviation; `None` for a single-observation group.
    pub std: Option<f64>,
    /// Number of readings in the group.
    pub count: usize,
}

/// All observed `(city, season)` groups, in deterministic
/// city-then-season order.
///
/// An immutable snapshot of the merged table, recomputed whenever the
/// table is rematerialized and never updated incrementally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalProfile {
    stats: Vec<SeasonalStat>,
}

impl SeasonalProfile {
    /// Build from stats already in `(city, season)` order. The
    /// aggregator is the only producer.
    pub fn from_stats(stats: Vec<SeasonalStat>) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &[SeasonalStat] {
        &self.stats
    }

    /// Look up the baseline row for one `(city, season)` pair.
    pub fn get(&self, city: &str, season: Season) -> Option<&SeasonalStat> {
        self.stats
            .iter()
            .find(|s| s.city == city && s.season == season)
    }

    /// All groups observed for one city.
    pub fn for_city<'a>(&'a self, city: &'a str) -> impl Iterator<Item = &'a SeasonalStat> {
        self.stats.iter().filter(move |s| s.city == city)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
