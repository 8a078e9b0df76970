//! Input, per-city, and merged tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reading::{AnalyzedReading, Reading};
use crate::season::Season;

/// The raw input table handed over by the ingestion layer.
///
/// Rows arrive in no particular order; the pipeline validates and
/// partitions them before any computation happens.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingTable {
    rows: Vec<Reading>,
}

impl ReadingTable {
    pub fn new(rows: Vec<Reading>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Reading] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Reading> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Reading> for ReadingTable {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One city's readings, sorted ascending by timestamp.
///
/// Invariant: timestamps are unique within the series. The pipeline's
/// partitioner enforces this before constructing a series; `new` sorts
/// but does not deduplicate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CitySeries {
    city: String,
    readings: Vec<Reading>,
}

impl CitySeries {
    /// Build a series from one city's rows, sorting by timestamp.
    pub fn new(city: impl Into<String>, mut readings: Vec<Reading>) -> Self {
        readings.sort_by_key(|r| r.timestamp);
        Self {
            city: city.into(),
            readings,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Temperatures in timestamp order.
    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().map(|r| r.temperature)
    }

    /// Season of the most recent reading: the season "in effect" for
    /// a live check against this city.
    pub fn last_season(&self) -> Option<Season> {
        self.readings.last().map(|r| r.season)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// The canonical merged output table: every analyzed reading from every
/// partition, sorted by `(city, timestamp)` ascending.
///
/// The ordering is independent of worker count and completion order, so
/// two runs over the same input compare equal row for row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedTable {
    rows: Vec<AnalyzedReading>,
}

impl MergedTable {
    /// Build from unordered per-partition output, sorting into the
    /// canonical `(city, timestamp)` order.
    pub fn from_unordered(mut rows: Vec<AnalyzedReading>) -> Self {
        rows.sort_by(|a, b| {
            (a.reading.city.as_str(), a.reading.timestamp)
                .cmp(&(b.reading.city.as_str(), b.reading.timestamp))
        });
        Self { rows }
    }

    pub fn rows(&self) -> &[AnalyzedReading] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct cities in table order.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = Vec::new();
        for row in &self.rows {
            if cities.last() != Some(&row.reading.city.as_str()) {
                cities.push(&row.reading.city);
            }
        }
        cities
    }

    /// The contiguous slice of rows belonging to one city.
    pub fn city_rows(&self, city: &str) -> &[AnalyzedReading] {
        let start = self
            .rows
            .partition_point(|r| r.reading.city.as_str() < city);
        let end = self
            .rows
            .partition_point(|r| r.reading.city.as_str() <= city);
        &self.rows[start..end]
    }

    /// Reconstruct one city's raw series, e.g. as decomposition input.
    pub fn city_series(&self, city: &str) -> Option<CitySeries> {
        let rows = self.city_rows(city);
        if rows.is_empty() {
            return None;
        }
        Some(CitySeries::new(
            city,
            rows.iter().map(|r| r.reading.clone()).collect(),
        ))
    }

    /// Rows flagged anomalous, for downstream presentation.
    pub fn anomalies(&self) -> impl Iterator<Item = &AnalyzedReading> {
        self.rows.iter().filter(|r| r.anomaly)
    }

    /// Season of the city's most recent reading, or `None` for an
    /// unknown city.
    pub fn current_season(&self, city: &str) -> Option<Season> {
        self.city_rows(city).last().map(|r| r.reading.season)
    }

    /// Most recent timestamp for a city.
    pub fn latest_timestamp(&self, city: &str) -> Option<NaiveDate> {
        self.city_rows(city).last().map(|r| r.reading.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn analyzed(city: &str, day: u32, temp: f64) -> AnalyzedReading {
        AnalyzedReading {
            reading: Reading::new(city, date(day), temp, Season::Winter),
            rolling_mean: Some(temp),
            rolling_std: None,
            anomaly: false,
        }
    }

    #[test]
    fn city_series_sorts_by_timestamp() {
        let series = CitySeries::new(
            "Oslo",
            vec![
                Reading::new("Oslo", date(3), 1.0, Season::Winter),
                Reading::new("Oslo", date(1), 2.0, Season::Winter),
                Reading::new("Oslo", date(2), 3.0, Season::Winter),
            ],
        );
        let days: Vec<u32> = series
            .readings()
            .iter()
            .map(|r| {
                use chrono::Datelike;
                r.timestamp.day()
            })
            .collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn merged_table_sorts_by_city_then_timestamp() {
        let table = MergedTable::from_unordered(vec![
            analyzed("Oslo", 2, 1.0),
            analyzed("Bergen", 1, 2.0),
            analyzed("Oslo", 1, 3.0),
        ]);
        let keys: Vec<(&str, NaiveDate)> = table
            .rows()
            .iter()
            .map(|r| (r.reading.city.as_str(), r.reading.timestamp))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Bergen", date(1)),
                ("Oslo", date(1)),
                ("Oslo", date(2)),
            ]
        );
    }

    #[test]
    fn merged_table_city_rows_slices_one_city() {
        let table = MergedTable::from_unordered(vec![
            analyzed("Oslo", 1, 1.0),
            analyzed("Bergen", 1, 2.0),
            analyzed("Oslo", 2, 3.0),
        ]);
        assert_eq!(table.city_rows("Oslo").len(), 2);
        assert_eq!(table.city_rows("Bergen").len(), 1);
        assert!(table.city_rows("Tromsø").is_empty());
        assert_eq!(table.cities(), vec!["Bergen", "Oslo"]);
    }

    #[test]
    fn merged_table_current_season_is_latest_row() {
        let mut spring = analyzed("Oslo", 2, 5.0);
        spring.reading.season = Season::Spring;
        let table = MergedTable::from_unordered(vec![analyzed("Oslo", 1, 1.0), spring]);
        assert_eq!(table.current_season("Oslo"), Some(Season::Spring));
        assert_eq!(table.current_season("Bergen"), None);
    }
}
