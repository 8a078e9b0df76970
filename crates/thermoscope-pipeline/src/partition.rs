//! Input validation and exhaustive per-city partitioning.

use std::collections::BTreeMap;

use thermoscope_types::{CitySeries, Reading, ReadingTable};

use crate::error::{PipelineError, PipelineResult};

/// Validate the raw table ahead of partitioning.
///
/// Rejects an empty table, rows with an empty city name, and non-finite
/// temperatures. Duplicate timestamps are caught during partitioning,
/// once rows are grouped and sorted.
pub(crate) fn validate(table: &ReadingTable) -> PipelineResult<()> {
    if table.is_empty() {
        return Err(PipelineError::MalformedInput {
            reason: "input table is empty".to_string(),
        });
    }

    for row in table.rows() {
        if row.city.trim().is_empty() {
            return Err(PipelineError::MalformedInput {
                reason: format!("row at {} has an empty city name", row.timestamp),
            });
        }
        if !row.temperature.is_finite() {
            return Err(PipelineError::MalformedInput {
                reason: format!(
                    "non-finite temperature for {} at {}",
                    row.city, row.timestamp
                ),
            });
        }
    }

    Ok(())
}

/// Partition the table into disjoint per-city series.
///
/// Exhaustive: every input row lands in exactly one partition, and the
/// union of partitions is the input. Partitions come back in city
/// order, each sorted by timestamp with uniqueness enforced.
pub fn partition(table: ReadingTable) -> PipelineResult<Vec<CitySeries>> {
    let mut by_city: BTreeMap<String, Vec<Reading>> = BTreeMap::new();
    for row in table.into_rows() {
        by_city.entry(row.city.clone()).or_default().push(row);
    }

    let mut partitions = Vec::with_capacity(by_city.len());
    for (city, rows) in by_city {
        let series = CitySeries::new(city, rows);
        if let Some(pair) = series
            .readings()
            .windows(2)
            .find(|pair| pair[0].timestamp == pair[1].timestamp)
        {
            return Err(PipelineError::MalformedInput {
                reason: format!(
                    "duplicate timestamp {} for city {}",
                    pair[0].timestamp,
                    series.city()
                ),
            });
        }
        partitions.push(series);
    }

    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use thermoscope_types::Season;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn reading(city: &str, day: u32, temp: f64) -> Reading {
        Reading::new(city, date(day), temp, Season::Winter)
    }

    #[test]
    fn partitions_are_exhaustive_and_sorted() {
        let table = ReadingTable::new(vec![
            reading("Oslo", 2, 1.0),
            reading("Bergen", 1, 4.0),
            reading("Oslo", 1, 2.0),
        ]);
        let partitions = partition(table).unwrap();

        assert_eq!(partitions.len(), 2);
        assert_eq!(partitions[0].city(), "Bergen");
        assert_eq!(partitions[1].city(), "Oslo");
        assert_eq!(partitions[1].readings()[0].timestamp, date(1));
        assert_eq!(
            partitions.iter().map(|p| p.len()).sum::<usize>(),
            3,
            "no rows created or dropped"
        );
    }

    #[test]
    fn duplicate_timestamp_within_a_city_is_rejected() {
        let table = ReadingTable::new(vec![
            reading("Oslo", 1, 1.0),
            reading("Oslo", 1, 2.0),
        ]);
        let err = partition(table).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedInput { .. }));
        assert!(format!("{err}").contains("duplicate timestamp"));
    }

    #[test]
    fn same_timestamp_across_cities_is_fine() {
        let table = ReadingTable::new(vec![
            reading("Oslo", 1, 1.0),
            reading("Bergen", 1, 2.0),
        ]);
        assert_eq!(partition(table).unwrap().len(), 2);
    }

    #[test]
    fn validation_rejects_empty_table() {
        let err = validate(&ReadingTable::default()).unwrap_err();
        assert!(format!("{err}").contains("empty"));
    }

    #[test]
    fn validation_rejects_nan_temperature() {
        let table = ReadingTable::new(vec![reading("Oslo", 1, f64::NAN)]);
        let err = validate(&table).unwrap_err();
        assert!(format!("{err}").contains("non-finite"));
    }

    #[test]
    fn validation_rejects_blank_city() {
        let table = ReadingTable::new(vec![reading("  ", 1, 3.0)]);
        assert!(validate(&table).is_err());
    }
}
