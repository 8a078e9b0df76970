//! Per-(city, season) aggregate statistics over the merged table.

use std::collections::BTreeMap;

use tracing::debug;

use thermoscope_types::{MergedTable, Season, SeasonalProfile, SeasonalStat};

use crate::stats;

/// Group the merged table by `(city, season)` and compute per-group
/// mean and sample standard deviation.
///
/// Only observed combinations are emitted; a single-observation group
/// has `std = None`. Grouping goes through a `BTreeMap`, so repeated
/// runs over an unchanged table produce bit-identical rows in the same
/// city-then-season order.
pub fn seasonal_statistics(table: &MergedTable) -> SeasonalProfile {
    let mut groups: BTreeMap<(String, Season), Vec<f64>> = BTreeMap::new();
    for row in table.rows() {
        groups
            .entry((row.reading.city.clone(), row.reading.season))
            .or_default()
            .push(row.reading.temperature);
    }

    let rows: Vec<SeasonalStat> = groups
        .into_iter()
        .map(|((city, season), temps)| {
            let mean = stats::mean(&temps);
            SeasonalStat {
                city,
                season,
                mean,
                std: stats::sample_std(&temps, mean),
                count: temps.len(),
            }
        })
        .collect();

    debug!(groups = rows.len(), "seasonal aggregation complete");
    SeasonalProfile::from_stats(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use thermoscope_types::{AnalyzedReading, Reading};

    fn row(city: &str, day: u32, temp: f64, season: Season) -> AnalyzedReading {
        AnalyzedReading {
            reading: Reading::new(
                city,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(day as u64),
                temp,
                season,
            ),
            rolling_mean: Some(temp),
            rolling_std: None,
            anomaly: false,
        }
    }

    #[test]
    fn groups_by_city_and_season() {
        let table = MergedTable::from_unordered(vec![
            row("Oslo", 0, -2.0, Season::Winter),
            row("Oslo", 1, -6.0, Season::Winter),
            row("Oslo", 200, 18.0, Season::Summer),
            row("Bergen", 0, 4.0, Season::Winter),
        ]);
        let profile = seasonal_statistics(&table);

        assert_eq!(profile.len(), 3);
        let oslo_winter = profile.get("Oslo", Season::Winter).unwrap();
        assert_eq!(oslo_winter.mean, -4.0);
        assert_eq!(oslo_winter.count, 2);
        // sample std of [-2, -6]: sqrt(8)
        assert!((oslo_winter.std.unwrap() - 8.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn single_observation_group_has_no_spread() {
        let table = MergedTable::from_unordered(vec![row("Oslo", 0, 5.0, Season::Spring)]);
        let profile = seasonal_statistics(&table);
        let stat = profile.get("Oslo", Season::Spring).unwrap();
        assert_eq!(stat.std, None);
        assert_eq!(stat.count, 1);
    }

    #[test]
    fn unobserved_combinations_are_not_synthesized() {
        let table = MergedTable::from_unordered(vec![row("Oslo", 0, 5.0, Season::Spring)]);
        let profile = seasonal_statistics(&table);
        assert!(profile.get("Oslo", Season::Autumn).is_none());
    }

    #[test]
    fn rerun_is_bit_identical() {
        let table = MergedTable::from_unordered(vec![
            row("Oslo", 0, -2.37, Season::Winter),
            row("Oslo", 1, -6.11, Season::Winter),
            row("Bergen", 0, 4.9, Season::Winter),
            row("Bergen", 91, 9.3, Season::Spring),
        ]);
        let first = seasonal_statistics(&table);
        let second = seasonal_statistics(&table);
        assert_eq!(first, second);
    }
}
