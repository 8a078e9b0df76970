//! Trailing-window mean and standard deviation over one city's series.

use thermoscope_types::CitySeries;

use crate::stats;

/// Rolling mean/std pair attached to one reading.
///
/// `std` is `None` for a single-point window: one sample has no
/// variance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RollingFeature {
    pub mean: f64,
    pub std: Option<f64>,
}

/// Compute trailing-window features for every reading in the series.
///
/// The window at index `i` covers indices `max(0, i+1-w) ..= i`: up to
/// `w` trailing points, at least one, with no warm-up gap. The series
/// must already be sorted by timestamp (a `CitySeries` invariant); the
/// engine never crosses city boundaries.
///
/// `window` must be at least 1; the orchestrator's config validation
/// rejects zero before dispatch.
pub fn rolling_features(series: &CitySeries, window: usize) -> Vec<RollingFeature> {
    assert!(window >= 1, "rolling window must be at least 1");

    let temps: Vec<f64> = series.temperatures().collect();
    let mut features = Vec::with_capacity(temps.len());

    for i in 0..temps.len() {
        let start = (i + 1).saturating_sub(window);
        let slice = &temps[start..=i];
        let mean = stats::mean(slice);
        features.push(RollingFeature {
            mean,
            std: stats::sample_std(slice, mean),
        });
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use thermoscope_types::{Reading, Season};

    fn series_of(temps: &[f64]) -> CitySeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        CitySeries::new(
            "Oslo",
            temps
                .iter()
                .enumerate()
                .map(|(i, &t)| {
                    Reading::new(
                        "Oslo",
                        start + chrono::Days::new(i as u64),
                        t,
                        Season::Winter,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn first_point_window_has_size_one() {
        let features = rolling_features(&series_of(&[5.0, 7.0]), 30);
        assert_eq!(features[0].mean, 5.0);
        assert_eq!(features[0].std, None);
    }

    #[test]
    fn window_of_one_reproduces_temperatures() {
        let temps = [3.0, -1.5, 8.0];
        let features = rolling_features(&series_of(&temps), 1);
        for (f, t) in features.iter().zip(temps) {
            assert_eq!(f.mean, t);
            assert_eq!(f.std, None);
        }
    }

    #[test]
    fn trailing_window_math() {
        // window 3 over [1, 2, 3, 4]
        let features = rolling_features(&series_of(&[1.0, 2.0, 3.0, 4.0]), 3);
        assert_eq!(features[1].mean, 1.5);
        assert_eq!(features[2].mean, 2.0);
        assert_eq!(features[3].mean, 3.0);
        // window [2,3,4]: sample std = 1
        assert!((features[3].std.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn window_larger_than_series_uses_all_points() {
        let features = rolling_features(&series_of(&[1.0, 3.0]), 100);
        assert_eq!(features[1].mean, 2.0);
        assert!(features[1].std.is_some());
    }

    proptest! {
        #[test]
        fn rolling_mean_equals_naive_trailing_mean(
            temps in prop::collection::vec(-50.0f64..50.0, 1..120),
            window in 1usize..40,
        ) {
            let features = rolling_features(&series_of(&temps), window);
            for (i, f) in features.iter().enumerate() {
                let start = (i + 1).saturating_sub(window);
                let slice = &temps[start..=i];
                let naive = slice.iter().sum::<f64>() / slice.len() as f64;
                prop_assert!((f.mean - naive).abs() < 1e-9);
                prop_assert_eq!(f.std.is_none(), slice.len() == 1);
            }
        }

        #[test]
        fn rolling_mean_bounded_by_window_extremes(
            temps in prop::collection::vec(-50.0f64..50.0, 1..120),
            window in 1usize..40,
        ) {
            let features = rolling_features(&series_of(&temps), window);
            for (i, f) in features.iter().enumerate() {
                let start = (i + 1).saturating_sub(window);
                let slice = &temps[start..=i];
                let lo = slice.iter().cloned().fold(f64::INFINITY, f64::min);
                let hi = slice.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(f.mean >= lo - 1e-9 && f.mean <= hi + 1e-9);
            }
        }
    }
}
