//! Live-reading reconciliation against the seasonal baseline.

use tracing::debug;

use thermoscope_types::{ConsistencyVerdict, LiveReading, SeasonalProfile, SIGMA_BAND};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Decide whether a live temperature is normal for the city's current
/// season: `is_normal = (mean - 2·std) ≤ observed ≤ (mean + 2·std)`,
/// inclusive at both ends.
///
/// Fails with [`AnalyticsError::NoBaseline`] when the profile has no
/// row for the `(city, season)` pair, and with
/// [`AnalyticsError::UndefinedSpread`] when the matching group holds a
/// single observation. A band of unknown width is a failed check, not
/// a guess.
pub fn check_consistency(
    city: &str,
    live: &LiveReading,
    profile: &SeasonalProfile,
) -> AnalyticsResult<ConsistencyVerdict> {
    let stat = profile
        .get(city, live.season)
        .ok_or_else(|| AnalyticsError::NoBaseline {
            city: city.to_string(),
            season: live.season,
        })?;

    let std = stat.std.ok_or_else(|| AnalyticsError::UndefinedSpread {
        city: city.to_string(),
        season: live.season,
    })?;

    let lower = stat.mean - SIGMA_BAND * std;
    let upper = stat.mean + SIGMA_BAND * std;
    let is_normal = lower <= live.temperature && live.temperature <= upper;

    debug!(
        city,
        season = %live.season,
        observed = live.temperature,
        lower,
        upper,
        is_normal,
        elapsed_ms = live.elapsed.as_millis() as u64,
        "consistency check"
    );

    Ok(ConsistencyVerdict {
        is_normal,
        observed: live.temperature,
        lower,
        upper,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use thermoscope_types::{Season, SeasonalStat};

    fn profile(mean: f64, std: Option<f64>) -> SeasonalProfile {
        SeasonalProfile::from_stats(vec![SeasonalStat {
            city: "Oslo".into(),
            season: Season::Winter,
            mean,
            std,
            count: if std.is_some() { 90 } else { 1 },
        }])
    }

    fn live(temperature: f64) -> LiveReading {
        LiveReading::from_parts(temperature, Duration::from_millis(120), Season::Winter)
    }

    #[test]
    fn band_edge_is_inclusive() {
        // mean 15, std 2: band is [11, 19]
        let profile = profile(15.0, Some(2.0));
        let verdict = check_consistency("Oslo", &live(19.0), &profile).unwrap();
        assert!(verdict.is_normal);
        assert_eq!(verdict.upper, 19.0);

        let verdict = check_consistency("Oslo", &live(19.01), &profile).unwrap();
        assert!(!verdict.is_normal);
        assert_eq!(verdict.observed, 19.01);
    }

    #[test]
    fn lower_edge_is_inclusive() {
        let profile = profile(15.0, Some(2.0));
        assert!(check_consistency("Oslo", &live(11.0), &profile)
            .unwrap()
            .is_normal);
        assert!(!check_consistency("Oslo", &live(10.99), &profile)
            .unwrap()
            .is_normal);
    }

    #[test]
    fn missing_group_fails_with_no_baseline() {
        let profile = profile(15.0, Some(2.0));
        let err = check_consistency("Bergen", &live(12.0), &profile).unwrap_err();
        assert!(matches!(err, AnalyticsError::NoBaseline { .. }));
    }

    #[test]
    fn single_observation_group_fails_with_undefined_spread() {
        let profile = profile(15.0, None);
        let err = check_consistency("Oslo", &live(15.0), &profile).unwrap_err();
        assert!(matches!(err, AnalyticsError::UndefinedSpread { .. }));
    }
}
