//! End-to-end Thermoscope demo: a synthetic multi-city dataset through
//! the partitioned pipeline, seasonal profiling, decomposition, and a
//! consistency check against a stubbed live source.
//!
//! Run with `RUST_LOG=debug` for the pipeline's internal tracing.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use thermoscope_analytics::{check_consistency, decompose, describe, seasonal_statistics};
use thermoscope_live::{fetch_reading, LiveResult, TemperatureSource};
use thermoscope_pipeline::analyze;
use thermoscope_types::{
    AnalysisConfig, Reading, ReadingTable, Season, SEASONAL_PERIOD,
};

/// Offline stand-in for the upstream weather service.
struct StubSource {
    temperature: f64,
}

#[async_trait]
impl TemperatureSource for StubSource {
    async fn current_temperature(&self, _city: &str) -> LiveResult<f64> {
        Ok(self.temperature)
    }
}

fn season_of(date: NaiveDate) -> Season {
    match date.month() {
        12 | 1 | 2 => Season::Winter,
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        _ => Season::Autumn,
    }
}

/// Four years of daily readings for three cities: a yearly cycle around
/// a per-city base, bounded noise, and a handful of injected spikes.
fn synthetic_table() -> ReadingTable {
    let mut rng = StdRng::seed_from_u64(42);
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut rows = Vec::new();

    for (city, base) in [("Oslo", 5.0), ("Bergen", 8.0), ("Tromsø", -1.0)] {
        for day in 0..1461u64 {
            let date = start + chrono::Days::new(day);
            let cycle = 11.0 * (2.0 * std::f64::consts::PI * day as f64 / 365.25).sin();
            let noise: f64 = rng.gen_range(-2.0..2.0);
            let spike = if rng.gen_ratio(1, 400) { 18.0 } else { 0.0 };
            rows.push(Reading::new(
                city,
                date,
                base + cycle + noise + spike,
                season_of(date),
            ));
        }
    }

    ReadingTable::new(rows)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let table = synthetic_table();
    info!(rows = table.len(), "generated synthetic dataset");

    let merged = analyze(table, AnalysisConfig::default())?;
    println!("analyzed {} readings across {:?}", merged.len(), merged.cities());
    for city in merged.cities() {
        let anomalies = merged
            .city_rows(city)
            .iter()
            .filter(|r| r.anomaly)
            .count();
        println!("  {city}: {anomalies} anomalous readings");
    }

    let profile = seasonal_statistics(&merged);
    println!("\nseasonal profile:");
    for stat in profile.stats() {
        match stat.std {
            Some(std) => println!(
                "  {}/{}: mean {:+.1} °C, std {:.2} ({} readings)",
                stat.city, stat.season, stat.mean, std, stat.count
            ),
            None => println!(
                "  {}/{}: mean {:+.1} °C, single observation",
                stat.city, stat.season, stat.mean
            ),
        }
    }

    let city = "Oslo";
    let series = merged
        .city_series(city)
        .context("selected city missing from merged table")?;

    let summary = describe(&series)?;
    println!(
        "\n{city} temperatures: min {:+.1}, median {:+.1}, max {:+.1}",
        summary.min, summary.p50, summary.max
    );

    let decomposition = decompose(&series, SEASONAL_PERIOD)?;
    let resid_rms = (decomposition
        .rows
        .iter()
        .map(|r| r.resid * r.resid)
        .sum::<f64>()
        / decomposition.len() as f64)
        .sqrt();
    println!(
        "decomposition over {} points (period {}): residual RMS {:.2} °C",
        decomposition.len(),
        decomposition.period,
        resid_rms
    );

    // Live check against a stubbed reading; swap in
    // `LiveTemperatureClient::new(api_key)` for the real service.
    let season = merged
        .current_season(city)
        .context("selected city has no readings")?;
    let source = StubSource { temperature: 14.0 };
    let live = fetch_reading(&source, city, season).await?;
    let verdict = check_consistency(city, &live, &profile)?;

    println!(
        "\nlive check for {city} ({season}): {:+.1} °C in [{:+.1}, {:+.1}] -> {}  ({:?})",
        verdict.observed,
        verdict.lower,
        verdict.upper,
        if verdict.is_normal { "normal" } else { "anomalous" },
        live.elapsed
    );

    Ok(())
}
