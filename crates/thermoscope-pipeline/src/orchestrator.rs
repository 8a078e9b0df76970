//! Partitioned fan-out/fan-in over per-city workers.

use std::num::NonZeroUsize;
use std::thread;

use tracing::{debug, info};

use thermoscope_analytics::{analyze_series, AnalyticsError};
use thermoscope_types::{
    AnalysisConfig, AnalyzedReading, CitySeries, MergedTable, Parallelism, ReadingTable,
};

use crate::error::{PipelineError, PipelineResult};
use crate::partition::{partition, validate};

/// Runs the per-city analysis chain across a pool of workers and merges
/// the results into the canonical table.
///
/// Workers own disjoint partitions, so there is no shared mutable state
/// and no locking; the single synchronization point is the join barrier
/// before the merge. Output ordering is `(city, timestamp)` regardless
/// of worker count or completion order.
#[derive(Clone, Debug)]
pub struct Orchestrator {
    config: AnalysisConfig,
}

impl Orchestrator {
    /// Validate the configuration and build an orchestrator.
    pub fn new(config: AnalysisConfig) -> PipelineResult<Self> {
        if config.window == 0 {
            return Err(PipelineError::InvalidConfig {
                reason: "rolling window must be at least 1".to_string(),
            });
        }
        if config.period < 2 {
            return Err(PipelineError::InvalidConfig {
                reason: "seasonal period must be at least 2".to_string(),
            });
        }
        if config.parallelism == Parallelism::Fixed(0) {
            return Err(PipelineError::InvalidConfig {
                reason: "worker count must be at least 1".to_string(),
            });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full pipeline: validate, partition by city, fan out the
    /// rolling/anomaly chain, join, and merge.
    ///
    /// All-or-nothing: any partition failure aborts the invocation with
    /// the failing city named; no partial output is produced.
    pub fn run(&self, table: ReadingTable) -> PipelineResult<MergedTable> {
        validate(&table)?;
        let partitions = partition(table)?;

        let workers = self.worker_count(partitions.len());
        info!(
            cities = partitions.len(),
            workers,
            window = self.config.window,
            "dispatching partition workers"
        );

        // Round-robin cities over the worker pool; each worker handles
        // its chunk sequentially.
        let mut chunks: Vec<Vec<CitySeries>> = (0..workers).map(|_| Vec::new()).collect();
        for (i, series) in partitions.into_iter().enumerate() {
            chunks[i % workers].push(series);
        }

        let window = self.config.window;
        let mut merged_rows: Vec<AnalyzedReading> = Vec::new();

        let chunk_results: Vec<thread::Result<ChunkResult>> = thread::scope(|scope| {
            let handles: Vec<_> = chunks
                .into_iter()
                .map(|chunk| scope.spawn(move || run_chunk(chunk, window)))
                .collect();
            handles.into_iter().map(|h| h.join()).collect()
        });

        for joined in chunk_results {
            let chunk = joined.map_err(|_| PipelineError::WorkerPanic)?;
            let rows =
                chunk.map_err(|(city, source)| PipelineError::PartitionFailure { city, source })?;
            merged_rows.extend(rows);
        }

        let merged = MergedTable::from_unordered(merged_rows);
        debug!(rows = merged.len(), "merged partition output");
        Ok(merged)
    }

    /// Resolve the worker-count policy against the partition count.
    /// Never more workers than partitions.
    fn worker_count(&self, partitions: usize) -> usize {
        let requested = match self.config.parallelism {
            Parallelism::Fixed(n) => n,
            Parallelism::Auto => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        };
        requested.clamp(1, partitions.max(1))
    }
}

type ChunkResult = Result<Vec<AnalyzedReading>, (String, AnalyticsError)>;

/// Worker body: run the rolling/anomaly chain for each city in the
/// chunk, bailing out on the first failure.
fn run_chunk(chunk: Vec<CitySeries>, window: usize) -> ChunkResult {
    let mut out = Vec::new();
    for series in &chunk {
        let rows = analyze_series(series, window)
            .map_err(|e| (series.city().to_string(), e))?;
        out.extend(rows);
    }
    Ok(out)
}

/// Convenience entry point: build an orchestrator for `config` and run
/// it over `table`.
pub fn analyze(table: ReadingTable, config: AnalysisConfig) -> PipelineResult<MergedTable> {
    Orchestrator::new(config)?.run(table)
}
