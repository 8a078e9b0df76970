//! Errors from the partitioned pipeline.

use thermoscope_analytics::AnalyticsError;

/// Errors from a pipeline invocation. Every failure aborts the whole
/// run; there is no partial-result mode.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input table failed validation before partitioning.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// One city's computation failed; the whole invocation fails with
    /// it.
    #[error("partition {city} failed")]
    PartitionFailure {
        city: String,
        #[source]
        source: AnalyticsError,
    },

    /// A worker thread panicked. The panic payload is lost across the
    /// join boundary, so only the fact is reported.
    #[error("analysis worker panicked")]
    WorkerPanic,

    /// The orchestrator was constructed with an unusable configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
