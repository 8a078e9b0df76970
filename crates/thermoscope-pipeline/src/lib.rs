//! # thermoscope-pipeline
//!
//! The partitioned analysis pipeline: validates the raw reading table,
//! splits it into disjoint per-city partitions, fans the
//! rolling-feature/anomaly chain out over a worker pool, and merges the
//! results into the canonical `(city, timestamp)`-ordered table.
//!
//! The pipeline is stateless and all-or-nothing: a failure in any
//! partition fails the whole invocation, and repeated runs over the
//! same input produce identical output regardless of worker count.

#![deny(unsafe_code)]

pub mod error;
pub mod orchestrator;
pub mod partition;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use error::{PipelineError, PipelineResult};
pub use orchestrator::{analyze, Orchestrator};
pub use partition::partition;
