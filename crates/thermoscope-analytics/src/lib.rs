//! # thermoscope-analytics
//!
//! Statistical engines for the Thermoscope pipeline:
//!
//! - rolling trailing-window mean/std per city
//! - 2-sigma point anomaly flagging over those features
//! - per-(city, season) aggregate profiles
//! - additive trend/seasonal/residual decomposition (fixed 365-step
//!   period)
//! - per-city descriptive summaries
//! - live-reading consistency checks against the seasonal profile
//!
//! Every engine is a pure function over the shared data model; nothing
//! here caches, retries, or mutates its inputs. All failures are scoped
//! to the call that raised them and carry the city/season context
//! needed to diagnose without replaying.

#![deny(unsafe_code)]

pub mod anomaly;
pub mod consistency;
pub mod decompose;
pub mod describe;
pub mod error;
pub mod rolling;
pub mod seasonal;

mod stats;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use anomaly::{analyze_series, flag_anomalies, is_anomalous};
pub use consistency::check_consistency;
pub use decompose::decompose;
pub use describe::{describe, DescriptiveStats};
pub use error::{AnalyticsError, AnalyticsResult};
pub use rolling::{rolling_features, RollingFeature};
pub use seasonal::seasonal_statistics;
