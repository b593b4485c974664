//! Metrics module - guard coverage, footwork activity, session totals
//!
//! Re-exports only. All logic in submodules.

mod percent;
mod defense;
mod footwork;
mod aggregator;

pub use percent::running_percent;
pub use defense::DefenseEvaluator;
pub use footwork::{FootworkEvaluator, FOOTWORK_JOINTS};
pub use aggregator::{MetricsAggregator, SessionStats};
