//! Observability: runtime counters and sink abstractions.
//!
//! The comparison engine itself records nothing; only the condition layer
//! reports events here.

pub(crate) mod metrics;
pub(crate) mod sink;


// re-exports
pub use metrics::{ConditionCounters, EventReport, OpCounters, PathCounters};
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink};
