//! Metrics and observability module
//!
//! Prometheus-compatible counters aggregated over every simulation served by
//! the process. Recording is a no-op until a recorder is installed.
//!
//! Key metrics exposed:
//! - Runs started and aborted
//! - Transmissions, retransmissions, losses and corruptions
//! - Run duration and retransmission ratio

pub mod exporter;
pub mod recorder;

pub use exporter::{install_recorder, metrics_route, render_metrics, MetricsError};
pub use recorder::{init_metrics, record_run};
