//! Prometheus metrics exporter
//!
//! Metrics are rendered on demand by the HTTP layer's `/metrics` route.

use crate::metrics::recorder::init_metrics;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global prometheus handle, or the reason it could not be installed
static PROMETHEUS_HANDLE: OnceLock<Result<PrometheusHandle, String>> = OnceLock::new();

/// Errors that can occur during metrics setup
#[derive(Debug, Clone, thiserror::Error)]
pub enum MetricsError {
    #[error("Failed to setup metrics: {0}")]
    SetupFailed(String),
}

/// Install the Prometheus recorder as the global metrics recorder.
///
/// Safe to call more than once; every call after the first returns the
/// outcome of the first.
pub fn install_recorder() -> Result<&'static PrometheusHandle, MetricsError> {
    let installed = PROMETHEUS_HANDLE.get_or_init(|| {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| e.to_string())?;
        init_metrics();
        Ok(handle)
    });

    installed
        .as_ref()
        .map_err(|e| MetricsError::SetupFailed(e.clone()))
}

/// Render metrics in the Prometheus text format, if a recorder is installed
pub fn render_metrics() -> Option<String> {
    PROMETHEUS_HANDLE
        .get()
        .and_then(|installed| installed.as_ref().ok())
        .map(|handle| handle.render())
}

/// Axum route serving the rendered metrics
pub fn metrics_route() -> axum::routing::MethodRouter {
    axum::routing::get(|| async {
        match render_metrics() {
            Some(metrics) => (
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                metrics,
            )
                .into_response(),
            None => (StatusCode::SERVICE_UNAVAILABLE, "Metrics not initialized").into_response(),
        }
    })
}
