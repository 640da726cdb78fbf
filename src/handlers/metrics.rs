use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;

use crate::AppState;

pub struct MetricsState {
    pub handle: PrometheusHandle,
}

const LATENCY_BUCKETS: [f64; 11] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

fn builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &LATENCY_BUCKETS,
    )
}

/// Install the Prometheus recorder as the global `metrics` recorder
pub fn setup_metrics_recorder() -> Result<MetricsState, BuildError> {
    let handle = builder()?.install_recorder()?;
    Ok(MetricsState { handle })
}

/// A recorder that is never installed globally, for router tests
#[cfg(test)]
pub fn detached_metrics_state() -> MetricsState {
    let recorder = builder().unwrap().build_recorder();
    MetricsState {
        handle: recorder.handle(),
    }
}

/// GET /metrics
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let metrics = state.metrics.handle.render();
    (StatusCode::OK, metrics)
}
