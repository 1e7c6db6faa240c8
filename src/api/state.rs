//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::DrawService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Draw service.
    pub draw_service: Arc<DrawService>,
    /// Prometheus handle, present when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let draw_service = Arc::new(DrawService::new(&config.draw, &config.reveal));

        Self {
            config,
            draw_service,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the metrics endpoint.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
