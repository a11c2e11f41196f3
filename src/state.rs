//! Shared application state injected into every handler.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::application::services::RedirectService;

#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    /// Present only when metrics are enabled.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        redirect_service: Arc<RedirectService>,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            redirect_service,
            metrics_handle,
        }
    }
}
