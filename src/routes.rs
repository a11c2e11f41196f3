//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `ANY  /health`   - Health check, 204 (path configurable)
//! - `ANY  /metrics`  - Prometheus exposition (path configurable, metrics enabled only)
//! - `ANY  /*`        - Slug redirect (fallback)
//!
//! # Middleware
//!
//! - **Tracing** - Request spans at debug level

use axum::Router;
use axum::routing::any;

use crate::api::handlers::{health_handler, metrics_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Paths of the non-redirect routes.
#[derive(Debug, Clone)]
pub struct RoutePaths {
    pub health: String,
    /// `None` disables the metrics route.
    pub metrics: Option<String>,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            health: "/health".to_string(),
            metrics: Some("/metrics".to_string()),
        }
    }
}

/// Constructs the application router with all routes and middleware.
///
/// Every request that does not hit the health or metrics path is handed to
/// [`redirect_handler`], including `/` and nested paths.
pub fn app_router(state: AppState, paths: &RoutePaths) -> Router {
    let mut router = Router::new().route(&paths.health, any(health_handler));

    if let Some(metrics_path) = &paths.metrics {
        router = router.route(metrics_path, any(metrics_handler));
    }

    router
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer())
}
