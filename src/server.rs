//! HTTP server initialization and runtime setup.
//!
//! Handles content loading, redirect table construction, observability wiring
//! and the Axum server lifecycle.

use crate::application::services::RedirectService;
use crate::config::Config;
use crate::domain::{Resolver, ResponseContent};
use crate::observability;
use crate::routes::{RoutePaths, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Response content (file overrides or built-in defaults)
/// - Redirect tables from the process environment
/// - Prometheus recorder (unless disabled)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The metrics recorder cannot be installed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    config.print_summary();

    let content = ResponseContent::load(
        config.not_found_filename.as_deref(),
        config.found_filename.as_deref(),
    );

    let resolver = Resolver::from_env(&config.prefixes());
    log_redirects(&resolver);

    let metrics_handle = if config.metrics_enabled() {
        let handle = observability::metrics::install_recorder()
            .context("Failed to install Prometheus recorder")?;
        Some(handle)
    } else {
        None
    };

    let sink = observability::build_sink(config.metrics_enabled(), config.request_log_enabled());

    let redirect_service = Arc::new(RedirectService::new(
        config.site.clone(),
        Arc::new(resolver),
        Arc::new(content),
        sink,
    ));
    tracing::info!("  Redirect count: {}", redirect_service.redirect_count());

    let state = AppState::new(redirect_service, metrics_handle);

    let paths = RoutePaths {
        health: config.health_url.clone(),
        metrics: config.metrics_enabled().then(|| config.metrics_url.clone()),
    };
    let app = app_router(state, &paths);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Logs every configured redirect at debug level.
///
/// Destinations that do not parse as absolute URLs are still served, but
/// flagged since browsers resolve them relative to the redirect host.
fn log_redirects(resolver: &Resolver) {
    for (kind, slug, destination) in resolver.entries() {
        tracing::debug!("  /{} -> {} ({})", slug, destination, kind);

        if let Err(e) = Url::parse(destination) {
            tracing::warn!(
                "Destination for /{} is not an absolute URL ({}): {}",
                slug,
                e,
                destination
            );
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
