//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! RedirectService::handle
//!     → ObservabilitySink::record(RequestEvent)
//!         → MetricsSink     (gogo_* counters and histogram)
//!         → RequestLogSink  (one INFO line per request)
//!
//! Consumers:
//!     → metrics route (Prometheus scrape)
//!     → stdout (text or JSON logs)
//! ```
//!
//! Metrics and request logging are toggled at startup by choosing which sinks
//! to build; the request path never branches on configuration.

pub mod logging;
pub mod metrics;
pub mod request_log;
pub mod sink;

use std::sync::Arc;

pub use self::metrics::MetricsSink;
pub use request_log::RequestLogSink;
pub use sink::{NullSink, ObservabilitySink, RequestEvent, SinkSet};

/// Builds the sink for the enabled observability features.
///
/// Returns a [`NullSink`] when nothing is enabled.
pub fn build_sink(metrics_enabled: bool, request_log_enabled: bool) -> Arc<dyn ObservabilitySink> {
    let mut sinks = SinkSet::new();

    if metrics_enabled {
        sinks.push(Arc::new(MetricsSink::new()));
    }
    if request_log_enabled {
        sinks.push(Arc::new(RequestLogSink::new()));
    }

    if sinks.is_empty() {
        tracing::debug!("Using NullSink (metrics and request logging disabled)");
        Arc::new(NullSink::new())
    } else {
        Arc::new(sinks)
    }
}
