//! Observability sink trait and the request event it receives.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

/// One handled request, as seen by observability sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEvent {
    pub site: String,
    pub method: String,
    pub path: String,
    pub slug: String,
    pub status: u16,
    pub body_size: usize,
    pub elapsed: Duration,
    pub client: Option<IpAddr>,
}

impl RequestEvent {
    /// Whether the request resolved to a redirect.
    pub fn is_found(&self) -> bool {
        self.status != 404
    }
}

/// Receiver of per-request telemetry.
///
/// Called synchronously on the request path after the response is rendered,
/// so implementations must not block.
///
/// # Implementations
///
/// - [`NullSink`] - Discards everything
/// - [`crate::observability::metrics::MetricsSink`] - Prometheus counters and histogram
/// - [`crate::observability::request_log::RequestLogSink`] - One log line per request
/// - [`SinkSet`] - Fan-out to several sinks
#[cfg_attr(test, mockall::automock)]
pub trait ObservabilitySink: Send + Sync {
    fn record(&self, event: &RequestEvent);
}

/// A sink that does nothing.
///
/// Used when both metrics and request logging are disabled.
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservabilitySink for NullSink {
    fn record(&self, _event: &RequestEvent) {}
}

/// Forwards every event to each contained sink, in order.
#[derive(Default)]
pub struct SinkSet {
    sinks: Vec<Arc<dyn ObservabilitySink>>,
}

impl SinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sink: Arc<dyn ObservabilitySink>) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ObservabilitySink for SinkSet {
    fn record(&self, event: &RequestEvent) {
        for sink in &self.sinks {
            sink.record(event);
        }
    }
}
