//! Per-request access log.

use super::sink::{ObservabilitySink, RequestEvent};

/// Emits one `INFO` line per request in a common-log-like layout.
///
/// # Example Log
///
/// ```text
/// INFO gogo::request: 10.0.0.7 - - "GET /docs" 302 187 41.2µs site=docs method=GET ...
/// ```
pub struct RequestLogSink;

impl RequestLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RequestLogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservabilitySink for RequestLogSink {
    fn record(&self, event: &RequestEvent) {
        let client = event
            .client
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "-".to_string());

        tracing::info!(
            target: "gogo::request",
            site = %event.site,
            method = %event.method,
            path = %event.path,
            status = event.status,
            bytes = event.body_size,
            elapsed = ?event.elapsed,
            "{} - - \"{} {}\" {} {} {:?}",
            client,
            event.method,
            event.path,
            event.status,
            event.body_size,
            event.elapsed,
        );
    }
}
