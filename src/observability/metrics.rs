//! Prometheus metrics.
//!
//! # Metrics
//! - `gogo_status_total` (counter): responses by site, status
//! - `gogo_requests_total` (counter): redirects by site, slug (404s excluded)
//! - `gogo_response_time_seconds` (histogram): handling latency by site
//!
//! Recording goes through the `metrics` facade; the exporter is installed
//! once at startup and rendered by the metrics route.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{
    BuildError, Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder,
};

use super::sink::{ObservabilitySink, RequestEvent};

pub const STATUS_TOTAL: &str = "gogo_status_total";
pub const REQUESTS_TOTAL: &str = "gogo_requests_total";
pub const RESPONSE_TIME_SECONDS: &str = "gogo_response_time_seconds";

/// Histogram buckets matching the Prometheus client defaults.
const LATENCY_BUCKETS: &[f64] = &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

fn builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Full(RESPONSE_TIME_SECONDS.to_string()),
        LATENCY_BUCKETS,
    )
}

/// Builds an uninstalled recorder with the gogo histogram layout.
pub fn build_recorder() -> Result<PrometheusRecorder, BuildError> {
    Ok(builder()?.build_recorder())
}

/// Installs the global recorder and returns a handle for rendering.
///
/// # Errors
///
/// Fails if a global recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = builder()?.install_recorder()?;
    describe_metrics();
    Ok(handle)
}

fn describe_metrics() {
    describe_counter!(STATUS_TOTAL, "HTTP response status.");
    describe_counter!(REQUESTS_TOTAL, "HTTP requests total.");
    describe_histogram!(
        RESPONSE_TIME_SECONDS,
        metrics::Unit::Seconds,
        "Duration of HTTP requests."
    );
}

/// Records request events into the `metrics` facade.
pub struct MetricsSink;

impl MetricsSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MetricsSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservabilitySink for MetricsSink {
    fn record(&self, event: &RequestEvent) {
        counter!(
            STATUS_TOTAL,
            "site" => event.site.clone(),
            "status" => event.status.to_string()
        )
        .increment(1);

        if event.is_found() {
            counter!(
                REQUESTS_TOTAL,
                "site" => event.site.clone(),
                "slug" => event.slug.clone()
            )
            .increment(1);
        }

        histogram!(RESPONSE_TIME_SECONDS, "site" => event.site.clone())
            .record(event.elapsed.as_secs_f64());
    }
}
