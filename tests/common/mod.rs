#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::ConnectInfo;
use gogo::application::services::RedirectService;
use gogo::domain::{Prefixes, Resolver, ResponseContent};
use gogo::observability::{ObservabilitySink, RequestEvent};
use gogo::state::AppState;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::Layer;

pub const NOT_FOUND_BODY: &str = "<h1>nothing here</h1>";
pub const FOUND_TEMPLATE: &str = "<a href=\"DEST_URL\">DEST_URL</a>";

/// Sink keeping every event in memory.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RequestEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<RequestEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ObservabilitySink for RecordingSink {
    fn record(&self, event: &RequestEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

pub fn test_prefixes() -> Prefixes {
    Prefixes {
        temporary: "TEMP_".to_string(),
        permanent: "PERM_".to_string(),
    }
}

pub fn test_resolver() -> Resolver {
    Resolver::with_prefixes(
        [
            ("TEMP_HOME", "http://a.com"),
            ("PERM_OLD", "http://b.com"),
            ("TEMP_both", "https://temp.example.com"),
            ("PERM_BOTH", "https://perm.example.com"),
            ("TEMP_café", "https://cafe.example.com"),
            ("PERM_a b", "https://spaced.example.com"),
            ("UNRELATED", "https://ignored.example.com"),
        ],
        &test_prefixes(),
    )
}

pub fn create_test_state(metrics_handle: Option<PrometheusHandle>) -> (AppState, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());

    let service = RedirectService::new(
        "test-site",
        Arc::new(test_resolver()),
        Arc::new(ResponseContent::new(NOT_FOUND_BODY, FOUND_TEMPLATE)),
        sink.clone(),
    );

    (AppState::new(Arc::new(service), metrics_handle), sink)
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
