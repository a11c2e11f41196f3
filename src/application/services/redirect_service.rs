//! Redirect handling service.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::resolver::slug_from_path;
use crate::domain::{RenderedResponse, Resolver, ResponseContent};
use crate::observability::{ObservabilitySink, RequestEvent};

/// Resolves request paths, renders the response and reports the outcome.
///
/// Holds only immutable state, so one instance serves every request
/// concurrently.
pub struct RedirectService {
    site: String,
    resolver: Arc<Resolver>,
    content: Arc<ResponseContent>,
    sink: Arc<dyn ObservabilitySink>,
}

impl RedirectService {
    /// Creates a new redirect service.
    ///
    /// # Arguments
    ///
    /// - `site` - Deployment label attached to every event
    /// - `resolver` - Redirect tables
    /// - `content` - Response bodies
    /// - `sink` - Receiver of per-request events
    pub fn new(
        site: impl Into<String>,
        resolver: Arc<Resolver>,
        content: Arc<ResponseContent>,
        sink: Arc<dyn ObservabilitySink>,
    ) -> Self {
        Self {
            site: site.into(),
            resolver,
            content,
            sink,
        }
    }

    /// Handles one request.
    ///
    /// # Request Flow
    ///
    /// 1. Derive the slug from the path
    /// 2. Resolve (temporary table first, then permanent)
    /// 3. Render status, `Location` and body
    /// 4. Report a [`RequestEvent`] to the sink
    ///
    /// Unknown slugs produce a 404 response, not an error.
    pub fn handle(&self, method: &str, path: &str, client: Option<IpAddr>) -> RenderedResponse {
        let start = Instant::now();

        let slug = slug_from_path(path);
        let decision = self.resolver.resolve_slug(&slug);
        let rendered = self.content.render(&decision);

        self.sink.record(&RequestEvent {
            site: self.site.clone(),
            method: method.to_string(),
            path: path.to_string(),
            slug,
            status: rendered.status.as_u16(),
            body_size: rendered.body_size(),
            elapsed: start.elapsed(),
            client,
        });

        rendered
    }

    /// Number of configured redirects.
    pub fn redirect_count(&self) -> usize {
        self.resolver.count()
    }
}
