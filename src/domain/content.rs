//! Response bodies for redirects and misses.
//!
//! Both bodies are configured once at startup and shared read-only. The found
//! template carries a [`PLACEHOLDER`] token that is replaced by the destination
//! URL for every redirect.

use std::fs;
use std::path::Path;

use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use super::decision::RedirectDecision;
use crate::error::ContentError;

/// Token in the found template replaced by the destination URL.
pub const PLACEHOLDER: &str = "DEST_URL";

/// Default body served with 404 responses.
pub const DEFAULT_NOT_FOUND: &str = "<html><head><title>404 Not Found</title></head><body><h1>404 Not Found</h1></body></html>";

/// Default body template served with 301/302 responses.
pub const DEFAULT_FOUND_TEMPLATE: &str = "<html><head><title>Redirecting...</title><meta http-equiv=\"refresh\" content=\"0;URL='DEST_URL'\" /></head><body><h1>Redirecting...</h1><p><a href=\"DEST_URL\">Click here if you are not redirected automatically.</a></p></body></html>";

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Configured response bodies.
#[derive(Debug, Clone)]
pub struct ResponseContent {
    not_found: Bytes,
    found_template: String,
}

impl Default for ResponseContent {
    fn default() -> Self {
        Self {
            not_found: Bytes::from_static(DEFAULT_NOT_FOUND.as_bytes()),
            found_template: DEFAULT_FOUND_TEMPLATE.to_string(),
        }
    }
}

impl ResponseContent {
    pub fn new(not_found: impl Into<Bytes>, found_template: impl Into<String>) -> Self {
        Self {
            not_found: not_found.into(),
            found_template: found_template.into(),
        }
    }

    /// Loads content overrides from optional files.
    ///
    /// A missing path keeps the built-in default. A file that cannot be read
    /// also keeps the default; the failure is logged and never escalated.
    pub fn load(not_found_path: Option<&Path>, found_path: Option<&Path>) -> Self {
        let mut content = Self::default();

        if let Some(path) = not_found_path {
            match read_file(path) {
                Ok(bytes) => {
                    tracing::info!("Loaded not-found content from {}", path.display());
                    content.not_found = Bytes::from(bytes);
                }
                Err(e) => tracing::warn!("{}. Using default not-found content.", e),
            }
        }

        if let Some(path) = found_path {
            match read_file(path) {
                Ok(bytes) => {
                    tracing::info!("Loaded found template from {}", path.display());
                    content.found_template = String::from_utf8_lossy(&bytes).into_owned();
                }
                Err(e) => tracing::warn!("{}. Using default found template.", e),
            }
        }

        content
    }

    /// Renders a decision into status, `Location` and body.
    ///
    /// Every occurrence of [`PLACEHOLDER`] in the found template is replaced.
    pub fn render(&self, decision: &RedirectDecision) -> RenderedResponse {
        match decision.destination() {
            Some(destination) => RenderedResponse {
                status: decision.status(),
                location: Some(destination.to_string()),
                body: Bytes::from(self.found_template.replace(PLACEHOLDER, destination)),
            },
            None => RenderedResponse {
                status: StatusCode::NOT_FOUND,
                location: None,
                body: self.not_found.clone(),
            },
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ContentError> {
    fs::read(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// A rendered redirect or miss, ready to be written to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Bytes,
}

impl RenderedResponse {
    pub fn body_size(&self) -> usize {
        self.body.len()
    }
}

impl IntoResponse for RenderedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;

        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(HTML_CONTENT_TYPE),
        );

        if let Some(location) = self.location {
            match HeaderValue::from_str(&location) {
                Ok(value) => {
                    headers.insert(header::LOCATION, value);
                }
                Err(e) => tracing::warn!("Invalid Location header {:?}: {}", location, e),
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temporary(destination: &str) -> RedirectDecision {
        RedirectDecision::TemporaryRedirect {
            destination: destination.to_string(),
        }
    }

    #[test]
    fn test_every_placeholder_is_replaced() {
        let content = ResponseContent::new("gone", "go to DEST_URL now, DEST_URL!");

        let rendered = content.render(&temporary("http://x"));

        assert_eq!(rendered.status, StatusCode::FOUND);
        assert_eq!(rendered.body, Bytes::from("go to http://x now, http://x!"));
        assert_eq!(rendered.location.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_permanent_render() {
        let content = ResponseContent::new("gone", "-> DEST_URL");

        let rendered = content.render(&RedirectDecision::PermanentRedirect {
            destination: "https://b.com".to_string(),
        });

        assert_eq!(rendered.status, StatusCode::MOVED_PERMANENTLY);
        assert_eq!(rendered.body, Bytes::from("-> https://b.com"));
        assert_eq!(rendered.location.as_deref(), Some("https://b.com"));
    }

    #[test]
    fn test_not_found_is_verbatim() {
        let content = ResponseContent::new("nothing DEST_URL here", "unused");

        let rendered = content.render(&RedirectDecision::NotFound);

        assert_eq!(rendered.status, StatusCode::NOT_FOUND);
        assert_eq!(rendered.body, Bytes::from("nothing DEST_URL here"));
        assert!(rendered.location.is_none());
        assert_eq!(rendered.body_size(), 21);
    }

    #[test]
    fn test_default_template_has_placeholders() {
        let rendered = ResponseContent::default().render(&temporary("https://a.com"));
        let body = String::from_utf8(rendered.body.to_vec()).unwrap();

        assert!(!body.contains(PLACEHOLDER));
        assert_eq!(body.matches("https://a.com").count(), 2);
    }

    #[test]
    fn test_load_without_paths_uses_defaults() {
        let content = ResponseContent::load(None, None);

        assert_eq!(&content.not_found[..], DEFAULT_NOT_FOUND.as_bytes());
        assert_eq!(content.found_template, DEFAULT_FOUND_TEMPLATE);
    }

    #[test]
    fn test_load_missing_files_keeps_defaults() {
        let missing = Path::new("/nonexistent/gogo/404.html");

        let content = ResponseContent::load(Some(missing), Some(missing));

        assert_eq!(&content.not_found[..], DEFAULT_NOT_FOUND.as_bytes());
        assert_eq!(content.found_template, DEFAULT_FOUND_TEMPLATE);
    }

    #[test]
    fn test_load_from_files() {
        let mut not_found = tempfile::NamedTempFile::new().unwrap();
        not_found.write_all(b"<p>nope</p>").unwrap();
        let mut found = tempfile::NamedTempFile::new().unwrap();
        found.write_all(b"<a href=\"DEST_URL\">go</a>").unwrap();

        let content = ResponseContent::load(Some(not_found.path()), Some(found.path()));

        assert_eq!(&content.not_found[..], b"<p>nope</p>");
        assert_eq!(content.found_template, "<a href=\"DEST_URL\">go</a>");
    }

    #[test]
    fn test_into_response_sets_headers() {
        let response = ResponseContent::default()
            .render(&temporary("https://a.com/path"))
            .into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://a.com/path"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            HTML_CONTENT_TYPE
        );
    }

    #[test]
    fn test_invalid_location_is_dropped() {
        let response = ResponseContent::default()
            .render(&temporary("https://a.com/\nbad"))
            .into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert!(response.headers().get(header::LOCATION).is_none());
    }
}
