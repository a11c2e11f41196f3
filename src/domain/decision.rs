//! Outcome of resolving a request path.

use axum::http::StatusCode;

/// What to do with a request, produced fresh by
/// [`crate::domain::resolver::Resolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Slug found in the temporary table (302).
    TemporaryRedirect { destination: String },
    /// Slug found only in the permanent table (301).
    PermanentRedirect { destination: String },
    /// Slug unknown to both tables (404).
    NotFound,
}

impl RedirectDecision {
    /// HTTP status code this decision maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::TemporaryRedirect { .. } => StatusCode::FOUND,
            Self::PermanentRedirect { .. } => StatusCode::MOVED_PERMANENTLY,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Destination URL, if the decision is a redirect.
    pub fn destination(&self) -> Option<&str> {
        match self {
            Self::TemporaryRedirect { destination } | Self::PermanentRedirect { destination } => {
                Some(destination.as_str())
            }
            Self::NotFound => None,
        }
    }
}
