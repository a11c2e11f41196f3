//! # Gogo
//!
//! A small HTTP redirect server. Slugs and their destinations are declared as
//! environment variables; requests for a known slug are answered with a 302
//! or 301 redirect, everything else with a 404 page.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Redirect tables, resolution and rendering
//! - **Application Layer** ([`application`]) - Request handling service
//! - **Observability** ([`observability`]) - Metrics, request log and tracing setup
//! - **API Layer** ([`api`]) - Axum handlers and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export GOGO_TEMP_chat="https://chat.example.com"
//! export GOGO_PERM_wiki="https://wiki.example.com"
//! export GOGO_SITE="go.example.com"
//!
//! cargo run -- --listen-addr :8080
//! ```
//!
//! `GET /chat` answers `302 Found`, `GET /wiki` answers `301 Moved Permanently`.
//! Slugs are case-insensitive and a temporary entry shadows a permanent one.
//!
//! ## Configuration
//!
//! Flags and environment variables are described in [`config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod observability;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::ContentError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RedirectService;
    pub use crate::domain::{Prefixes, RedirectDecision, RenderedResponse, Resolver, ResponseContent};
    pub use crate::observability::{ObservabilitySink, RequestEvent};
    pub use crate::routes::{RoutePaths, app_router};
    pub use crate::state::AppState;
}
