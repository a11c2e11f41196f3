//! Application layer services.
//!
//! This layer ties the domain (resolution and rendering) to the observability
//! sink, giving HTTP handlers a single call per request.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Redirect resolution, rendering and reporting

pub mod services;
