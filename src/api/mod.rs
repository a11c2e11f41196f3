//! HTTP layer translating requests into redirect service calls.
//!
//! # Modules
//!
//! - [`handlers`] - Redirect, health and metrics handlers
//! - [`middleware`] - Request tracing

pub mod handlers;
pub mod middleware;
