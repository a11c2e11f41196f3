//! Domain layer containing redirect resolution and response rendering.
//!
//! Everything here is synchronous, performs no I/O on the request path and
//! holds no shared mutable state.
//!
//! # Architecture
//!
//! - [`redirect_table`] - Slug to destination mapping
//! - [`resolver`] - Temporary/permanent precedence and table construction
//! - [`decision`] - Resolution outcome
//! - [`content`] - Response bodies and rendering
//!
//! # Request Flow
//!
//! 1. [`resolver::Resolver::resolve`] turns the request path into a [`decision::RedirectDecision`]
//! 2. [`content::ResponseContent::render`] turns the decision into a [`content::RenderedResponse`]
//! 3. The response is written by the API layer

pub mod content;
pub mod decision;
pub mod redirect_table;
pub mod resolver;

pub use content::{RenderedResponse, ResponseContent};
pub use decision::RedirectDecision;
pub use redirect_table::RedirectTable;
pub use resolver::{Prefixes, RedirectKind, Resolver};
