//! HTTP request handlers.

pub mod health;
pub mod metrics;
pub mod redirect;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use redirect::redirect_handler;
