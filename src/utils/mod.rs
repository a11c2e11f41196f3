//! Utility functions shared across layers.
//!
//! - [`prefixed`] - Key/value selection by key prefix

pub mod prefixed;
