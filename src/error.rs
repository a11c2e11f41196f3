//! Error types.
//!
//! Redirect resolution itself cannot fail; these cover the startup edges.

use std::path::PathBuf;

/// Failure to read an optional content override.
///
/// Never fatal: callers log it and keep the built-in content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
