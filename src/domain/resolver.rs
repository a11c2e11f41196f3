//! Request path to redirect decision resolution.
//!
//! The resolver is built once at startup from a flat key/value source and is
//! read-only afterwards, so it is shared between requests without locking.
//!
//! # Table Selection
//!
//! - `GOGO_TEMP_<slug>` - temporary redirect (302)
//! - `GOGO_PERM_<slug>` - permanent redirect (301)
//!
//! Any other key is ignored. When a slug exists in both tables the temporary
//! entry wins and the permanent one is never consulted.

use std::fmt;

use percent_encoding::percent_decode_str;

use super::decision::RedirectDecision;
use super::redirect_table::{RedirectTable, normalize_slug};
use crate::utils::prefixed::strip_prefixed;

/// Default prefix selecting the temporary table.
pub const TEMP_PREFIX: &str = "GOGO_TEMP_";
/// Default prefix selecting the permanent table.
pub const PERM_PREFIX: &str = "GOGO_PERM_";

/// Key prefixes that route a configuration entry to one of the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixes {
    pub temporary: String,
    pub permanent: String,
}

impl Default for Prefixes {
    fn default() -> Self {
        Self {
            temporary: TEMP_PREFIX.to_string(),
            permanent: PERM_PREFIX.to_string(),
        }
    }
}

/// Which table an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    Temporary,
    Permanent,
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temporary => write!(f, "temporary"),
            Self::Permanent => write!(f, "permanent"),
        }
    }
}

/// Maps request paths to [`RedirectDecision`]s.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    temporary: RedirectTable,
    permanent: RedirectTable,
}

impl Resolver {
    /// Builds a resolver from key/value pairs using the default prefixes.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self::with_prefixes(pairs, &Prefixes::default())
    }

    /// Builds a resolver from key/value pairs.
    ///
    /// Never fails: unrecognized keys are skipped and an empty source yields
    /// two empty tables. A key matching both prefixes lands in both tables.
    pub fn with_prefixes<I, K, V>(pairs: I, prefixes: &Prefixes) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_string(), value.into()))
            .collect();

        let borrowed = || pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()));

        Self {
            temporary: strip_prefixed(borrowed(), &prefixes.temporary).collect(),
            permanent: strip_prefixed(borrowed(), &prefixes.permanent).collect(),
        }
    }

    /// Builds a resolver from the process environment.
    ///
    /// Entries whose name or value is not valid unicode are skipped.
    pub fn from_env(prefixes: &Prefixes) -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));

        Self::with_prefixes(vars, prefixes)
    }

    /// Resolves a request path such as `/docs`.
    ///
    /// The path is percent-decoded, one leading `/` is stripped and the
    /// remainder lower-cased to form the slug. Temporary entries shadow
    /// permanent ones.
    pub fn resolve(&self, path: &str) -> RedirectDecision {
        self.resolve_slug(&slug_from_path(path))
    }

    /// Resolves an already-normalized slug.
    pub fn resolve_slug(&self, slug: &str) -> RedirectDecision {
        if let Some(destination) = self.temporary.get(slug) {
            return RedirectDecision::TemporaryRedirect {
                destination: destination.to_string(),
            };
        }

        match self.permanent.get(slug) {
            Some(destination) => RedirectDecision::PermanentRedirect {
                destination: destination.to_string(),
            },
            None => RedirectDecision::NotFound,
        }
    }

    /// Total number of entries across both tables.
    pub fn count(&self) -> usize {
        self.temporary.len() + self.permanent.len()
    }

    /// Iterates every configured mapping, temporary entries first.
    pub fn entries(&self) -> impl Iterator<Item = (RedirectKind, &str, &str)> {
        let temporary = self
            .temporary
            .iter()
            .map(|(slug, dest)| (RedirectKind::Temporary, slug, dest));
        let permanent = self
            .permanent
            .iter()
            .map(|(slug, dest)| (RedirectKind::Permanent, slug, dest));
        temporary.chain(permanent)
    }
}

/// Turns a raw request path into a lookup slug.
///
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub fn slug_from_path(path: &str) -> String {
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    normalize_slug(decoded.strip_prefix('/').unwrap_or(decoded.as_ref()))
}
