//! Slug to destination lookup table.

use std::collections::HashMap;

/// Normalizes a raw slug into its lookup form.
///
/// Slugs are case-insensitive, so both table keys and request paths go
/// through this before touching a [`RedirectTable`].
pub fn normalize_slug(raw: &str) -> String {
    raw.to_lowercase()
}

/// A set of slug to destination URL mappings.
///
/// Keys are stored normalized (see [`normalize_slug`]); inserting a key that
/// differs only in case replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    entries: HashMap<String, String>,
}

impl RedirectTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mapping, normalizing the slug.
    pub fn insert(&mut self, slug: &str, destination: impl Into<String>) {
        self.entries
            .insert(normalize_slug(slug), destination.into());
    }

    /// Looks up an already-normalized slug.
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.entries.get(slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(slug, destination)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(slug, destination)| (slug.as_str(), destination.as_str()))
    }
}

impl<S: AsRef<str>, D: Into<String>> FromIterator<(S, D)> for RedirectTable {
    fn from_iter<T: IntoIterator<Item = (S, D)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (slug, destination) in iter {
            table.insert(slug.as_ref(), destination);
        }
        table
    }
}
