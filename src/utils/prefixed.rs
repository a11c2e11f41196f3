//! Key/value selection by key prefix.
//!
//! Redirect tables are declared as `PREFIX` + `slug` keys in a flat key/value
//! source (the process environment in production). This module knows nothing
//! about where the pairs come from, so tests can feed synthetic sets.

/// Yields `(remainder, value)` for every pair whose key starts with `prefix`.
///
/// Matching is exact and case-sensitive on the prefix itself. The remainder is
/// returned untouched; callers decide how to normalize it.
///
/// # Examples
///
/// ```
/// use gogo::utils::prefixed::strip_prefixed;
///
/// let pairs = vec![
///     ("GOGO_TEMP_Home".to_string(), "https://a.example".to_string()),
///     ("PATH".to_string(), "/usr/bin".to_string()),
/// ];
///
/// let selected: Vec<_> = strip_prefixed(pairs, "GOGO_TEMP_").collect();
/// assert_eq!(selected, vec![("Home".to_string(), "https://a.example".to_string())]);
/// ```
pub fn strip_prefixed<I, K, V>(pairs: I, prefix: &str) -> impl Iterator<Item = (String, V)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    pairs.into_iter().filter_map(move |(key, value)| {
        key.as_ref()
            .strip_prefix(prefix)
            .map(|rest| (rest.to_string(), value))
    })
}
