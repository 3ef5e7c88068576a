//! Ordered query parameters and query-string rendering.

use std::fmt;

use indexmap::IndexMap;

/// Ordered query parameters for a single request.
///
/// Values are stored as text; numbers are converted with their `Display`
/// implementation when inserted. Inserting a key that already exists replaces
/// its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queries(IndexMap<String, String>);

impl Queries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders these parameters with [`create_query_string`].
    pub fn to_query_string(&self) -> String {
        create_query_string(self)
    }
}

impl<K, V> FromIterator<(K, V)> for Queries
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut queries = Queries::new();
        for (key, value) in iter {
            queries.insert(key, value);
        }
        queries
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Queries
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Builds the `?k=v&k2=v2` suffix appended to request URLs.
///
/// Returns an empty string when there are no parameters. Pairs keep insertion
/// order; keys and values are percent-encoded.
pub fn create_query_string(queries: &Queries) -> String {
    if queries.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = queries
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();

    format!("?{}", pairs.join("&"))
}
