//! Query-string assembly for list and report endpoints.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};

/// Ordered query parameters. Unset optional values are skipped, so an
/// endpoint called with default params produces no query string at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn push_opt<V: Display>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// RFC 3339 in UTC with a `Z` suffix, e.g. `2024-01-01T00:00:00Z`.
    pub fn push_time(&mut self, key: &'static str, value: Option<DateTime<Utc>>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
