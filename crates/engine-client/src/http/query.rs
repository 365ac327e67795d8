//! Query-string encoding for option values
//!
//! Boolean options follow the daemon's convention: a flag that is on is sent
//! as `key=1`, a flag that is off is not sent at all.

use std::fmt::Display;
use url::form_urlencoded;

/// Ordered set of query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=1` when `enabled`, nothing otherwise.
    pub fn flag(mut self, key: &'static str, enabled: bool) -> Self {
        if enabled {
            self.pairs.push((key, "1".to_string()));
        }
        self
    }

    /// Append `key=value` when `value` is present.
    pub fn opt<V: Display>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Append `key=value` unconditionally.
    pub fn set(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Whether no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value for `key`, if it was added.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Encode as an `application/x-www-form-urlencoded` query string.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}
