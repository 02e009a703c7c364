//
//  onesky-cli
//  api/common/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query parameter mapping.
//!
//! Every request sends its parameters as URL query parameters, regardless of verb.
//! [`Params`] is the flat `name -> value` mapping the executor merges with the
//! authentication fields. Absent values never get in: [`Params::with_opt`] skips
//! `None`, and [`Params::from_options`] serializes an options struct and drops every
//! field that serialized to `null`.
//!
//! # Value Encoding
//!
//! | JSON value | Parameter value |
//! |------------|-----------------|
//! | string | the string itself |
//! | number | decimal representation |
//! | bool | `true` / `false` |
//! | array | elements joined with `,` |
//! | null | not sent |

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// A flat mapping of query parameter names to values.
///
/// # Example
///
/// ```rust
/// use onesky_cli::Params;
///
/// let params = Params::new()
///     .with("name", "Demo")
///     .with_opt("locale", None::<&str>)
///     .with_opt("page", Some(2));
///
/// assert_eq!(params.get("name"), Some("Demo"));
/// assert_eq!(params.get("page"), Some("2"));
/// assert!(!params.contains_key("locale"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from a serializable options struct.
    ///
    /// The struct must serialize to a JSON object. Fields that serialize to `null`
    /// are skipped, so `Option` fields left as `None` never reach the wire.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub fn from_options<T: Serialize>(options: &T) -> Result<Self, serde_json::Error> {
        let mut params = Self::new();
        if let Value::Object(fields) = serde_json::to_value(options)? {
            for (key, value) in fields {
                if let Some(value) = encode_value(value) {
                    params.0.insert(key, value);
                }
            }
        }
        Ok(params)
    }

    /// Inserts a value, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts the value only when it is present.
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Merges `other` into this mapping. Keys from `other` win.
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the mapping as an `application/x-www-form-urlencoded` string.
    ///
    /// ```rust
    /// use onesky_cli::Params;
    ///
    /// let params = Params::new().with("name", "My Group").with("locale", "en");
    /// assert_eq!(params.to_query_string(), "locale=en&name=My+Group");
    /// ```
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Converts one serialized field into its wire form. `None` means "do not send".
fn encode_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(encode_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other @ Value::Object(_) => Some(other.to_string()),
    }
}
