//! Core types for jobagg-core.
//!
//! This module defines the data shared across the pipeline: the untyped
//! [`RawRecord`] delivered by a source provider, the normalised
//! [`CanonicalJobRecord`], and the per-invocation [`RunRequest`] /
//! [`RunResult`] pair that frames a single scrape.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::normalizer::clean;
use crate::tables::SENTINEL_MARKERS;

// ---------------------------------------------------------------------------
// Raw values
// ---------------------------------------------------------------------------

/// A single field value as delivered by a source provider.
///
/// Providers disagree about how "missing" is spelled, so several shapes can
/// mean the same thing; see [`RawValue::is_sentinel`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<RawValue>),
}

impl RawValue {
    /// True for every spelling of "no value": `Null`, non-finite floats, and
    /// the textual markers in [`SENTINEL_MARKERS`] (compared after trimming).
    pub fn is_sentinel(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Float(f) => !f.is_finite(),
            RawValue::Text(s) => SENTINEL_MARKERS.contains(s.trim()),
            _ => false,
        }
    }

    /// String representation used by the normalizer, before trimming.
    ///
    /// Returns `None` for sentinels.
    pub fn render(&self) -> Option<String> {
        if self.is_sentinel() {
            return None;
        }
        match self {
            RawValue::Null => None,
            RawValue::Bool(b) => Some(b.to_string()),
            RawValue::Int(i) => Some(i.to_string()),
            RawValue::Float(f) => Some(render_float(*f)),
            RawValue::Text(s) => Some(s.clone()),
            RawValue::List(items) => Some(
                items
                    .iter()
                    .filter_map(RawValue::render)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

/// Integral floats keep one fractional digit (`150000.0`), the way the
/// dataframe exporters print them. Magnitudes past 1e16 use plain `Display`.
fn render_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Int(i),
                None => n.as_f64().map(RawValue::Float).unwrap_or(RawValue::Null),
            },
            Value::String(s) => RawValue::Text(s),
            Value::Array(items) => RawValue::List(items.into_iter().map(Into::into).collect()),
            // Nested objects have no canonical field to land in; keep them
            // readable rather than dropping them.
            obj @ Value::Object(_) => RawValue::Text(obj.to_string()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Int(i)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float(f)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(items: Vec<String>) -> Self {
        RawValue::List(items.into_iter().map(RawValue::Text).collect())
    }
}

// ---------------------------------------------------------------------------
// RawRecord
// ---------------------------------------------------------------------------

/// One untransformed job-posting row as delivered by a source provider.
///
/// Keys are the provider's column names (`title`, `date_posted`, `site`, …).
/// A record is never mutated after the provider hands it over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: BTreeMap<String, RawValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly used by providers and tests.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields.get(key)
    }

    /// Cleaned string value of `key` (see [`clean`]), or `default` when
    /// that comes out empty.
    pub fn get_cleaned(&self, key: &str, default: &str) -> String {
        let cleaned = clean(self.get(key));
        if cleaned.is_empty() {
            default.to_string()
        } else {
            cleaned
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for RawRecord {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            fields: map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// CanonicalJobRecord
// ---------------------------------------------------------------------------

/// The normalised, schema-fixed job posting.
///
/// Field order and names are the JSON wire contract consumed downstream; do
/// not reorder or rename.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalJobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub job_type: String,
    pub job_level: String,
    /// `YYYY-MM-DD`, or empty when the source date was missing or unreadable.
    pub posted_date: String,
    /// `job_url_direct` when present, otherwise `job_url`.
    pub application_url: String,
    pub job_url_direct: String,
    pub source: String,
    pub is_remote: bool,
    pub min_amount: String,
    pub max_amount: String,
    pub currency: String,
    pub interval: String,
    /// Always derived from `min_amount`, `max_amount` and `currency`.
    pub salary_display: String,
    pub emails: Vec<String>,
    pub scraped_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// RunRequest / RunResult
// ---------------------------------------------------------------------------

/// Rejected [`RunRequest`] parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("search term must not be empty")]
    EmptySearchTerm,
    #[error("location must not be empty")]
    EmptyLocation,
    #[error("results_wanted must be a positive integer")]
    ZeroResults,
}

/// Parameters of a single invocation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    search_term: String,
    location: String,
    sites: Vec<String>,
    results_wanted: u32,
    country: Option<String>,
}

impl RunRequest {
    pub fn new(
        search_term: impl Into<String>,
        location: impl Into<String>,
        sites: Vec<String>,
        results_wanted: u32,
        country: Option<String>,
    ) -> Result<Self, RequestError> {
        let search_term = search_term.into();
        let location = location.into();
        if search_term.trim().is_empty() {
            return Err(RequestError::EmptySearchTerm);
        }
        if location.trim().is_empty() {
            return Err(RequestError::EmptyLocation);
        }
        if results_wanted == 0 {
            return Err(RequestError::ZeroResults);
        }
        Ok(Self {
            search_term,
            location,
            sites,
            results_wanted,
            country,
        })
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Sites as requested, before whitelist filtering.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn results_wanted(&self) -> u32 {
        self.results_wanted
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

/// The single JSON document emitted per invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub success: bool,
    pub jobs: Vec<CanonicalJobRecord>,
    pub total_count: usize,
    pub sources: Vec<String>,
    pub search_term: String,
    pub location: String,
    pub scraped_at: DateTime<Utc>,
}

impl RunResult {
    /// Build the result for `request`. `total_count` is always `jobs.len()`.
    pub fn new(
        request: &RunRequest,
        success: bool,
        jobs: Vec<CanonicalJobRecord>,
        scraped_at: DateTime<Utc>,
    ) -> Self {
        Self {
            success,
            total_count: jobs.len(),
            jobs,
            sources: request.sites().to_vec(),
            search_term: request.search_term().to_string(),
            location: request.location().to_string(),
            scraped_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
