//! jobagg-core: job posting aggregation core library.
//!
//! This crate owns the canonical data model and the normalization layer that
//! reconciles heterogeneous provider rows into one schema.
//!
//! # Architecture
//!
//! ```text
//! SourceProvider ──► RawRecord ──► normalizer ──► CanonicalJobRecord ──► RunResult
//!                                     │
//!                                     └── tables (country map, site whitelist)
//! ```
//!
//! Normalization is synchronous and total; the only fallible step in a run
//! is the provider call, which lives in `jobagg-sources`.

pub mod config;
pub mod literal;
pub mod normalizer;
pub mod tables;
pub mod types;

pub use normalizer::{indeed_country, map_sites, normalize, normalize_all};
pub use types::{CanonicalJobRecord, RawRecord, RawValue, RequestError, RunRequest, RunResult};
