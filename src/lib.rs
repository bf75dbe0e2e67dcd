//! jobagg: job posting aggregator.
//!
//! Queries one job source provider for several job boards at once and emits
//! a single normalised, JSON-serialisable result set. This crate wires the
//! layers together; the building blocks live in `jobagg-core` (data model,
//! normalizer, config) and `jobagg-sources` (provider adapters).
//!
//! # Architecture
//!
//! ```text
//! CLI ──► RunRequest ──► Pipeline ──► SourceProvider ──► RawRecord*
//!                           │
//!                           └──► normalizer ──► RunResult ──► output (JSON)
//! ```
//!
//! One request produces exactly one result. The provider call is the only
//! suspend point; everything after it is synchronous.

pub mod cli;
pub mod output;
pub mod pipeline;

pub use pipeline::Pipeline;
