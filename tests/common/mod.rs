//! Shared test utilities for jobagg integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Timestamps are fixed so normalised output is
//! deterministic and snapshot-friendly.

#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod fake_provider;
pub mod fixtures;

pub use builders::*;
pub use fake_provider::*;
pub use fixtures::*;
