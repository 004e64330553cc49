//! Core data types for cellmatch
//!
//! All capacities and NP ratios are `rust_decimal::Decimal` values so that
//! the tier rounding rules are exact and platform-independent.
//!
//! ## Types
//!
//! - [`RawRecord`]: A (name, capacity) pair as extracted from the source table
//! - [`ComponentRecord`]: A cleaned record with a finite decimal capacity
//! - [`Tier`]: The acceptability band an NP ratio falls into
//! - [`MatchType`]: Classification of one cathode's outcome
//! - [`Pairing`]: One result row per input cathode
//! - [`MatchReport`]: The full run result (pairings + consumption set)

mod record;
mod pairing;
mod report;
pub mod ratio;

// Re-export all types at module level
pub use pairing::{MatchType, Pairing};
pub use ratio::Tier;
pub use record::{ComponentRecord, RawRecord};
pub use report::MatchReport;
