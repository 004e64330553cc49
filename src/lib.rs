//! # cellmatch
//!
//! Deterministic capacity-ratio matching of anode and cathode production
//! lots.
//!
//! ## Architecture
//!
//! The pipeline is four stages, each a module:
//!
//! - **Types**: Core data structures (ComponentRecord, Pairing, MatchReport)
//! - **Normalize**: Lossy cleaning of raw table rows
//! - **Engine**: The tiered-threshold greedy matcher and leftover derivation
//! - **Io**: The tabular boundary (xlsx/CSV in, CSV + xlsx out)
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical inputs produce identical outputs; outcomes
//!    depend on input order, so processing is strictly sequential
//! 2. **Decimal Math**: Capacities and ratios are `rust_decimal::Decimal`;
//!    no floating point in the decision path
//! 3. **Greedy First-Fit**: The first acceptable anode wins; there is no
//!    notion of a globally optimal assignment
//! 4. **Errors Only at the Boundary**: Normalization and matching are total;
//!    only file reading and serialization can fail
//!
//! ## Example
//!
//! ```
//! use cellmatch::engine::{leftover_anodes, MatchEngine};
//! use cellmatch::normalize::normalize;
//! use cellmatch::types::{MatchType, RawRecord};
//! use rust_decimal::Decimal;
//!
//! let anodes = normalize(vec![
//!     RawRecord::new(Some("A1".into()), Some(Decimal::from(110))),
//!     RawRecord::new(Some("A2".into()), Some(Decimal::from(112))),
//! ]);
//! let cathodes = normalize(vec![
//!     RawRecord::new(Some("C1".into()), Some(Decimal::from(100))),
//! ]);
//!
//! let report = MatchEngine::new().run(&cathodes, &anodes);
//! assert_eq!(report.pairings()[0].match_type, MatchType::InRange);
//!
//! let unused = leftover_anodes(&anodes, report.consumed());
//! assert_eq!(unused[0].name, "A2");
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: records, pairings, tiers, reports
pub mod types;

/// Record normalization: intentionally lossy cleaning
pub mod normalize;

/// Matching engine: greedy tiered assignment + leftover derivation
pub mod engine;

/// Tabular I/O: the directory-file boundary
pub mod io;

/// Boundary error type
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{leftover_anodes, MatchEngine};
pub use error::{Error, Result};
pub use normalize::normalize;
pub use types::{ComponentRecord, MatchReport, MatchType, Pairing, RawRecord, Tier};
