//! Matching engine module for cellmatch.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same input lists always produce the same report
//! 2. **Decimal Math**: No floating point in the decision path
//! 3. **Strict Sequencing**: Cathodes in input order, anode scans in input
//!    order; outcomes depend on which anode is seen first, so no
//!    parallelism is permitted
//! 4. **Greedy First-Fit**: Any in-window anode is equally acceptable; the
//!    scan stops on the first one rather than searching for a best fit
//!
//! ## Example
//!
//! ```
//! use cellmatch::engine::{leftover_anodes, MatchEngine};
//! use cellmatch::types::{ComponentRecord, MatchType};
//! use rust_decimal::Decimal;
//!
//! let cathodes = vec![ComponentRecord::new("C1", Decimal::from(100))];
//! let anodes = vec![
//!     ComponentRecord::new("A1", Decimal::from(110)),
//!     ComponentRecord::new("A2", Decimal::from(112)),
//! ];
//!
//! let report = MatchEngine::new().run(&cathodes, &anodes);
//! assert_eq!(report.pairings()[0].match_type, MatchType::InRange);
//!
//! let unused = leftover_anodes(&anodes, report.consumed());
//! assert_eq!(unused.len(), 1);
//! assert_eq!(unused[0].name, "A2");
//! ```

pub mod leftover;
pub mod matcher;

pub use leftover::leftover_anodes;
pub use matcher::MatchEngine;
