//! Match report: the complete result of one matching run.
//!
//! The report freezes the engine's consumption state together with the
//! ordered pairing list. Nothing outside the engine mutates consumption; a
//! report is immutable once built and is never carried across runs.

use std::collections::HashSet;

use crate::types::{MatchType, Pairing};

/// The result of one matching run.
///
/// ## Contents
///
/// - One [`Pairing`] per normalized input cathode, in input order.
/// - The frozen consumption set: the names of every anode assigned during
///   the run. Used to derive the leftover-anode list.
///
/// ## Example
///
/// ```
/// use cellmatch::engine::MatchEngine;
/// use cellmatch::types::{ComponentRecord, MatchType};
/// use rust_decimal::Decimal;
///
/// let cathodes = vec![ComponentRecord::new("C1", Decimal::from(100))];
/// let anodes = vec![ComponentRecord::new("A1", Decimal::from(110))];
///
/// let report = MatchEngine::new().run(&cathodes, &anodes);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.count_of(MatchType::InRange), 1);
/// assert!(report.is_consumed("A1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pairings: Vec<Pairing>,
    consumed: HashSet<String>,
}

impl MatchReport {
    /// Freeze a finished run. Engine-internal.
    pub(crate) fn new(pairings: Vec<Pairing>, consumed: HashSet<String>) -> Self {
        Self { pairings, consumed }
    }

    /// The ordered pairing rows, one per input cathode
    #[inline]
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    /// The frozen consumption set (assigned anode names)
    #[inline]
    pub fn consumed(&self) -> &HashSet<String> {
        &self.consumed
    }

    /// Check whether an anode name was assigned during the run
    #[inline]
    pub fn is_consumed(&self, name: &str) -> bool {
        self.consumed.contains(name)
    }

    /// Number of pairing rows (equals the normalized cathode count)
    #[inline]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Check whether the run had no cathodes at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Number of cathodes that received an anode
    pub fn matched_count(&self) -> usize {
        self.pairings.iter().filter(|p| p.is_matched()).count()
    }

    /// Number of rows with the given outcome
    pub fn count_of(&self, match_type: MatchType) -> usize {
        self.pairings
            .iter()
            .filter(|p| p.match_type == match_type)
            .count()
    }

    /// Fraction of cathodes that received an anode (matched / total)
    ///
    /// Returns None if the run had no cathodes.
    pub fn match_rate(&self) -> Option<f64> {
        if self.pairings.is_empty() {
            None
        } else {
            Some(self.matched_count() as f64 / self.pairings.len() as f64)
        }
    }

    /// Decompose into the pairing list and consumption set
    pub fn into_parts(self) -> (Vec<Pairing>, HashSet<String>) {
        (self.pairings, self.consumed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComponentRecord;
    use rust_decimal::Decimal;

    fn sample_report() -> MatchReport {
        let c1 = ComponentRecord::new("C1", Decimal::from(100));
        let c2 = ComponentRecord::new("C2", Decimal::from(100));
        let a1 = ComponentRecord::new("A1", Decimal::from(110));

        let pairings = vec![
            Pairing::matched(&c1, &a1, crate::types::Tier::InRange, "1.1".parse().unwrap()),
            Pairing::unmatched(&c2, MatchType::NoMatch),
        ];
        let consumed = HashSet::from(["A1".to_string()]);
        MatchReport::new(pairings, consumed)
    }

    #[test]
    fn test_report_counts() {
        let report = sample_report();

        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.count_of(MatchType::InRange), 1);
        assert_eq!(report.count_of(MatchType::NoMatch), 1);
        assert_eq!(report.count_of(MatchType::Close), 0);
    }

    #[test]
    fn test_report_consumption() {
        let report = sample_report();

        assert!(report.is_consumed("A1"));
        assert!(!report.is_consumed("A2"));
        assert_eq!(report.consumed().len(), 1);
    }

    #[test]
    fn test_report_match_rate() {
        let report = sample_report();
        assert_eq!(report.match_rate(), Some(0.5));

        let empty = MatchReport::new(Vec::new(), HashSet::new());
        assert!(empty.is_empty());
        assert_eq!(empty.match_rate(), None);
    }

    #[test]
    fn test_report_into_parts() {
        let report = sample_report();
        let (pairings, consumed) = report.into_parts();

        assert_eq!(pairings.len(), 2);
        assert!(consumed.contains("A1"));
    }
}
