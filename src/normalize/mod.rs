//! Record normalization: the intentionally lossy cleaning step.
//!
//! ## Contract
//!
//! Given the raw (name, capacity) pairs extracted from one table column
//! pair, produce a cleaned ordered sequence where:
//!
//! - rows whose capacity cell did not coerce to a decimal, or whose name
//!   cell was empty, are dropped;
//! - rows that duplicate an earlier row exactly (same name AND same numeric
//!   capacity) are dropped;
//! - the relative order of the survivors is preserved.
//!
//! Dropping is data hygiene, not failure: this function is total and never
//! reports an error. It is applied independently to the anode column pair
//! and the cathode column pair.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::types::{ComponentRecord, RawRecord};

/// Clean a raw row sequence into an ordered list of component records.
///
/// ## Example
///
/// ```
/// use cellmatch::normalize::normalize;
/// use cellmatch::types::RawRecord;
/// use rust_decimal::Decimal;
///
/// let raw = vec![
///     RawRecord::new(Some("A1".into()), Some(Decimal::from(110))),
///     RawRecord::new(Some("A2".into()), None), // unparsable capacity cell
///     RawRecord::new(Some("A1".into()), Some(Decimal::from(110))), // duplicate
/// ];
///
/// let cleaned = normalize(raw);
/// assert_eq!(cleaned.len(), 1);
/// assert_eq!(cleaned[0].name, "A1");
/// ```
pub fn normalize(raw: Vec<RawRecord>) -> Vec<ComponentRecord> {
    let total = raw.len();
    let mut seen: HashSet<(String, Decimal)> = HashSet::with_capacity(total);
    let mut cleaned = Vec::with_capacity(total);
    let mut incomplete = 0usize;
    let mut duplicates = 0usize;

    for row in raw {
        let Some(record) = row.into_record() else {
            incomplete += 1;
            continue;
        };
        if seen.insert((record.name.clone(), record.capacity)) {
            cleaned.push(record);
        } else {
            duplicates += 1;
        }
    }

    if incomplete > 0 || duplicates > 0 {
        log::debug!(
            "normalize: kept {} of {} rows ({} incomplete, {} duplicate)",
            cleaned.len(),
            total,
            incomplete,
            duplicates
        );
    }

    cleaned
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, capacity: &str) -> RawRecord {
        RawRecord::new(Some(name.to_string()), capacity.parse().ok())
    }

    #[test]
    fn test_normalize_drops_unparsable_capacity() {
        let rows = vec![raw("A1", "110"), raw("A2", "n/a"), raw("A3", "112")];

        let cleaned = normalize(rows);
        let names: Vec<&str> = cleaned.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A1", "A3"]);
    }

    #[test]
    fn test_normalize_drops_missing_name() {
        let rows = vec![
            RawRecord::new(None, Some(Decimal::from(110))),
            raw("A2", "112"),
        ];

        let cleaned = normalize(rows);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].name, "A2");
    }

    #[test]
    fn test_normalize_drops_exact_duplicates_keeps_first() {
        let rows = vec![raw("A1", "110"), raw("A2", "112"), raw("A1", "110")];

        let cleaned = normalize(rows);
        let names: Vec<&str> = cleaned.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A1", "A2"]);
    }

    #[test]
    fn test_normalize_duplicate_detection_is_numeric() {
        // 110.5 and 110.50 are the same capacity; the second row is a
        // duplicate even though the cells differed textually
        let rows = vec![raw("A1", "110.5"), raw("A1", "110.50")];

        let cleaned = normalize(rows);
        assert_eq!(cleaned.len(), 1);
    }

    #[test]
    fn test_normalize_same_name_different_capacity_both_survive() {
        let rows = vec![raw("A1", "110"), raw("A1", "112")];

        let cleaned = normalize(rows);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].capacity, Decimal::from(110));
        assert_eq!(cleaned[1].capacity, Decimal::from(112));
    }

    #[test]
    fn test_normalize_preserves_order() {
        let rows = vec![
            raw("A3", "112"),
            raw("A1", "bad"),
            raw("A2", "110"),
            raw("A3", "112"),
            raw("A4", "111"),
        ];

        let cleaned = normalize(rows);
        let names: Vec<&str> = cleaned.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A3", "A2", "A4"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize(Vec::new()).is_empty());
    }
}
