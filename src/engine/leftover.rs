//! Leftover derivation: the anodes a run never assigned.
//!
//! The leftover list is reported back in the source table's layout so the
//! unused anodes can feed a future batch. Derivation is by name-set
//! membership against the frozen consumption set; order follows the
//! normalized anode list.

use std::collections::HashSet;

use crate::types::ComponentRecord;

/// Return the ordered sub-sequence of `anodes` whose names were never
/// consumed.
///
/// Together with the matched anodes this partitions the normalized anode
/// list: every anode is either consumed or a leftover, never both.
///
/// # Example
///
/// ```
/// use cellmatch::engine::leftover_anodes;
/// use cellmatch::types::ComponentRecord;
/// use rust_decimal::Decimal;
/// use std::collections::HashSet;
///
/// let anodes = vec![
///     ComponentRecord::new("A1", Decimal::from(110)),
///     ComponentRecord::new("A2", Decimal::from(112)),
/// ];
/// let consumed = HashSet::from(["A1".to_string()]);
///
/// let unused = leftover_anodes(&anodes, &consumed);
/// assert_eq!(unused.len(), 1);
/// assert_eq!(unused[0].name, "A2");
/// ```
pub fn leftover_anodes(
    anodes: &[ComponentRecord],
    consumed: &HashSet<String>,
) -> Vec<ComponentRecord> {
    anodes
        .iter()
        .filter(|anode| !consumed.contains(&anode.name))
        .cloned()
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
