//! Component records: the named, capacity-bearing units being paired.
//!
//! Anodes and cathodes share one record shape; which role a record plays is
//! decided by the table column it was read from, not by the type.

use rust_decimal::Decimal;

// ============================================================================
// RawRecord
// ============================================================================

/// A (name, capacity) pair exactly as extracted from one source-table row.
///
/// Either field may be absent: a missing or non-numeric capacity cell is
/// `None`, as is an empty name cell. Raw records are the input to
/// [`normalize`](crate::normalize::normalize), which drops the incomplete
/// ones. Extraction never fails; a cell that cannot be coerced simply
/// produces `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Name cell, if present and non-empty
    pub name: Option<String>,

    /// Capacity cell, if it coerced to a decimal value
    pub capacity: Option<Decimal>,
}

impl RawRecord {
    /// Create a raw record from already-coerced cells
    pub fn new(name: Option<String>, capacity: Option<Decimal>) -> Self {
        Self { name, capacity }
    }

    /// Check whether both cells are present
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.capacity.is_some()
    }

    /// Promote to a [`ComponentRecord`] if both cells are present
    pub fn into_record(self) -> Option<ComponentRecord> {
        match (self.name, self.capacity) {
            (Some(name), Some(capacity)) => Some(ComponentRecord { name, capacity }),
            _ => None,
        }
    }
}

// ============================================================================
// ComponentRecord
// ============================================================================

/// A cleaned component record: a name and a finite decimal capacity.
///
/// ## Invariants
///
/// - `capacity` is a finite decimal (guaranteed by construction; `Decimal`
///   has no NaN or infinity).
/// - Names are not globally unique. After normalization drops exact
///   duplicates, residual same-name records are distinct units, but the
///   engine's consumption set is keyed by name, so consuming one shadows the
///   rest for the remainder of the run.
///
/// ## Example
///
/// ```
/// use cellmatch::types::ComponentRecord;
/// use rust_decimal::Decimal;
///
/// let anode = ComponentRecord::new("A1", Decimal::from(110));
/// assert_eq!(anode.name, "A1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Lot or unit name as it appeared in the source table
    pub name: String,

    /// Capacity in the source table's unit (typically mAh)
    pub capacity: Decimal,
}

impl ComponentRecord {
    /// Create a new component record
    pub fn new(name: impl Into<String>, capacity: Decimal) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
