//! Pairing results: one row per input cathode.
//!
//! ## Wire Strings
//!
//! `MatchType` serializes to the strings the downstream process sheets
//! expect (`IN RANGE`, `NO MATCH FOUND`, ...); these are part of the output
//! contract and must not change casually.

use std::fmt;

use rust_decimal::Decimal;

use crate::types::{ComponentRecord, Tier};

// ============================================================================
// MatchType
// ============================================================================

/// Classification of one cathode's matching outcome.
///
/// The first three variants carry an assigned anode; the last two carry
/// none. `NoMatch` means no admissible anode existed at any tier given the
/// consumption state; `InvalidCathode` means the cathode's capacity was zero
/// and matching was never attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// An anode inside the acceptable ratio window
    InRange,
    /// Fallback: ratio slightly above the acceptable window
    Close,
    /// Fallback: ratio slightly below the acceptable window
    LastResort,
    /// No admissible anode at any tier
    NoMatch,
    /// Cathode capacity was zero; matching short-circuited
    InvalidCathode,
}

impl MatchType {
    /// The string written to the `Match_Type` output column
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::InRange => "IN RANGE",
            MatchType::Close => "CLOSE",
            MatchType::LastResort => "LAST RESORT",
            MatchType::NoMatch => "NO MATCH FOUND",
            MatchType::InvalidCathode => "INVALID CATHODE",
        }
    }

    /// Whether this outcome carries an assigned anode
    #[inline]
    pub fn is_matched(self) -> bool {
        matches!(
            self,
            MatchType::InRange | MatchType::Close | MatchType::LastResort
        )
    }
}

impl From<Tier> for MatchType {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::InRange => MatchType::InRange,
            Tier::Close => MatchType::Close,
            Tier::LastResort => MatchType::LastResort,
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Pairing
// ============================================================================

/// One match-result row.
///
/// Exactly one `Pairing` is produced per normalized input cathode, in the
/// cathode list's original order. The anode fields are `Some` iff
/// `match_type.is_matched()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Cathode name, copied from the input record
    pub cathode_name: String,

    /// Cathode capacity, copied from the input record
    pub cathode_capacity: Decimal,

    /// Assigned anode name, present on matched rows only
    pub anode_name: Option<String>,

    /// Assigned anode capacity, present on matched rows only
    pub anode_capacity: Option<Decimal>,

    /// Stored NP ratio (tier-dependent precision), present on matched rows only
    pub np_ratio: Option<Decimal>,

    /// Outcome classification
    pub match_type: MatchType,
}

impl Pairing {
    /// Build a matched row from a cathode, its assigned anode, and the tier
    /// the raw ratio classified into.
    pub fn matched(
        cathode: &ComponentRecord,
        anode: &ComponentRecord,
        tier: Tier,
        raw_ratio: Decimal,
    ) -> Self {
        Self {
            cathode_name: cathode.name.clone(),
            cathode_capacity: cathode.capacity,
            anode_name: Some(anode.name.clone()),
            anode_capacity: Some(anode.capacity),
            np_ratio: Some(tier.stored_ratio(raw_ratio)),
            match_type: tier.into(),
        }
    }

    /// Build an unmatched row (`NoMatch` or `InvalidCathode`).
    pub fn unmatched(cathode: &ComponentRecord, match_type: MatchType) -> Self {
        debug_assert!(!match_type.is_matched());
        Self {
            cathode_name: cathode.name.clone(),
            cathode_capacity: cathode.capacity,
            anode_name: None,
            anode_capacity: None,
            np_ratio: None,
            match_type,
        }
    }

    /// Whether this row carries an assigned anode
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.match_type.is_matched()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
