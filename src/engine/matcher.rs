//! The tiered-threshold greedy matcher.
//!
//! ## Scan Policy
//!
//! Each cathode scans the anode list in input order, skipping anodes whose
//! name has already been consumed:
//!
//! - The first `InRange` hit wins outright and stops the scan. Any ratio
//!   inside the window is equally acceptable, so there is nothing to gain
//!   from scanning further.
//! - The first `Close` and the first `LastResort` hit are each captured
//!   eagerly but do NOT stop the scan; they are used only if no `InRange`
//!   anode exists anywhere later in the list.
//!
//! After the scan, priority resolves `InRange > Close > LastResort > none`.
//! A resolved candidate consumes its anode (by name) for the remainder of
//! the run; an unresolved cathode becomes `NO MATCH FOUND`.
//!
//! A zero-capacity cathode never scans at all: it is emitted as
//! `INVALID CATHODE` and consumes nothing.
//!
//! ## Complexity
//!
//! O(C x A) worst case. Runs here are directory-file sized (hundreds of
//! rows), so the simple rescan beats maintaining an index; the per-anode
//! work is one division and at most three window tests.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::types::{ComponentRecord, MatchReport, MatchType, Pairing, Tier};

/// A tier hit recorded during one cathode's scan
struct Candidate<'a> {
    anode: &'a ComponentRecord,
    raw_ratio: Decimal,
    tier: Tier,
}

impl<'a> Candidate<'a> {
    fn new(anode: &'a ComponentRecord, raw_ratio: Decimal, tier: Tier) -> Self {
        Self {
            anode,
            raw_ratio,
            tier,
        }
    }
}

/// Deterministic greedy matching engine.
///
/// The engine owns the consumption set for the duration of one [`run`];
/// the set starts empty, grows as cathodes are processed in order, and is
/// frozen into the returned [`MatchReport`]. Runs are independent: nothing
/// carries over from one call to the next.
///
/// [`run`]: MatchEngine::run
#[derive(Debug, Default)]
pub struct MatchEngine;

impl MatchEngine {
    /// Create a new matching engine
    pub fn new() -> Self {
        Self
    }

    /// Match every cathode against the anode list.
    ///
    /// Produces exactly one [`Pairing`] per cathode, in the cathode list's
    /// order. Each anode is assigned to at most one cathode across the whole
    /// run.
    ///
    /// # Example
    ///
    /// ```
    /// use cellmatch::engine::MatchEngine;
    /// use cellmatch::types::{ComponentRecord, MatchType};
    /// use rust_decimal::Decimal;
    ///
    /// // 107/100 = 1.07 sits in the below-window fallback band
    /// let cathodes = vec![
    ///     ComponentRecord::new("C1", Decimal::from(100)),
    ///     ComponentRecord::new("C2", Decimal::from(100)),
    /// ];
    /// let anodes = vec![ComponentRecord::new("A1", Decimal::from(107))];
    ///
    /// let report = MatchEngine::new().run(&cathodes, &anodes);
    /// assert_eq!(report.pairings()[0].match_type, MatchType::LastResort);
    /// // A1 is consumed, so the second cathode finds nothing
    /// assert_eq!(report.pairings()[1].match_type, MatchType::NoMatch);
    /// ```
    pub fn run(&self, cathodes: &[ComponentRecord], anodes: &[ComponentRecord]) -> MatchReport {
        let mut consumed: HashSet<String> = HashSet::new();
        let mut pairings = Vec::with_capacity(cathodes.len());

        for cathode in cathodes {
            if cathode.capacity.is_zero() {
                pairings.push(Pairing::unmatched(cathode, MatchType::InvalidCathode));
                continue;
            }

            let chosen = Self::scan(cathode, anodes, &consumed);
            match chosen {
                Some(candidate) => {
                    consumed.insert(candidate.anode.name.clone());
                    pairings.push(Pairing::matched(
                        cathode,
                        candidate.anode,
                        candidate.tier,
                        candidate.raw_ratio,
                    ));
                }
                None => pairings.push(Pairing::unmatched(cathode, MatchType::NoMatch)),
            }
        }

        MatchReport::new(pairings, consumed)
    }

    /// Scan the anode list for one cathode and resolve tier priority.
    fn scan<'a>(
        cathode: &ComponentRecord,
        anodes: &'a [ComponentRecord],
        consumed: &HashSet<String>,
    ) -> Option<Candidate<'a>> {
        let mut in_range: Option<Candidate<'a>> = None;
        let mut close: Option<Candidate<'a>> = None;
        let mut last_resort: Option<Candidate<'a>> = None;

        for anode in anodes {
            if consumed.contains(&anode.name) {
                continue;
            }
            // Guarded by the zero-capacity check in run(); checked_div also
            // covers the (unreachable in practice) overflow case.
            let Some(ratio) = anode.capacity.checked_div(cathode.capacity) else {
                continue;
            };

            match Tier::classify(ratio) {
                Some(Tier::InRange) => {
                    // First in-window anode wins; stop scanning.
                    in_range = Some(Candidate::new(anode, ratio, Tier::InRange));
                    break;
                }
                Some(Tier::Close) if close.is_none() => {
                    close = Some(Candidate::new(anode, ratio, Tier::Close));
                }
                Some(Tier::LastResort) if last_resort.is_none() => {
                    last_resort = Some(Candidate::new(anode, ratio, Tier::LastResort));
                }
                _ => {}
            }
        }

        in_range.or(close).or(last_resort)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
