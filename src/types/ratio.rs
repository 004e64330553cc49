//! NP-ratio math: tier windows, classification, and display rounding.
//!
//! ## Overview
//!
//! The NP ratio is `anode.capacity / cathode.capacity`. A ratio is acceptable
//! when it falls into one of three decimal windows, checked in priority
//! order:
//!
//! | Tier          | Window (inclusive) | Compared value      | Stored ratio |
//! |---------------|--------------------|---------------------|--------------|
//! | `InRange`     | `[1.075, 1.124]`   | ratio rounded to 3dp| 2dp          |
//! | `Close`       | `[1.125, 1.134]`   | raw ratio           | 3dp          |
//! | `LastResort`  | `[1.065, 1.074]`   | raw ratio           | 2dp          |
//!
//! Only the `InRange` comparison rounds before bounding; `Close` and
//! `LastResort` compare the raw ratio. The stored-ratio precision is
//! asymmetric across tiers. Both quirks are inherited from the process
//! engineers' established workflow and are load-bearing: changing either
//! changes which anode a cathode receives.
//!
//! ## Rounding
//!
//! All rounding is `Decimal::round_dp`, which is round-half-even. A raw
//! ratio of exactly 1.1245 rounds to 1.124 and therefore still classifies
//! as `InRange`.

use rust_decimal::Decimal;

/// Decimal places applied to a ratio before the `InRange` window test
pub const WINDOW_DP: u32 = 3;

// ============================================================================
// Window
// ============================================================================

/// An inclusive decimal interval, bounds given in thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    lo: Decimal,
    hi: Decimal,
}

impl Window {
    fn from_milli(lo: i64, hi: i64) -> Self {
        Self {
            lo: Decimal::new(lo, WINDOW_DP),
            hi: Decimal::new(hi, WINDOW_DP),
        }
    }

    /// Check whether `value` lies inside the window (inclusive on both ends)
    #[inline]
    pub fn contains(&self, value: Decimal) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Lower bound
    #[inline]
    pub fn lo(&self) -> Decimal {
        self.lo
    }

    /// Upper bound
    #[inline]
    pub fn hi(&self) -> Decimal {
        self.hi
    }
}

// ============================================================================
// Tier
// ============================================================================

/// The acceptability band an NP ratio falls into.
///
/// Tier priority when resolving a cathode's candidates is
/// `InRange > Close > LastResort`; see
/// [`MatchEngine`](crate::engine::MatchEngine) for the scan policy built on
/// top of this classification.
///
/// ## Example
///
/// ```
/// use cellmatch::types::Tier;
/// use rust_decimal::Decimal;
///
/// // 110 / 100 = 1.1 -> inside the acceptable window
/// assert_eq!(Tier::classify(Decimal::new(11, 1)), Some(Tier::InRange));
///
/// // 1.07 -> below the acceptable window, inside the fallback band
/// assert_eq!(Tier::classify(Decimal::new(107, 2)), Some(Tier::LastResort));
///
/// // 1.05 -> outside every band
/// assert_eq!(Tier::classify(Decimal::new(105, 2)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Acceptable window; the scan stops on the first hit
    InRange,
    /// Slightly above the acceptable window; kept as a fallback
    Close,
    /// Slightly below the acceptable window; kept as the final fallback
    LastResort,
}

impl Tier {
    /// The acceptable window, tested against the ratio rounded to 3dp
    pub fn in_range_window() -> Window {
        Window::from_milli(1_075, 1_124)
    }

    /// The above-window fallback band, tested against the raw ratio
    pub fn close_window() -> Window {
        Window::from_milli(1_125, 1_134)
    }

    /// The below-window fallback band, tested against the raw ratio
    pub fn last_resort_window() -> Window {
        Window::from_milli(1_065, 1_074)
    }

    /// Classify a raw NP ratio into a tier.
    ///
    /// Returns `None` when the ratio falls outside all three windows.
    /// The `InRange` test sees the ratio rounded to 3dp; the two fallback
    /// tests see the raw ratio.
    pub fn classify(ratio: Decimal) -> Option<Tier> {
        if Self::in_range_window().contains(ratio.round_dp(WINDOW_DP)) {
            Some(Tier::InRange)
        } else if Self::close_window().contains(ratio) {
            Some(Tier::Close)
        } else if Self::last_resort_window().contains(ratio) {
            Some(Tier::LastResort)
        } else {
            None
        }
    }

    /// The ratio value stored on a result row for this tier.
    ///
    /// 2dp for `InRange` and `LastResort`, 3dp for `Close`.
    pub fn stored_ratio(self, ratio: Decimal) -> Decimal {
        match self {
            Tier::InRange | Tier::LastResort => ratio.round_dp(2),
            Tier::Close => ratio.round_dp(3),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_window_inclusive_bounds() {
        let w = Tier::in_range_window();
        assert!(w.contains(d("1.075")));
        assert!(w.contains(d("1.124")));
        assert!(!w.contains(d("1.0749")));
        assert!(!w.contains(d("1.1241")));
        assert_eq!(w.lo(), d("1.075"));
        assert_eq!(w.hi(), d("1.124"));
    }

    #[test]
    fn test_classify_in_range_bounds() {
        assert_eq!(Tier::classify(d("1.075")), Some(Tier::InRange));
        assert_eq!(Tier::classify(d("1.124")), Some(Tier::InRange));
        assert_eq!(Tier::classify(d("1.1")), Some(Tier::InRange));
    }

    #[test]
    fn test_classify_rounds_before_in_range_test() {
        // 1.0746 rounds to 1.075 and lands inside the window
        assert_eq!(Tier::classify(d("1.0746")), Some(Tier::InRange));
        // 1.1244 rounds to 1.124, still inside
        assert_eq!(Tier::classify(d("1.1244")), Some(Tier::InRange));
        // half-even: 1.1245 rounds down to 1.124
        assert_eq!(Tier::classify(d("1.1245")), Some(Tier::InRange));
    }

    #[test]
    fn test_classify_close_bounds() {
        assert_eq!(Tier::classify(d("1.125")), Some(Tier::Close));
        assert_eq!(Tier::classify(d("1.134")), Some(Tier::Close));
    }

    #[test]
    fn test_classify_last_resort_bounds() {
        assert_eq!(Tier::classify(d("1.065")), Some(Tier::LastResort));
        assert_eq!(Tier::classify(d("1.074")), Some(Tier::LastResort));
        assert_eq!(Tier::classify(d("1.07")), Some(Tier::LastResort));
    }

    #[test]
    fn test_classify_gaps() {
        // Below every band
        assert_eq!(Tier::classify(d("1.05")), None);
        // Above every band
        assert_eq!(Tier::classify(d("1.2")), None);
        // Rounds to 1.125: outside InRange, and the raw value is below the
        // Close band, so it classifies as nothing at all
        assert_eq!(Tier::classify(d("1.1249")), None);
        // Raw 1.0744 is above the LastResort band and rounds to 1.074,
        // which never reaches the rounded InRange test's window
        assert_eq!(Tier::classify(d("1.0744")), None);
        // Negative and zero ratios (negative capacities upstream)
        assert_eq!(Tier::classify(d("-1.1")), None);
        assert_eq!(Tier::classify(Decimal::ZERO), None);
    }

    #[test]
    fn test_stored_ratio_precision() {
        // InRange and LastResort store 2dp
        assert_eq!(Tier::InRange.stored_ratio(d("1.1036")), d("1.10"));
        assert_eq!(Tier::LastResort.stored_ratio(d("1.0672")), d("1.07"));
        // Close stores 3dp
        assert_eq!(Tier::Close.stored_ratio(d("1.1287")), d("1.129"));
    }

    #[test]
    fn test_stored_ratio_trims_nothing_when_exact() {
        // 1.1 at 2dp is still 1.1; round_dp never pads scale
        assert_eq!(Tier::InRange.stored_ratio(d("1.1")), d("1.1"));
    }
}
