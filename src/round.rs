//! Rounding modes, the rounding decision, and the ternary rounding outcome.

use super::bigint::LossFraction;

/// Defines the supported rounding modes.
/// See IEEE754-2019 Section 4.3 Rounding-direction attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    NearestTiesToEven,
    NearestTiesToAway,
    Zero,
    Positive,
    Negative,
    /// Round away from zero (MPFR's RNDA).
    Away,
}

impl RoundingMode {
    /// All of the rounding modes, in a fixed order.
    pub const ALL: [RoundingMode; 6] = [
        RoundingMode::NearestTiesToEven,
        RoundingMode::NearestTiesToAway,
        RoundingMode::Zero,
        RoundingMode::Positive,
        RoundingMode::Negative,
        RoundingMode::Away,
    ];

    /// Create a rounding mode from a string, if valid, or return none.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut rm = None;
        for mode in Self::ALL {
            if mode.as_string() == s {
                rm = Some(mode);
            }
        }
        rm
    }

    /// Return a string that represents the rounding mode.
    pub fn as_string(&self) -> &str {
        match self {
            RoundingMode::NearestTiesToEven => "NearestTiesToEven",
            RoundingMode::NearestTiesToAway => "NearestTiesToAway",
            RoundingMode::Zero => "Zero",
            RoundingMode::Positive => "Positive",
            RoundingMode::Negative => "Negative",
            RoundingMode::Away => "Away",
        }
    }

    /// Returns true if a truncated magnitude needs to be incremented (rounded
    /// away from zero). `negative` is the sign of the value, `loss` describes
    /// the truncated bits, and `lsb_odd` is the last retained bit.
    pub(crate) fn round_away(
        &self,
        negative: bool,
        loss: LossFraction,
        lsb_odd: bool,
    ) -> bool {
        if loss.is_exactly_zero() {
            return false;
        }
        match self {
            RoundingMode::Positive => !negative,
            RoundingMode::Negative => negative,
            RoundingMode::Zero => false,
            RoundingMode::Away => true,
            RoundingMode::NearestTiesToAway => loss.is_gte_half(),
            RoundingMode::NearestTiesToEven => {
                loss.is_mt_half() || (loss.is_exactly_half() && lsb_odd)
            }
        }
    }
}

/// Describes how a rounded value relates to the exact value it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ternary {
    /// The rounded value is smaller than the exact value.
    Below,
    /// The rounded value equals the exact value.
    Exact,
    /// The rounded value is larger than the exact value.
    Above,
}

impl Ternary {
    /// Returns the direction of an inexact rounding of a value with the sign
    /// `negative`. Incrementing the magnitude moves negative numbers down.
    pub(crate) fn from_rounding(negative: bool, rounded_away: bool) -> Self {
        if rounded_away ^ negative {
            Ternary::Above
        } else {
            Ternary::Below
        }
    }

    /// Returns true if no rounding happened.
    pub fn is_exact(&self) -> bool {
        matches!(self, Ternary::Exact)
    }

    /// Returns the MPFR-style ternary value: -1, 0 or +1.
    pub fn as_i32(&self) -> i32 {
        match self {
            Ternary::Below => -1,
            Ternary::Exact => 0,
            Ternary::Above => 1,
        }
    }
}

impl From<Ternary> for i32 {
    fn from(t: Ternary) -> i32 {
        t.as_i32()
    }
}

#[test]
fn test_rounding_decisions() {
    use LossFraction::*;
    use RoundingMode::*;

    // Nothing lost, nothing to do, whatever the mode.
    for rm in RoundingMode::ALL {
        assert!(!rm.round_away(false, ExactlyZero, true));
        assert!(!rm.round_away(true, ExactlyZero, false));
    }

    assert!(!NearestTiesToEven.round_away(false, LessThanHalf, true));
    assert!(!NearestTiesToEven.round_away(false, ExactlyHalf, false));
    assert!(NearestTiesToEven.round_away(false, ExactlyHalf, true));
    assert!(NearestTiesToEven.round_away(true, MoreThanHalf, false));

    assert!(NearestTiesToAway.round_away(false, ExactlyHalf, false));
    assert!(!NearestTiesToAway.round_away(true, LessThanHalf, true));

    assert!(!Zero.round_away(false, MoreThanHalf, true));
    assert!(Away.round_away(true, LessThanHalf, false));

    assert!(Positive.round_away(false, LessThanHalf, false));
    assert!(!Positive.round_away(true, MoreThanHalf, false));
    assert!(Negative.round_away(true, LessThanHalf, false));
    assert!(!Negative.round_away(false, MoreThanHalf, false));
}

#[test]
fn test_ternary() {
    assert_eq!(Ternary::from_rounding(false, true), Ternary::Above);
    assert_eq!(Ternary::from_rounding(false, false), Ternary::Below);
    assert_eq!(Ternary::from_rounding(true, true), Ternary::Below);
    assert_eq!(Ternary::from_rounding(true, false), Ternary::Above);
    assert_eq!(i32::from(Ternary::Exact), 0);
    assert_eq!(Ternary::Below.as_i32(), -1);
    assert!(Ternary::Exact.is_exact());
}

#[test]
fn test_rounding_mode_names() {
    for rm in RoundingMode::ALL {
        assert_eq!(RoundingMode::from_string(rm.as_string()), Some(rm));
    }
    assert_eq!(RoundingMode::from_string("Sideways"), None);
}
