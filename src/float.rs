use super::bigint::BigInt;
use super::bigint::LossFraction;
use super::error::ConversionError;
use super::round::{RoundingMode, Ternary};
use core::cmp::Ordering;

/// The smallest supported precision, in bits.
pub const MIN_PRECISION: usize = 1;

/// The smallest and largest supported exponent widths, in bits.
pub(crate) const MIN_EXPONENT_BITS: usize = 2;
pub(crate) const MAX_EXPONENT_BITS: usize = 62;

/// Defines the layout of a float: the range of the exponent, the number of
/// significant bits, and the rounding mode that conversions use when no
/// rounding mode is given explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Semantics {
    /// The number of bits that define the range of the exponent.
    pub exponent: usize,
    /// The number of bits in the significand (mantissa + 1).
    pub precision: usize,
    /// The default rounding mode.
    pub mode: RoundingMode,
}

impl Semantics {
    pub const fn new(
        exponent: usize,
        precision: usize,
        mode: RoundingMode,
    ) -> Self {
        Semantics {
            exponent,
            precision,
            mode,
        }
    }
    /// Returns the precision in bits.
    pub fn get_precision(&self) -> usize {
        self.precision
    }
    /// Returns the length of the mantissa in bits (precision - 1).
    pub fn get_mantissa_len(&self) -> usize {
        self.precision - 1
    }
    /// Returns the length of the exponent in bits, which defines the valid
    /// range.
    pub fn get_exponent_len(&self) -> usize {
        self.exponent
    }
    /// Returns the default rounding mode of the semantics.
    pub fn get_rounding_mode(&self) -> RoundingMode {
        self.mode
    }

    /// Create a new float semantics with the precision `precision`.
    pub fn with_precision(&self, precision: usize) -> Semantics {
        Semantics::new(self.exponent, precision, self.mode)
    }

    /// Returns the exponent bias for the number, as a positive number.
    /// https://en.wikipedia.org/wiki/IEEE_754#Basic_and_interchange_formats
    pub(crate) fn get_bias(&self) -> i64 {
        let e = self.get_exponent_len();
        ((1u64 << (e - 1)) - 1) as i64
    }

    /// Returns the upper and lower bounds of the exponent.
    pub fn get_exp_bounds(&self) -> (i64, i64) {
        let exp_min: i64 = -self.get_bias() + 1;
        // The highest value is 0xFFFE, because 0xFFFF is used for signaling.
        let exp_max: i64 = (1 << self.get_exponent_len()) - self.get_bias() - 2;
        (exp_min, exp_max)
    }

    /// Check that floats with these semantics can be constructed.
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.precision < MIN_PRECISION {
            return Err(ConversionError::PrecisionTooSmall {
                precision: self.precision,
                min: MIN_PRECISION,
            });
        }
        if !(MIN_EXPONENT_BITS..=MAX_EXPONENT_BITS).contains(&self.exponent) {
            return Err(ConversionError::InvalidExponentWidth {
                bits: self.exponent,
            });
        }
        Ok(())
    }
}

/// Declare the different categories of the floating point number. These
/// categories are internal to the float, and can be access by the acessors:
/// is_inf, is_zero, is_nan, is_normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Infinity,
    NaN,
    Normal,
    Zero,
}

/// This is the main data structure of this library. It represents an
/// arbitrary-precision floating-point number. Normal numbers always carry
/// exactly `precision` significant bits; there are no denormals, and values
/// that don't fit in the exponent range are rejected rather than rounded to
/// infinity or zero.
#[derive(Debug, Clone)]
pub struct Float {
    // The semantics of the float (precision, exponent range).
    sem: Semantics,
    // The Sign bit.
    sign: bool,
    // The exponent of the leading bit.
    exp: i64,
    // The significand, including the leading bit, aligned to the right.
    // Format [00000001xxxxxxx].
    mantissa: BigInt,
    // The kind of number this float represents.
    category: Category,
}

impl Float {
    pub fn get_mantissa_len(&self) -> usize {
        self.sem.get_mantissa_len()
    }
    pub fn get_exponent_len(&self) -> usize {
        self.sem.get_exponent_len()
    }
    pub fn get_precision(&self) -> usize {
        self.sem.get_precision()
    }

    /// Create a new normal floating point number. The mantissa must have
    /// exactly `precision` significant bits, and the exponent must be in the
    /// range of the semantics. A zero mantissa makes a zero. Panics if the
    /// fields are not valid, see [`Float::try_new`].
    pub fn new(sem: Semantics, sign: bool, exp: i64, mantissa: BigInt) -> Self {
        match Self::try_new(sem, sign, exp, mantissa) {
            Ok(x) => x,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a new normal floating point number, or report why the fields
    /// don't describe one.
    pub fn try_new(
        sem: Semantics,
        sign: bool,
        exp: i64,
        mantissa: BigInt,
    ) -> Result<Self, ConversionError> {
        sem.validate()?;
        if mantissa.is_zero() {
            return Ok(Float::zero(sem, sign));
        }
        let bits = mantissa.msb_index();
        if bits != sem.get_precision() {
            return Err(ConversionError::InvalidSignificand {
                bits,
                precision: sem.get_precision(),
            });
        }
        let (exp_min, exp_max) = sem.get_exp_bounds();
        if exp > exp_max {
            return Err(ConversionError::ExponentOverflow { exp, max: exp_max });
        }
        if exp < exp_min {
            return Err(ConversionError::ExponentUnderflow { exp, min: exp_min });
        }
        Ok(Self::raw(sem, sign, exp, mantissa, Category::Normal))
    }

    /// Create a new floating point number, without checking the fields.
    pub(crate) fn raw(
        sem: Semantics,
        sign: bool,
        exp: i64,
        mantissa: BigInt,
        category: Category,
    ) -> Self {
        Float {
            sem,
            sign,
            exp,
            mantissa,
            category,
        }
    }

    /// Returns a new zero float.
    pub fn zero(sem: Semantics, sign: bool) -> Self {
        Self::raw(sem, sign, 0, BigInt::zero(), Category::Zero)
    }

    /// Returns a new float with the value one.
    pub fn one(sem: Semantics, sign: bool) -> Self {
        let one = BigInt::one_hot(sem.get_mantissa_len());
        Self::raw(sem, sign, 0, one, Category::Normal)
    }

    /// Returns a new infinity float.
    pub fn inf(sem: Semantics, sign: bool) -> Self {
        Self::raw(sem, sign, 0, BigInt::zero(), Category::Infinity)
    }

    /// Returns a new NaN float.
    pub fn nan(sem: Semantics, sign: bool) -> Self {
        Self::raw(sem, sign, 0, BigInt::zero(), Category::NaN)
    }

    /// Returns true if the Float is negative
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// Returns true if the Float is +-inf.
    pub fn is_inf(&self) -> bool {
        matches!(self.category, Category::Infinity)
    }

    /// Returns true if the Float is a +- NaN.
    pub fn is_nan(&self) -> bool {
        matches!(self.category, Category::NaN)
    }

    /// Returns true if the Float is a +- zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.category, Category::Zero)
    }

    /// Returns true if this number is normal (not Zero, Nan, Inf).
    pub fn is_normal(&self) -> bool {
        matches!(self.category, Category::Normal)
    }

    /// Returns true if this number is zero or normal (not Nan, Inf).
    pub fn is_finite(&self) -> bool {
        self.is_normal() || self.is_zero()
    }

    /// Return the semantics of the number
    pub fn get_semantics(&self) -> Semantics {
        self.sem
    }

    /// Returns the default rounding mode of the number.
    pub fn get_rounding_mode(&self) -> RoundingMode {
        self.sem.get_rounding_mode()
    }

    /// Returns the sign of the float. True means negative.
    pub fn get_sign(&self) -> bool {
        self.sign
    }

    /// Returns the mantissa of the float.
    pub fn get_mantissa(&self) -> BigInt {
        self.mantissa.clone()
    }

    /// Returns the exponent of the float.
    pub fn get_exp(&self) -> i64 {
        self.exp
    }

    /// Returns the category of the float.
    pub fn get_category(&self) -> Category {
        self.category
    }

    /// Returns a new float which has a flipped sign (negated value).
    pub fn neg(&self) -> Self {
        Self::raw(
            self.sem,
            !self.sign,
            self.exp,
            self.mantissa.clone(),
            self.category,
        )
    }

    /// Verify that the exponent and the mantissa are legal.
    pub(crate) fn check_bounds(&self) {
        let bounds = self.sem.get_exp_bounds();
        debug_assert!(self.exp >= bounds.0);
        debug_assert!(self.exp <= bounds.1);
        debug_assert_eq!(self.mantissa.msb_index(), self.sem.get_precision());
    }

    pub(crate) fn shift_significand_left(&mut self, amt: u64) {
        self.exp -= amt as i64;
        self.mantissa.shift_left(amt as usize);
    }

    /// Shift the significand right by `amt` bits, keeping the value by
    /// incrementing the exponent, and report the bits that were lost.
    pub(crate) fn shift_significand_right(&mut self, amt: u64) -> LossFraction {
        self.exp += amt as i64;
        let loss = self.mantissa.get_loss_kind_for_bit(amt as usize);
        self.mantissa.shift_right(amt as usize);
        loss
    }
}

impl Float {
    /// Shift the mantissa so that it holds exactly `precision` bits, and round
    /// the number if bits are lost. `loss` describes the bits that were
    /// already dropped below the lowest bit of the mantissa. Returns the
    /// direction of the rounding, or an error if the rounded exponent does not
    /// fit in the exponent range.
    pub(crate) fn round_to_precision(
        &mut self,
        rm: RoundingMode,
        loss: LossFraction,
    ) -> Result<Ternary, ConversionError> {
        debug_assert!(self.is_normal());
        let precision = self.sem.get_precision() as i64;
        let nmsb = self.mantissa.msb_index() as i64;
        let mut loss = loss;

        // Step I - align the MSB of the mantissa to the precision.
        match nmsb.cmp(&precision) {
            Ordering::Greater => {
                let lost = self.shift_significand_right((nmsb - precision) as u64);
                loss = LossFraction::combine(lost, loss);
            }
            Ordering::Less => {
                debug_assert!(loss.is_exactly_zero(), "losing information");
                self.shift_significand_left((precision - nmsb) as u64);
            }
            Ordering::Equal => {}
        }

        // Step II - round the number.
        let mut ternary = Ternary::Exact;
        if !loss.is_exactly_zero() {
            let away = rm.round_away(self.sign, loss, self.mantissa.is_odd());
            if away {
                self.mantissa.inplace_add(&BigInt::one());
                // Did the mantissa overflow?
                if self.mantissa.msb_index() as i64 > precision {
                    self.shift_significand_right(1);
                }
            }
            ternary = Ternary::from_rounding(self.sign, away);
        }

        // Step III - check the exponent range.
        let (exp_min, exp_max) = self.sem.get_exp_bounds();
        if self.exp > exp_max {
            return Err(ConversionError::ExponentOverflow {
                exp: self.exp,
                max: exp_max,
            });
        }
        if self.exp < exp_min {
            return Err(ConversionError::ExponentUnderflow {
                exp: self.exp,
                min: exp_min,
            });
        }
        self.check_bounds();
        Ok(ternary)
    }
}

// IEEE 754-2019
// Table 3.5 — Binary interchange format parameters.
use RoundingMode::NearestTiesToEven as nte;

/// Predefined FP16 float with 5 exponent bits, and 10 mantissa bits.
pub const FP16: Semantics = Semantics::new(5, 11, nte);
/// Predefined FP32 float with 8 exponent bits, and 23 mantissa bits.
pub const FP32: Semantics = Semantics::new(8, 24, nte);
/// Predefined FP64 float with 11 exponent bits, and 52 mantissa bits.
pub const FP64: Semantics = Semantics::new(11, 53, nte);
/// Predefined FP128 float with 15 exponent bits, and 112 mantissa bits.
pub const FP128: Semantics = Semantics::new(15, 113, nte);
/// Predefined FP256 float with 19 exponent bits, and 236 mantissa bits.
pub const FP256: Semantics = Semantics::new(19, 237, nte);

/// Floats are equal when they represent the same value: the signs of zero are
/// ignored, and NaN is not equal to anything.
impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        let bitwise = self.sign == other.sign
            && self.exp == other.exp
            && self.mantissa == other.mantissa
            && self.category == other.category;

        match self.category {
            Category::Infinity | Category::Normal => bitwise,
            Category::Zero => other.is_zero(),
            Category::NaN => false,
        }
    }
}

/// Page 66. Chapter 3. Floating-Point Formats and Environment
/// Table 3.8: Comparison predicates and the four relations.
impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let bool_to_ord = |ord: bool| -> Option<Ordering> {
            if ord {
                Some(Ordering::Less)
            } else {
                Some(Ordering::Greater)
            }
        };

        match (self.category, other.category) {
            (Category::NaN, _) | (_, Category::NaN) => None,
            (Category::Zero, Category::Zero) => Some(Ordering::Equal),
            (Category::Infinity, Category::Infinity) => {
                if self.sign == other.sign {
                    Some(Ordering::Equal)
                } else {
                    bool_to_ord(self.sign)
                }
            }
            (Category::Infinity, Category::Normal)
            | (Category::Infinity, Category::Zero)
            | (Category::Normal, Category::Zero) => bool_to_ord(self.sign),

            (Category::Normal, Category::Infinity)
            | (Category::Zero, Category::Infinity)
            | (Category::Zero, Category::Normal) => bool_to_ord(!other.sign),

            (Category::Normal, Category::Normal) => {
                if self.sign != other.sign {
                    return bool_to_ord(self.sign);
                }
                // Same sign. Compare the magnitudes, which only line up when
                // the precisions match, so compare the aligned mantissas.
                let magnitude = if self.exp != other.exp {
                    self.exp.cmp(&other.exp)
                } else {
                    let mut lhs = self.get_mantissa();
                    let mut rhs = other.get_mantissa();
                    let (p0, p1) = (self.get_precision(), other.get_precision());
                    if p0 < p1 {
                        lhs.shift_left(p1 - p0);
                    } else {
                        rhs.shift_left(p0 - p1);
                    }
                    lhs.cmp(&rhs)
                };
                Some(if self.sign {
                    magnitude.reverse()
                } else {
                    magnitude
                })
            }
        }
    }
}

#[test]
fn test_semantics_validation() {
    assert!(FP64.validate().is_ok());
    let bad = FP64.with_precision(0);
    assert_eq!(
        bad.validate(),
        Err(ConversionError::PrecisionTooSmall {
            precision: 0,
            min: MIN_PRECISION
        })
    );
    let bad = Semantics::new(1, 10, nte);
    assert_eq!(
        bad.validate(),
        Err(ConversionError::InvalidExponentWidth { bits: 1 })
    );
    assert_eq!(FP16.get_exp_bounds(), (-14, 15));
    assert_eq!(FP64.get_exp_bounds(), (-1022, 1023));
}

#[test]
fn test_special_constructors() {
    let sem = FP32;
    assert!(Float::nan(sem, false).is_nan());
    assert!(!Float::nan(sem, false).is_finite());
    assert!(Float::inf(sem, true).is_inf());
    assert!(Float::inf(sem, true).is_negative());
    assert!(Float::zero(sem, true).is_zero());
    assert!(Float::zero(sem, true).is_finite());
    assert_eq!(Float::zero(sem, true), Float::zero(sem, false));
    assert!(Float::nan(sem, false) != Float::nan(sem, false));

    let one = Float::one(sem, false);
    assert!(one.is_normal());
    assert_eq!(one.get_exp(), 0);
    assert_eq!(one.get_mantissa().msb_index(), sem.get_precision());
    assert!(Float::new(sem, false, 5, BigInt::zero()).is_zero());
}

#[test]
fn test_try_new_rejects_bad_fields() {
    let sem = Semantics::new(4, 8, nte);
    let m = BigInt::from_u64(0b1000_0001);
    assert!(Float::try_new(sem, true, 7, m.clone()).is_ok());
    assert!(Float::try_new(sem, false, -6, m.clone()).is_ok());
    assert_eq!(
        Float::try_new(sem, false, 1000, m.clone()).unwrap_err(),
        ConversionError::ExponentOverflow { exp: 1000, max: 7 }
    );
    assert_eq!(
        Float::try_new(sem, false, -7, m).unwrap_err(),
        ConversionError::ExponentUnderflow { exp: -7, min: -6 }
    );
    // The significand must carry exactly 8 bits.
    assert_eq!(
        Float::try_new(sem, false, 0, BigInt::from_u64(5)).unwrap_err(),
        ConversionError::InvalidSignificand { bits: 3, precision: 8 }
    );
    assert_eq!(
        Float::try_new(sem, false, 0, BigInt::from_u64(0x100)).unwrap_err(),
        ConversionError::InvalidSignificand { bits: 9, precision: 8 }
    );
    assert_eq!(
        Float::try_new(sem.with_precision(0), false, 0, BigInt::one()).unwrap_err(),
        ConversionError::PrecisionTooSmall { precision: 0, min: 1 }
    );
}

#[test]
#[should_panic(expected = "does not match the precision")]
fn test_new_panics_on_bad_significand() {
    let sem = Semantics::new(4, 8, nte);
    let _ = Float::new(sem, false, 1000, BigInt::from_u64(5));
}

#[test]
#[should_panic(expected = "overflows the maximum exponent")]
fn test_new_panics_on_bad_exponent() {
    let sem = Semantics::new(4, 8, nte);
    let _ = Float::new(sem, false, 1000, BigInt::from_u64(0xff));
}

#[test]
fn test_comparisons() {
    let sem = FP32;
    let one = Float::one(sem, false);
    let m_one = one.neg();
    let zero = Float::zero(sem, false);
    let inf = Float::inf(sem, false);
    let nan = Float::nan(sem, false);

    assert!(m_one < zero);
    assert!(zero < one);
    assert!(one < inf);
    assert!(inf.neg() < m_one);
    assert!(nan.partial_cmp(&one).is_none());

    // 1.5 > 1.0 and -1.5 < -1.0.
    let mut m = BigInt::from_u64(0b11);
    m.shift_left(sem.get_mantissa_len() - 1);
    let one_and_half = Float::new(sem, false, 0, m);
    assert!(one_and_half > one);
    assert!(one_and_half.neg() < m_one);

    // Numbers with a larger exponent are larger in magnitude.
    let two = Float::new(sem, false, 1, one.get_mantissa());
    assert!(two > one_and_half);
    assert!(two.neg() < one_and_half.neg());
}
