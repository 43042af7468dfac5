//! This module contains the exact conversions between floats and rationals.
//!
//! A finite binary float is always a rational with a power-of-two
//! denominator, so the conversion to a rational is exact. The conversion
//! from a rational rounds the quotient to the precision of the target, and
//! reports the direction of the rounding.

use super::bigint::{BigInt, LossFraction};
use super::context::Context;
use super::error::ConversionError;
use super::float::{Category, Float, Semantics};
use super::rational::Rational;
use super::round::{RoundingMode, Ternary};
use core::cmp::Ordering;

impl Float {
    /// Returns the exponent of the lowest bit of the mantissa.
    fn get_lsb_exp(&self) -> i64 {
        self.get_exp() - self.get_mantissa_len() as i64
    }

    /// Decompose a normal number into `(sign, m, e)` such that the value of
    /// the number is exactly `(-1)^sign * m * 2^e`. Returns None for zero,
    /// infinity and NaN.
    pub fn to_bigint_2exp(&self) -> Option<(bool, BigInt, i64)> {
        if !self.is_normal() {
            return None;
        }
        Some((self.get_sign(), self.get_mantissa(), self.get_lsb_exp()))
    }

    /// Convert the number to the exact rational number that it represents.
    /// The result is canonical.
    ///
    /// NaN and infinity have no rational value. For them this method returns
    /// `0/1` and raises the range-error flag of `ctx`; the flag, and not the
    /// returned value, tells the caller that the conversion failed. Both signs
    /// of zero convert to `0/1` without raising the flag.
    ///
    /// # Examples
    ///
    /// ```
    ///    use arpq::{Context, Float, Rational, FP64};
    ///
    ///    let mut ctx = Context::new();
    ///    let x = Float::from_i64(FP64, -12);
    ///    assert_eq!(x.to_rational(&mut ctx), Rational::from_i64(-12));
    ///    assert!(!ctx.range_error_is_set());
    /// ```
    pub fn to_rational(&self, ctx: &mut Context) -> Rational {
        match self.get_category() {
            Category::NaN | Category::Infinity => {
                tracing::debug!(
                    category = ?self.get_category(),
                    negative = self.get_sign(),
                    "no rational value, raising the range-error flag"
                );
                ctx.set_range_error();
                Rational::zero()
            }
            Category::Zero => Rational::zero(),
            Category::Normal => self.normal_to_rational(),
        }
    }

    fn normal_to_rational(&self) -> Rational {
        debug_assert!(self.is_normal());
        let e = self.get_lsb_exp();
        let mut num = self.get_mantissa();
        let mut den = BigInt::one();
        if e >= 0 {
            num.shift_left(e as usize);
        } else {
            den.shift_left(-e as usize);
        }
        let mut q = Rational::new(self.get_sign(), num, den);
        q.canonicalize();
        q
    }

    /// Compare the number to the rational `q`, exactly. Returns None if the
    /// number is a NaN. Infinities are larger (or smaller) than any rational.
    pub fn cmp_rational(&self, q: &Rational) -> Option<Ordering> {
        match self.get_category() {
            Category::NaN => None,
            Category::Infinity => {
                if self.is_negative() {
                    Some(Ordering::Less)
                } else {
                    Some(Ordering::Greater)
                }
            }
            Category::Zero => Some(Rational::zero().cmp(q)),
            Category::Normal => Some(self.normal_to_rational().cmp(q)),
        }
    }

    /// Convert the rational `q` to the nearest float with the semantics
    /// `sem`, using the rounding mode of the semantics. See
    /// [`Float::try_from_rational_with_rm`].
    pub fn from_rational(q: &Rational, sem: Semantics) -> (Self, Ternary) {
        Self::from_rational_with_rm(q, sem, sem.get_rounding_mode())
    }

    /// Convert the rational `q` to a float with the semantics `sem`, rounding
    /// with `rm`. Panics if the semantics are invalid, or if the rounded
    /// value does not fit in the exponent range. See
    /// [`Float::try_from_rational_with_rm`].
    pub fn from_rational_with_rm(
        q: &Rational,
        sem: Semantics,
        rm: RoundingMode,
    ) -> (Self, Ternary) {
        match Self::try_from_rational_with_rm(q, sem, rm) {
            Ok(res) => res,
            Err(err) => panic!("{}", err),
        }
    }

    /// Convert the rational `q` to a float with the semantics `sem`, rounding
    /// with `rm`. Returns the rounded number, and the direction of the
    /// rounding, which is `Ternary::Exact` if and only if the float is equal
    /// to `q`. Rationals that fit in the precision (the denominator is a
    /// power of two and the numerator has at most `precision` significant
    /// bits) are always converted exactly, whatever the rounding mode.
    ///
    /// A zero converts to a positive zero. The method reports invalid
    /// semantics, and values outside of the exponent range, as errors.
    ///
    /// # Examples
    ///
    /// ```
    ///    use arpq::{Float, Rational, RoundingMode, Ternary, FP32};
    ///
    ///    let third = Rational::from_fraction(1, 3);
    ///    let rm = RoundingMode::Zero;
    ///    let (x, t) = Float::try_from_rational_with_rm(&third, FP32, rm).unwrap();
    ///    assert_eq!(t, Ternary::Below);
    ///    assert!(x.is_normal());
    /// ```
    pub fn try_from_rational_with_rm(
        q: &Rational,
        sem: Semantics,
        rm: RoundingMode,
    ) -> Result<(Self, Ternary), ConversionError> {
        sem.validate()?;
        let q = q.canonical();
        if q.is_zero() {
            return Ok((Self::zero(sem, false), Ternary::Exact));
        }

        // The quotient num/den is in the range (2^(k-1), 2^(k+1)).
        let num_msb = q.get_numerator().msb_index() as i64;
        let k = num_msb - q.get_denominator().msb_index() as i64;

        // Scale the division to produce at least two bits more than the
        // precision. The extra bits and the remainder decide the rounding.
        let scale = sem.get_precision() as i64 + 2 - k;
        let mut num = q.get_numerator().clone();
        let mut den = q.get_denominator().clone();
        if scale >= 0 {
            num.shift_left(scale as usize);
        } else {
            den.shift_left(-scale as usize);
        }
        let rem = num.inplace_div(&den);
        let loss = LossFraction::from_remainder(&rem, &den);

        // The value is num * 2^(-scale). The exponent of the float refers to
        // the bit at the precision, and not to the lowest bit.
        let exp = sem.get_mantissa_len() as i64 - scale;
        let mut res = Self::raw(sem, q.is_negative(), exp, num, Category::Normal);
        let ternary = res.round_to_precision(rm, loss)?;

        tracing::trace!(
            precision = sem.get_precision(),
            exp = res.get_exp(),
            ternary = ternary.as_i32(),
            "converted a rational to a float"
        );
        Ok((res, ternary))
    }

    /// Convert the integer `val`, negated if `sign` is set, to the nearest
    /// float with the semantics `sem`, using the rounding mode of the
    /// semantics.
    pub fn from_bigint(sem: Semantics, sign: bool, val: &BigInt) -> (Self, Ternary) {
        let q = Rational::from_bigint(sign, val.clone());
        Self::from_rational(&q, sem)
    }

    /// Load the integer `val` into the float. Notice that the number may be
    /// rounded, or may not fit in the exponent range (see from_rational).
    pub fn from_u64(sem: Semantics, val: u64) -> Self {
        Self::from_bigint(sem, false, &BigInt::from_u64(val)).0
    }

    /// Load the integer `val` into the float. Notice that the number may be
    /// rounded, or may not fit in the exponent range (see from_rational).
    pub fn from_i64(sem: Semantics, val: i64) -> Self {
        let magnitude = BigInt::from_u64(val.unsigned_abs());
        Self::from_bigint(sem, val < 0, &magnitude).0
    }
}

#[cfg(test)]
use {
    super::utils::{random_float, random_unit_float, Lfsr},
    super::{FP16, FP64, MIN_PRECISION},
    alloc::vec::Vec,
};

#[cfg(test)]
fn make_sem(precision: usize) -> Semantics {
    Semantics::new(32, precision, RoundingMode::NearestTiesToEven)
}

/// Compare the magnitude of `q` to the midpoint of the magnitudes of `lo` and
/// `hi`, exactly: `2|q|` against `|lo| + |hi|`.
#[cfg(test)]
fn cmp_to_midpoint(q: &Rational, lo: &Rational, hi: &Rational) -> Ordering {
    let dens = lo.get_denominator() * hi.get_denominator();
    let mut lhs = q.get_numerator() * &dens;
    lhs.shift_left(1);
    let sum = (lo.get_numerator() * hi.get_denominator())
        + (hi.get_numerator() * lo.get_denominator());
    let rhs = sum * q.get_denominator();
    lhs.cmp(&rhs)
}

/// Check that the round-to-nearest results `rne` and `rna` are the nearer
/// of the truncated result `zero` and the rounded-away result `away`.
#[cfg(test)]
fn check_nearest(q: &Rational, zero: &Float, away: &Float, rne: &Float, rna: &Float) {
    let mut ctx = Context::new();
    let lo = zero.to_rational(&mut ctx);
    let hi = away.to_rational(&mut ctx);
    match cmp_to_midpoint(q, &lo, &hi) {
        Ordering::Less => {
            assert!(rne == zero && rna == zero, "{} rounds toward zero", q);
        }
        Ordering::Greater => {
            assert!(rne == away && rna == away, "{} rounds away", q);
        }
        Ordering::Equal => {
            // Ties go to the even significand, or away from zero.
            let even = if zero.get_mantissa().is_odd() { away } else { zero };
            assert!(rne == even, "{} is a tie to even", q);
            assert!(rna == away, "{} is a tie away", q);
        }
    }
}

#[test]
fn test_special_values_raise_range_error() {
    let sem = make_sem(MIN_PRECISION);
    for f in [
        Float::nan(sem, false),
        Float::inf(sem, false),
        Float::inf(sem, true),
    ] {
        let mut ctx = Context::new();
        let q = f.to_rational(&mut ctx);
        assert_eq!(q, Rational::zero());
        assert!(q.is_canonical());
        assert!(ctx.range_error_is_set());
    }
}

#[test]
fn test_signed_zero() {
    let sem = make_sem(MIN_PRECISION);
    let mut ctx = Context::new();
    let pos = Float::zero(sem, false).to_rational(&mut ctx);
    let neg = Float::zero(sem, true).to_rational(&mut ctx);
    assert!(!ctx.range_error_is_set());

    // Both zeros become the same canonical 0/1.
    for q in [&pos, &neg] {
        assert!(q.is_zero());
        assert!(!q.get_sign());
        assert_eq!(q.get_denominator().as_u64(), 1);
    }
    assert_eq!(pos, neg);
}

#[test]
fn test_to_rational_values() {
    let mut ctx = Context::new();

    // 0.75 = 1.1b * 2^-1.
    let mut m = BigInt::from_u64(0b11);
    m.shift_left(FP64.get_mantissa_len() - 1);
    let x = Float::new(FP64, false, -1, m.clone());
    let q = x.to_rational(&mut ctx);
    assert_eq!(q.get_numerator().as_u64(), 3);
    assert_eq!(q.get_denominator().as_u64(), 4);
    assert!(!q.is_negative());

    let (sign, bits, e) = x.to_bigint_2exp().unwrap();
    assert!(!sign);
    assert_eq!(bits, m);
    assert_eq!(e, -53);

    let y = Float::new(FP64, true, -1, BigInt::one_hot(52));
    assert_eq!(y.to_rational(&mut ctx), Rational::from_fraction(-1, 2));

    let z = Float::from_u64(FP64, 6);
    let q = z.to_rational(&mut ctx);
    assert!(q.is_integer());
    assert_eq!(q.get_numerator().as_u64(), 6);

    // Large exponents produce large integers.
    let big = Float::new(FP64, false, 200, BigInt::one_hot(52));
    let q = big.to_rational(&mut ctx);
    assert_eq!(q.get_numerator(), &BigInt::one_hot(200));
    assert!(q.is_integer());

    assert!(Float::zero(FP64, false).to_bigint_2exp().is_none());
    assert!(Float::nan(FP64, false).to_bigint_2exp().is_none());
    assert!(!ctx.range_error_is_set());
}

#[test]
fn test_from_integers() {
    let mut ctx = Context::new();
    assert_eq!(
        Float::from_i64(FP64, -5).to_rational(&mut ctx),
        Rational::from_i64(-5)
    );
    assert!(Float::from_i64(FP64, 0).is_zero());
    assert_eq!(Float::from_u64(FP64, 1), Float::one(FP64, false));

    // FP16 has 11 bits of precision.
    let x = Float::from_u64(FP16, 65519);
    assert_eq!(x.to_rational(&mut ctx), Rational::from_u64(65504));
    let (_, t) = Float::from_bigint(FP16, false, &BigInt::from_u64(2049));
    assert_eq!(t, Ternary::Below);

    // 65520 rounds up to 2^16, which does not fit in FP16.
    let res = Float::try_from_rational_with_rm(
        &Rational::from_u64(65520),
        FP16,
        RoundingMode::NearestTiesToEven,
    );
    assert_eq!(
        res.unwrap_err(),
        ConversionError::ExponentOverflow { exp: 16, max: 15 }
    );
}

#[test]
fn test_from_rational_exact() {
    let sem = make_sem(8);
    let mut ctx = Context::new();
    for (n, d) in [(3, 4), (-1, 1024), (255, 1), (-129, 2), (1, 1)] {
        let q = Rational::from_fraction(n, d);
        for rm in RoundingMode::ALL {
            let (x, t) = Float::from_rational_with_rm(&q, sem, rm);
            assert_eq!(t, Ternary::Exact);
            assert_eq!(x.to_rational(&mut ctx), q);
            assert_eq!(x.get_mantissa().msb_index(), 8);
        }
    }

    // Zero is always a positive zero.
    let neg_zero = Rational::new(true, BigInt::zero(), BigInt::from_u64(3));
    let (x, t) = Float::from_rational_with_rm(&neg_zero, sem, RoundingMode::Negative);
    assert!(x.is_zero());
    assert!(!x.is_negative());
    assert_eq!(t, Ternary::Exact);
}

#[test]
fn test_from_rational_non_canonical_input() {
    // 6/8 is not in lowest terms, and converts like 3/4.
    let sem = make_sem(2);
    let q = Rational::new(false, BigInt::from_u64(6), BigInt::from_u64(8));
    let (x, t) = Float::from_rational(&q, sem);
    assert_eq!(t, Ternary::Exact);
    assert_eq!(x.get_mantissa().as_u64(), 0b11);
    assert_eq!(x.get_exp(), -1);
}

#[test]
fn test_round_one_third() {
    use RoundingMode::*;
    use Ternary::*;

    // 1/3 = 0.010101...b. With 4 bits it falls between 10/32 and 11/32, and
    // the lost part (2/3 of an ulp) is more than half.
    let sem = make_sem(4);
    let mut ctx = Context::new();
    let expected = [
        (NearestTiesToEven, 11, Above),
        (NearestTiesToAway, 11, Above),
        (Zero, 10, Below),
        (Positive, 11, Above),
        (Negative, 10, Below),
        (Away, 11, Above),
    ];
    for (rm, n, t) in expected {
        let (x, ternary) =
            Float::from_rational_with_rm(&Rational::from_fraction(1, 3), sem, rm);
        assert_eq!(ternary, t, "{:?}", rm);
        assert_eq!(x.to_rational(&mut ctx), Rational::from_fraction(n, 32));
        assert_eq!(x.get_exp(), -2);
    }

    let expected = [
        (NearestTiesToEven, -11, Below),
        (NearestTiesToAway, -11, Below),
        (Zero, -10, Above),
        (Positive, -10, Above),
        (Negative, -11, Below),
        (Away, -11, Below),
    ];
    for (rm, n, t) in expected {
        let (x, ternary) =
            Float::from_rational_with_rm(&Rational::from_fraction(-1, 3), sem, rm);
        assert_eq!(ternary, t, "{:?}", rm);
        assert_eq!(x.to_rational(&mut ctx), Rational::from_fraction(n, 32));
    }
}

#[test]
fn test_round_ties() {
    use RoundingMode::*;
    let sem = make_sem(3);
    let mut ctx = Context::new();
    let mut check = |n: i64, rm: RoundingMode, res: i64, t: Ternary| {
        let q = Rational::from_fraction(n, 16);
        let (x, ternary) = Float::from_rational_with_rm(&q, sem, rm);
        assert_eq!(ternary, t);
        assert_eq!(x.to_rational(&mut ctx), Rational::from_fraction(res, 16));
    };

    // 9/16 = 0.1001b is half way between 8/16 and 10/16.
    check(9, NearestTiesToEven, 8, Ternary::Below);
    check(9, NearestTiesToAway, 10, Ternary::Above);
    check(9, Zero, 8, Ternary::Below);
    check(9, Away, 10, Ternary::Above);
    // 11/16 = 0.1011b is half way between 10/16 and 12/16.
    check(11, NearestTiesToEven, 12, Ternary::Above);
    check(11, Zero, 10, Ternary::Below);
    check(-11, NearestTiesToEven, -12, Ternary::Below);
    check(-11, Positive, -10, Ternary::Above);
    check(-9, NearestTiesToEven, -8, Ternary::Above);
}

#[test]
fn test_round_carry_renormalizes() {
    // 255/256 = 0.11111111b rounds up to 1.0 with 4 bits.
    let sem = make_sem(4);
    let q = Rational::from_fraction(255, 256);
    let (x, t) = Float::from_rational(&q, sem);
    assert_eq!(t, Ternary::Above);
    assert_eq!(x, Float::one(sem, false));
    assert_eq!(x.get_exp(), 0);

    let (x, t) = Float::from_rational_with_rm(&q, sem, RoundingMode::Zero);
    assert_eq!(t, Ternary::Below);
    let mut ctx = Context::new();
    assert_eq!(x.to_rational(&mut ctx), Rational::from_fraction(15, 16));
}

#[test]
fn test_precision_one() {
    let sem = make_sem(1);
    let mut ctx = Context::new();
    // 3 is half way between 2 and 4. Both have the significand 1, and the
    // truncated one is odd, so the tie goes up.
    let (x, t) = Float::from_rational(&Rational::from_u64(3), sem);
    assert_eq!(t, Ternary::Above);
    assert_eq!(x.to_rational(&mut ctx), Rational::from_u64(4));
    let rm = RoundingMode::NearestTiesToAway;
    let (x, t) = Float::from_rational_with_rm(&Rational::from_u64(3), sem, rm);
    assert_eq!(t, Ternary::Above);
    assert_eq!(x.to_rational(&mut ctx), Rational::from_u64(4));
    let (x, t) = Float::from_rational_with_rm(&Rational::from_u64(3), sem, RoundingMode::Zero);
    assert_eq!(t, Ternary::Below);
    assert_eq!(x.to_rational(&mut ctx), Rational::from_u64(2));
    let (x, t) = Float::from_rational(&Rational::from_fraction(1, 8), sem);
    assert_eq!(t, Ternary::Exact);
    assert_eq!(x.get_exp(), -3);
}

#[test]
fn test_exponent_range_errors() {
    // With 4 exponent bits the exponent range is [-6, 7].
    let sem = Semantics::new(4, 8, RoundingMode::NearestTiesToEven);
    let rm = sem.get_rounding_mode();
    let big = Rational::from_bigint(false, BigInt::one_hot(10));
    let res = Float::try_from_rational_with_rm(&big, sem, rm);
    assert_eq!(
        res.unwrap_err(),
        ConversionError::ExponentOverflow { exp: 10, max: 7 }
    );

    let small = Rational::new(false, BigInt::one(), BigInt::one_hot(10));
    let res = Float::try_from_rational_with_rm(&small, sem, rm);
    assert_eq!(
        res.unwrap_err(),
        ConversionError::ExponentUnderflow { exp: -10, min: -6 }
    );

    // 255 fits, but rounding to 4 bits carries into 2^8.
    let sem = Semantics::new(4, 4, RoundingMode::NearestTiesToEven);
    let q = Rational::from_u64(255);
    assert!(Float::try_from_rational_with_rm(&q, sem, rm).is_err());
    let (x, t) = Float::from_rational_with_rm(&q, sem, RoundingMode::Zero);
    assert_eq!(t, Ternary::Below);
    assert_eq!(x.get_exp(), 7);
}

#[test]
fn test_exponent_range_after_rounding() {
    use RoundingMode::*;
    // With 4 exponent bits the exponent range is [-6, 7].
    let sem = Semantics::new(4, 4, NearestTiesToEven);

    // 1023/2^16 = 1.111111111b * 2^-7 is below the smallest exponent. Rounding
    // up carries it into 2^-6, which fits.
    let q = Rational::new(false, BigInt::from_u64(1023), BigInt::one_hot(16));
    let (x, t) = Float::try_from_rational_with_rm(&q, sem, Positive).unwrap();
    assert_eq!((x.get_exp(), t), (-6, Ternary::Above));
    let (x, t) = Float::try_from_rational_with_rm(&q, sem, NearestTiesToEven).unwrap();
    assert_eq!((x.get_exp(), t), (-6, Ternary::Above));
    for rm in [Zero, Negative] {
        assert_eq!(
            Float::try_from_rational_with_rm(&q, sem, rm).unwrap_err(),
            ConversionError::ExponentUnderflow { exp: -7, min: -6 }
        );
    }
    // The mirror image for negative values.
    let (x, t) = Float::try_from_rational_with_rm(&q.neg(), sem, Negative).unwrap();
    assert_eq!((x.get_exp(), t), (-6, Ternary::Below));
    assert!(x.is_negative());
    assert!(Float::try_from_rational_with_rm(&q.neg(), sem, Positive).is_err());

    // 255 = 1.1111111b * 2^7 has the largest exponent. Truncating keeps it in
    // range, and rounding up carries it out.
    let q = Rational::from_u64(255);
    let (x, t) = Float::try_from_rational_with_rm(&q, sem, Zero).unwrap();
    assert_eq!((x.get_exp(), t), (7, Ternary::Below));
    for rm in [NearestTiesToEven, Positive, Away] {
        assert_eq!(
            Float::try_from_rational_with_rm(&q, sem, rm).unwrap_err(),
            ConversionError::ExponentOverflow { exp: 8, max: 7 }
        );
    }
    let (x, t) = Float::try_from_rational_with_rm(&q.neg(), sem, Positive).unwrap();
    assert_eq!((x.get_exp(), t), (7, Ternary::Above));
    assert_eq!(
        Float::try_from_rational_with_rm(&q.neg(), sem, Negative).unwrap_err(),
        ConversionError::ExponentOverflow { exp: 8, max: 7 }
    );
}

#[test]
fn test_invalid_precision() {
    let sem = make_sem(0);
    let res = Float::try_from_rational_with_rm(
        &Rational::from_u64(1),
        sem,
        RoundingMode::Zero,
    );
    assert_eq!(
        res.unwrap_err(),
        ConversionError::PrecisionTooSmall { precision: 0, min: 1 }
    );
}

#[test]
#[should_panic(expected = "below the minimum precision")]
fn test_invalid_precision_panics() {
    let _ = Float::from_rational(&Rational::from_u64(1), make_sem(0));
}

#[test]
fn test_flag_independence() {
    let sem = make_sem(24);
    let mut ctx = Context::new();
    ctx.set_range_error();

    // Conversions of finite values never clear the flag.
    let q = Float::from_u64(sem, 7).to_rational(&mut ctx);
    assert!(ctx.range_error_is_set());
    let _ = Float::from_rational(&q, sem);
    assert!(ctx.range_error_is_set());

    ctx.clear_range_error();
    for rm in RoundingMode::ALL {
        let _ = Float::from_rational_with_rm(&Rational::from_fraction(-1, 3), sem, rm);
    }
    assert!(!ctx.range_error_is_set());
}

#[test]
fn test_cmp_rational() {
    let sem = make_sem(16);
    let third = Rational::from_fraction(1, 3);
    assert_eq!(Float::nan(sem, false).cmp_rational(&third), None);
    assert_eq!(
        Float::inf(sem, false).cmp_rational(&third),
        Some(Ordering::Greater)
    );
    assert_eq!(Float::inf(sem, true).cmp_rational(&third), Some(Ordering::Less));
    assert_eq!(Float::zero(sem, true).cmp_rational(&third), Some(Ordering::Less));
    assert_eq!(
        Float::zero(sem, true).cmp_rational(&Rational::zero()),
        Some(Ordering::Equal)
    );
    let one = Float::one(sem, false);
    assert_eq!(one.cmp_rational(&third), Some(Ordering::Greater));
    assert_eq!(one.cmp_rational(&Rational::from_u64(1)), Some(Ordering::Equal));
    assert_eq!(one.neg().cmp_rational(&third), Some(Ordering::Less));
}

#[test]
fn test_random_round_trip() {
    // Random values in [0, 1) at random precisions, with every rounding mode.
    let mut lfsr = Lfsr::new();
    let mut ctx = Context::new();
    for i in 0..1000 {
        let precision = MIN_PRECISION + lfsr.below(100) as usize;
        let sem = make_sem(precision);
        let f = random_unit_float(sem, &mut lfsr);
        let q = f.to_rational(&mut ctx);
        let rm = RoundingMode::ALL[i % RoundingMode::ALL.len()];
        let (g, t) = Float::from_rational_with_rm(&q, sem, rm);
        assert_eq!(t, Ternary::Exact);
        assert!(f == g, "{:?} != {:?}", f, g);
    }
    assert!(!ctx.range_error_is_set());
}

#[test]
fn test_random_round_trip_wide() {
    // Random signs and exponents, including integers with large exponents.
    let mut lfsr = Lfsr::new_with_seed(90210);
    let mut ctx = Context::new();
    for i in 0..500 {
        let precision = MIN_PRECISION + lfsr.below(200) as usize;
        let sem = make_sem(precision);
        let f = random_float(sem, &mut lfsr, 300);
        let q = f.to_rational(&mut ctx);

        // The result is canonical, with a power-of-two denominator.
        assert!(q.is_canonical());
        assert!(!q.get_denominator().is_zero());
        assert!(q.get_denominator().is_power_of_two());
        assert_eq!(q.is_negative(), f.is_normal() && f.is_negative());
        assert_eq!(f.cmp_rational(&q), Some(Ordering::Equal));

        let rm = RoundingMode::ALL[i % RoundingMode::ALL.len()];
        let (g, t) = Float::from_rational_with_rm(&q, sem, rm);
        assert!(t.is_exact());
        assert!(f == g, "{:?} != {:?}", f, g);
    }
    assert!(!ctx.range_error_is_set());
}

#[test]
fn test_random_rationals_round_correctly() {
    // Check the ternary value against an exact comparison, and check that
    // each mode picks the right neighbor.
    let mut lfsr = Lfsr::new_with_seed(1995);
    for _ in 0..300 {
        let precision = MIN_PRECISION + lfsr.below(70) as usize;
        let sem = make_sem(precision);
        let num_parts = 1 + lfsr.below(2) as usize;
        let num = BigInt::from_iter(&mut lfsr, num_parts);
        let mut den = BigInt::from_iter(&mut lfsr, 1);
        if den.is_zero() {
            den = BigInt::one();
        }
        let negative = lfsr.below(2) == 1;
        let q = Rational::new(negative, num, den);

        let mut results = Vec::new();
        for rm in RoundingMode::ALL {
            let (x, t) = Float::from_rational_with_rm(&q, sem, rm);
            let expected = match t {
                Ternary::Below => Ordering::Less,
                Ternary::Exact => Ordering::Equal,
                Ternary::Above => Ordering::Greater,
            };
            assert_eq!(x.cmp_rational(&q), Some(expected));
            results.push((rm, x, t));
        }

        for (rm, x, t) in &results {
            match rm {
                RoundingMode::Positive => assert_ne!(*t, Ternary::Below),
                RoundingMode::Negative => assert_ne!(*t, Ternary::Above),
                RoundingMode::Zero => {
                    assert!(x.is_zero() || t.is_exact() || x.is_negative() == (*t == Ternary::Above))
                }
                RoundingMode::Away => {
                    assert!(x.is_zero() || t.is_exact() || x.is_negative() == (*t == Ternary::Below))
                }
                _ => {}
            }
        }

        // Round to nearest picks the nearer of the two directed results.
        if !results[2].2.is_exact() {
            let (rne, rna) = (&results[0].1, &results[1].1);
            check_nearest(&q, &results[2].1, &results[5].1, rne, rna);
        }
    }
}

#[test]
fn test_random_ties() {
    // Odd numerators with precision + 1 bits are exactly half way between
    // two floats.
    let mut lfsr = Lfsr::new_with_seed(42);
    let mut ctx = Context::new();
    for precision in MIN_PRECISION..80 {
        let sem = make_sem(precision);
        let parts = (precision + 1).div_ceil(64);
        let mut num = BigInt::from_iter(&mut lfsr, parts);
        num.mask(precision + 1);
        if !num.get_bit(precision) {
            num.flip_bit(precision);
        }
        if num.is_even() {
            num.flip_bit(0);
        }
        let shift = lfsr.below(100) as usize;
        let negative = lfsr.below(2) == 1;
        let q = Rational::new(negative, num, BigInt::one_hot(shift));

        let rm = RoundingMode::ALL;
        let (rne, t0) = Float::from_rational_with_rm(&q, sem, rm[0]);
        let (rna, t1) = Float::from_rational_with_rm(&q, sem, rm[1]);
        let (zero, _) = Float::from_rational_with_rm(&q, sem, rm[2]);
        let (away, _) = Float::from_rational_with_rm(&q, sem, rm[5]);
        assert!(!t0.is_exact() && !t1.is_exact());

        let lo = zero.to_rational(&mut ctx);
        let hi = away.to_rational(&mut ctx);
        assert_eq!(cmp_to_midpoint(&q, &lo, &hi), Ordering::Equal);
        check_nearest(&q, &zero, &away, &rne, &rna);
    }
}
