//! This module contains the implementation of the exact rational number that
//! floats convert to and from.

use super::bigint::BigInt;
use super::error::ConversionError;
use core::cmp::Ordering;
use core::fmt::{self, Display};

/// An exact fraction of two arbitrary-size integers. The number is stored in
/// sign-magnitude form, like the float: a sign bit, the magnitude of the
/// numerator, and a positive denominator.
///
/// A rational is canonical when the numerator and the denominator have no
/// common factor and zero is stored as the positive `0/1`. Conversions from
/// floats always produce canonical rationals.
///
/// # Examples
///
/// ```
///    use arpq::{BigInt, Rational};
///
///    let mut q = Rational::new(true, BigInt::from_u64(6), BigInt::from_u64(8));
///    q.canonicalize();
///    assert_eq!(q, Rational::from_fraction(-3, 4));
///    assert_eq!(q.get_denominator().as_u64(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Rational {
    // The sign bit. True means negative.
    sign: bool,
    // The magnitude of the numerator.
    num: BigInt,
    // The denominator. Never zero.
    den: BigInt,
}

impl Rational {
    /// Create a new rational number `num/den`, negated if `sign` is set. The
    /// number is stored as given and is not canonicalized. Panics if `den`
    /// is zero.
    pub fn new(sign: bool, num: BigInt, den: BigInt) -> Self {
        match Self::try_new(sign, num, den) {
            Ok(q) => q,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a new rational number `num/den`, or report a zero denominator.
    pub fn try_new(
        sign: bool,
        num: BigInt,
        den: BigInt,
    ) -> Result<Self, ConversionError> {
        if den.is_zero() {
            return Err(ConversionError::ZeroDenominator);
        }
        Ok(Rational { sign, num, den })
    }

    /// Returns the canonical zero, `0/1`.
    pub fn zero() -> Self {
        Self::from_bigint(false, BigInt::zero())
    }

    /// Returns the integer `num`, negated if `sign` is set.
    pub fn from_bigint(sign: bool, num: BigInt) -> Self {
        let mut q = Rational {
            sign,
            num,
            den: BigInt::one(),
        };
        q.canonicalize();
        q
    }

    /// Returns the integer `val`.
    pub fn from_u64(val: u64) -> Self {
        Self::from_bigint(false, BigInt::from_u64(val))
    }

    /// Returns the integer `val`.
    pub fn from_i64(val: i64) -> Self {
        Self::from_bigint(val < 0, BigInt::from_u64(val.unsigned_abs()))
    }

    /// Returns the canonical form of `num/den`. Panics if `den` is zero.
    pub fn from_fraction(num: i64, den: u64) -> Self {
        let mut q = Self::new(
            num < 0,
            BigInt::from_u64(num.unsigned_abs()),
            BigInt::from_u64(den),
        );
        q.canonicalize();
        q
    }

    /// Returns true if the number is negative. Zero is never negative.
    pub fn is_negative(&self) -> bool {
        self.sign && !self.num.is_zero()
    }

    /// Returns the sign bit as stored. True means negative.
    pub fn get_sign(&self) -> bool {
        self.sign
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns the magnitude of the numerator.
    pub fn get_numerator(&self) -> &BigInt {
        &self.num
    }

    /// Returns the denominator.
    pub fn get_denominator(&self) -> &BigInt {
        &self.den
    }

    /// Returns true if the number is an integer (with a denominator of one).
    pub fn is_integer(&self) -> bool {
        self.den == BigInt::one()
    }

    /// Returns a new rational with a flipped sign (negated value).
    pub fn neg(&self) -> Self {
        Rational {
            sign: !self.sign,
            num: self.num.clone(),
            den: self.den.clone(),
        }
    }

    /// Returns true if the number is in lowest terms with zero stored as the
    /// positive `0/1`.
    pub fn is_canonical(&self) -> bool {
        if self.num.is_zero() {
            return !self.sign && self.den == BigInt::one();
        }
        self.num.gcd(&self.den) == BigInt::one()
    }

    /// Reduce the number to lowest terms. Zero becomes the positive `0/1`.
    pub fn canonicalize(&mut self) {
        if self.num.is_zero() {
            self.sign = false;
            self.den = BigInt::one();
            return;
        }
        let g = self.num.gcd(&self.den);
        if g != BigInt::one() {
            self.num = self.num.exact_div(&g);
            self.den = self.den.exact_div(&g);
        }
    }

    /// Returns a canonical copy of this number.
    pub fn canonical(&self) -> Self {
        let mut q = self.clone();
        q.canonicalize();
        q
    }
}

impl Eq for Rational {}

/// Rationals compare by value, so `2/4 == 1/2` and `-0/3 == 0/1`.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs_neg = self.is_negative();
        let rhs_neg = other.is_negative();
        if lhs_neg != rhs_neg {
            return if lhs_neg {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        // Both numbers have the same sign. Compare a/b and c/d as ad and cb.
        let lhs = &self.num * &other.den;
        let rhs = &other.num * &self.den;
        let magnitude = lhs.cmp(&rhs);
        if lhs_neg {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

/// Prints the number as `n/d`, or as `n` when the denominator is one.
impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(&self.num.as_decimal())?;
        if !self.is_integer() {
            f.write_str("/")?;
            f.write_str(&self.den.as_decimal())?;
        }
        Ok(())
    }
}

#[test]
fn test_canonicalize() {
    let mut q = Rational::new(false, BigInt::from_u64(462), BigInt::from_u64(1071));
    assert!(!q.is_canonical());
    q.canonicalize();
    assert!(q.is_canonical());
    assert_eq!(q.get_numerator().as_u64(), 22);
    assert_eq!(q.get_denominator().as_u64(), 51);

    // Negative zero collapses into the positive 0/1.
    let mut z = Rational::new(true, BigInt::zero(), BigInt::from_u64(17));
    assert!(!z.is_canonical());
    z.canonicalize();
    assert!(z.is_canonical());
    assert!(!z.get_sign());
    assert_eq!(z.get_denominator().as_u64(), 1);
}

#[test]
fn test_zero_denominator() {
    let res = Rational::try_new(false, BigInt::one(), BigInt::zero());
    assert_eq!(res.unwrap_err(), ConversionError::ZeroDenominator);
}

#[test]
#[should_panic(expected = "zero denominator")]
fn test_zero_denominator_panics() {
    let _ = Rational::new(false, BigInt::one(), BigInt::zero());
}

#[test]
fn test_compare() {
    let half = Rational::from_fraction(1, 2);
    let two_quarters = Rational::new(false, BigInt::from_u64(2), BigInt::from_u64(4));
    assert_eq!(half, two_quarters);
    assert!(Rational::from_fraction(1, 3) < half);
    assert!(Rational::from_fraction(-1, 2) < Rational::from_fraction(-1, 3));
    assert!(Rational::from_fraction(-1, 2) < Rational::zero());
    assert_eq!(Rational::from_fraction(0, 5), Rational::zero());
    assert_eq!(half.neg().neg(), half);
    assert_eq!(Rational::from_i64(-7), Rational::from_fraction(-14, 2));
}

#[cfg(feature = "std")]
#[test]
fn test_display() {
    use std::string::ToString;
    assert_eq!(Rational::from_fraction(-6, 8).to_string(), "-3/4");
    assert_eq!(Rational::from_u64(42).to_string(), "42");
    assert_eq!(Rational::zero().to_string(), "0");
    let big = Rational::from_bigint(false, BigInt::one_hot(64));
    assert_eq!(big.to_string(), "18446744073709551616");
}
