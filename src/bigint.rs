//! This module contains the implementation of the big-int data structure that
//! we use for the significand of the float and for the two halves of a
//! rational number.

extern crate alloc;

use core::cmp::Ordering;
use core::fmt::{self, Display, Write};
use core::ops::{Add, Div, Mul, Rem, Sub};

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Reports the kind of values that are lost when we shift right bits, or when
/// an integer division leaves a remainder. In some context this used as the
/// two guard bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LossFraction {
    ExactlyZero,  //0000000
    LessThanHalf, //0xxxxxx
    ExactlyHalf,  //1000000
    MoreThanHalf, //1xxxxxx
}

impl LossFraction {
    pub fn is_exactly_zero(&self) -> bool {
        matches!(self, Self::ExactlyZero)
    }
    pub fn is_exactly_half(&self) -> bool {
        matches!(self, Self::ExactlyHalf)
    }
    pub fn is_mt_half(&self) -> bool {
        matches!(self, Self::MoreThanHalf)
    }
    pub fn is_gte_half(&self) -> bool {
        self.is_mt_half() || self.is_exactly_half()
    }

    /// Classify the remainder `rem` of a division by `divisor`, as a fraction
    /// of one unit of the quotient.
    pub fn from_remainder(rem: &BigInt, divisor: &BigInt) -> LossFraction {
        if rem.is_zero() {
            return LossFraction::ExactlyZero;
        }
        let mut twice = rem.clone();
        twice.shift_left(1);
        match twice.cmp(divisor) {
            Ordering::Less => LossFraction::LessThanHalf,
            Ordering::Equal => LossFraction::ExactlyHalf,
            Ordering::Greater => LossFraction::MoreThanHalf,
        }
    }

    /// Combine the loss of accuracy with `msb` more significant and `lsb`
    /// less significant.
    pub fn combine(msb: LossFraction, lsb: LossFraction) -> LossFraction {
        if !lsb.is_exactly_zero() {
            if msb.is_exactly_zero() {
                return LossFraction::LessThanHalf;
            } else if msb.is_exactly_half() {
                return LossFraction::MoreThanHalf;
            }
        }
        msb
    }
}

/// This is an arbitrary-size unsigned big number implementation. It holds the
/// significand of the float and the magnitudes of the numerator and
/// denominator of a rational. The sign is kept by the owner of the number.
/// The BigInt data structure is backed by `Vec<u64>`, least significant word
/// first.
///
/// # Examples
///
/// ```
///    use arpq::BigInt;
///
///    let x = BigInt::from_u64(1995);
///    let y = BigInt::from_u64(90210);
///
///    let z = x * y;
///    assert_eq!(z.as_decimal(), "179968950");
/// ```
///
#[derive(Debug, Clone)]
pub struct BigInt {
    parts: Vec<u64>,
}

impl BigInt {
    /// Create a new zero big int number.
    pub fn zero() -> Self {
        BigInt::from_u64(0)
    }

    /// Create a new number with the value 1.
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Create a new number with a single '1' set at bit `bit`.
    pub fn one_hot(bit: usize) -> Self {
        let mut x = Self::zero();
        x.flip_bit(bit);
        x
    }

    /// Create a number and set the lowest 64 bits to `val`.
    pub fn from_u64(val: u64) -> Self {
        BigInt {
            parts: Vec::from([val]),
        }
    }

    /// Create a number and set the lowest 128 bits to `val`.
    pub fn from_u128(val: u128) -> Self {
        Self::from_parts(&[val as u64, (val >> 64) as u64])
    }

    /// Construct a bigint from the words in `parts`, least significant first.
    pub fn from_parts(parts: &[u64]) -> Self {
        let mut x = BigInt {
            parts: parts.to_vec(),
        };
        if x.parts.is_empty() {
            x.parts.push(0);
        }
        x.shrink();
        x
    }

    /// Construct a bigint from the first `k` words that `iter` generates.
    pub fn from_iter<I: Iterator<Item = u64>>(iter: &mut I, k: usize) -> Self {
        let parts: Vec<u64> = iter.take(k).collect();
        Self::from_parts(&parts)
    }

    /// Create a pseudorandom number with `parts` number of parts in the word.
    /// The random number generator is initialized with `seed`.
    pub fn pseudorandom(parts: usize, seed: u32) -> Self {
        use crate::utils::Lfsr;
        let mut ll = Lfsr::new_with_seed(seed);
        BigInt::from_iter(&mut ll, parts)
    }

    /// Returns the number of words in the number.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns the lowest 64 bits.
    pub fn as_u64(&self) -> u64 {
        debug_assert!(self.parts[1..].iter().all(|&x| x == 0));
        self.parts[0]
    }

    /// Return true if the number is equal to zero.
    pub fn is_zero(&self) -> bool {
        self.parts.iter().all(|&x| x == 0)
    }

    /// Returns true if this number is even.
    pub fn is_even(&self) -> bool {
        (self.parts[0] & 0x1) == 0
    }

    /// Returns true if this number is odd.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Returns true if exactly one bit is set.
    pub fn is_power_of_two(&self) -> bool {
        !self.is_zero() && self.msb_index() == self.trailing_zeros() + 1
    }

    /// Returns the value of the bit at index `bit` (zero-based).
    pub fn get_bit(&self, bit: usize) -> bool {
        let word = bit / u64::BITS as usize;
        if word >= self.len() {
            return false;
        }
        (self.parts[word] >> (bit % u64::BITS as usize)) & 1 == 1
    }

    /// Flip the `bit_num` bit.
    pub fn flip_bit(&mut self, bit_num: usize) {
        let which_word = bit_num / u64::BITS as usize;
        let bit_in_word = bit_num % u64::BITS as usize;
        self.grow(which_word + 1);
        self.parts[which_word] ^= 1 << bit_in_word;
        self.shrink();
    }

    /// Zero out all of the bits above `bits`.
    pub fn mask(&mut self, bits: usize) {
        let full_words = bits / u64::BITS as usize;
        let tail = bits % u64::BITS as usize;
        for (i, part) in self.parts.iter_mut().enumerate() {
            if i < full_words {
                continue;
            }
            if i == full_words && tail != 0 {
                *part &= (1u64 << tail) - 1;
            } else {
                *part = 0;
            }
        }
        self.shrink();
    }

    /// Returns the fractional part that's lost if the lowest `bits` bits are
    /// shifted out of the number.
    pub(crate) fn get_loss_kind_for_bit(&self, bits: usize) -> LossFraction {
        if bits == 0 || self.is_zero() || self.trailing_zeros() >= bits {
            return LossFraction::ExactlyZero;
        }
        let half = self.get_bit(bits - 1);
        let below_half = self.trailing_zeros() < bits - 1;
        match (half, below_half) {
            (false, _) => LossFraction::LessThanHalf,
            (true, false) => LossFraction::ExactlyHalf,
            (true, true) => LossFraction::MoreThanHalf,
        }
    }

    /// Returns the index of the most significant bit (the highest '1'),
    /// using 1-based counting (the first bit is 1, and zero means no bits are
    /// set).
    pub fn msb_index(&self) -> usize {
        for i in (0..self.len()).rev() {
            let part = self.parts[i];
            if part != 0 {
                let idx = 64 - part.leading_zeros() as usize;
                return i * 64 + idx;
            }
        }
        0
    }

    /// Returns the index of the first '1' in the number. The number must not
    /// be a zero.
    pub fn trailing_zeros(&self) -> usize {
        debug_assert!(!self.is_zero());
        for (i, part) in self.parts.iter().enumerate() {
            if *part != 0 {
                return i * 64 + part.trailing_zeros() as usize;
            }
        }
        panic!("Expected a non-zero number");
    }

    /// Ensure that there are at least 'size' words in the bigint.
    pub fn grow(&mut self, size: usize) {
        if self.len() < size {
            self.parts.resize(size, 0);
        }
    }

    /// Remove the leading zero words from the bigint.
    fn shrink(&mut self) {
        while self.len() > 1 && self.parts[self.len() - 1] == 0 {
            self.parts.pop();
        }
    }

    /// Add `rhs` to this number.
    pub fn inplace_add(&mut self, rhs: &Self) {
        self.grow(rhs.len());
        let mut carry = false;
        for i in 0..self.len() {
            let r = rhs.parts.get(i).copied().unwrap_or(0);
            let (first, c0) = self.parts[i].overflowing_add(r);
            let (second, c1) = first.overflowing_add(carry as u64);
            self.parts[i] = second;
            carry = c0 || c1;
        }
        if carry {
            self.parts.push(1);
        }
    }

    /// Subtract `rhs` from self, and return true if the operation overflowed
    /// (borrow).
    #[must_use]
    pub fn inplace_sub(&mut self, rhs: &Self) -> bool {
        self.grow(rhs.len());
        let mut borrow = false;
        for i in 0..self.len() {
            let r = rhs.parts.get(i).copied().unwrap_or(0);
            let (first, b0) = self.parts[i].overflowing_sub(r);
            let (second, b1) = first.overflowing_sub(borrow as u64);
            self.parts[i] = second;
            borrow = b0 || b1;
        }
        self.shrink();
        borrow
    }

    /// Multiply self by `rhs`.
    pub fn inplace_mul(&mut self, rhs: &Self) {
        let mut out: Vec<u64> = Vec::new();
        out.resize(self.len() + rhs.len(), 0);
        for (i, &a) in self.parts.iter().enumerate() {
            let mut carry: u128 = 0;
            for (j, &b) in rhs.parts.iter().enumerate() {
                let t = out[i + j] as u128 + (a as u128) * (b as u128) + carry;
                out[i + j] = t as u64;
                carry = t >> 64;
            }
            out[i + rhs.len()] = carry as u64;
        }
        self.parts = out;
        self.shrink();
    }

    /// Divide self by `divisor`, and return the reminder.
    pub fn inplace_div(&mut self, divisor: &Self) -> Self {
        assert!(!divisor.is_zero(), "division by zero");

        // Single word division.
        if self.len() == 1 && divisor.len() == 1 {
            let a = self.parts[0];
            let b = divisor.parts[0];
            self.parts[0] = a / b;
            return Self::from_u64(a % b);
        }

        if *self < *divisor {
            let rem = self.clone();
            *self = Self::zero();
            return rem;
        }

        // Align the first bit of the divisor with the first bit of the
        // dividend, and perform the long division.
        let bits = self.msb_index() - divisor.msb_index();
        let mut rem = self.clone();
        let mut divisor = divisor.clone();
        divisor.shift_left(bits);
        let mut quotient = Self::zero();

        for i in (0..bits + 1).rev() {
            if rem >= divisor {
                let overflow = rem.inplace_sub(&divisor);
                debug_assert!(!overflow);
                quotient.flip_bit(i);
            }
            divisor.shift_right(1);
        }

        *self = quotient;
        rem
    }

    /// Divide self by `divisor`, which must divide it without a remainder.
    pub fn exact_div(&self, divisor: &Self) -> Self {
        let mut quotient = self.clone();
        let rem = quotient.inplace_div(divisor);
        debug_assert!(rem.is_zero(), "inexact division");
        quotient
    }

    /// Returns the greatest common divisor of self and `other`. Uses the
    /// binary (Stein) algorithm, which only needs shifts and subtraction.
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let mut a = self.clone();
        let mut b = other.clone();
        let a_tz = a.trailing_zeros();
        let b_tz = b.trailing_zeros();
        a.shift_right(a_tz);

        loop {
            // Both numbers are odd at the top of the loop.
            let tz = b.trailing_zeros();
            b.shift_right(tz);
            if a > b {
                core::mem::swap(&mut a, &mut b);
            }
            let _ = b.inplace_sub(&a);
            if b.is_zero() {
                break;
            }
        }

        a.shift_left(a_tz.min(b_tz));
        a
    }

    /// Shift the bits in the numbers `bits` to the left.
    pub fn shift_left(&mut self, bits: usize) {
        if self.is_zero() {
            return;
        }
        let words = bits / u64::BITS as usize;
        let bits_in_word = bits % u64::BITS as usize;

        if bits_in_word != 0 {
            self.parts.push(0);
            let mut carry = 0;
            for part in self.parts.iter_mut() {
                let next = *part >> (u64::BITS as usize - bits_in_word);
                *part = (*part << bits_in_word) | carry;
                carry = next;
            }
        }
        if words > 0 {
            let mut parts: Vec<u64> = Vec::new();
            parts.resize(words, 0);
            parts.extend_from_slice(&self.parts);
            self.parts = parts;
        }
        self.shrink();
    }

    /// Shift the bits in the numbers `bits` to the right.
    pub fn shift_right(&mut self, bits: usize) {
        let words = bits / u64::BITS as usize;
        let bits_in_word = bits % u64::BITS as usize;

        if words >= self.len() {
            *self = Self::zero();
            return;
        }
        self.parts.drain(0..words);

        if bits_in_word != 0 {
            let len = self.len();
            for i in 0..len {
                let high = if i + 1 < len {
                    self.parts[i + 1] << (u64::BITS as usize - bits_in_word)
                } else {
                    0
                };
                self.parts[i] = (self.parts[i] >> bits_in_word) | high;
            }
        }
        self.shrink();
    }

    /// Returns the word at idx `idx`.
    pub fn get_part(&self, idx: usize) -> u64 {
        self.parts[idx]
    }

    /// Returns the number as a string of decimal digits.
    pub fn as_decimal(&self) -> String {
        // The largest power of ten that fits in a word.
        const CHUNK: u64 = 10_000_000_000_000_000_000;

        if self.is_zero() {
            return "0".to_string();
        }

        let chunk = BigInt::from_u64(CHUNK);
        let mut num = self.clone();
        let mut groups: Vec<u64> = Vec::new();
        while !num.is_zero() {
            groups.push(num.inplace_div(&chunk).as_u64());
        }

        let mut sb = String::new();
        let mut iter = groups.iter().rev();
        if let Some(head) = iter.next() {
            let _ = write!(sb, "{}", head);
        }
        for group in iter {
            let _ = write!(sb, "{:019}", group);
        }
        sb
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_decimal())
    }
}

impl Eq for BigInt {}

impl PartialEq for BigInt {
    fn eq(&self, other: &BigInt) -> bool {
        self.cmp(other).is_eq()
    }
}
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare all of the digits, from MSB to LSB. Missing words are zeros.
        let len = self.len().max(other.len());
        for i in (0..len).rev() {
            let a = self.parts.get(i).copied().unwrap_or(0);
            let b = other.parts.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

macro_rules! declare_operator {
    ($trait_name:ident,
     $func_name:ident,
     $func_impl_name:ident) => {
        // Self + Self
        impl $trait_name for BigInt {
            type Output = Self;

            fn $func_name(self, rhs: Self) -> Self::Output {
                self.$func_name(&rhs)
            }
        }

        // Self + &Self -> Self
        impl $trait_name<&Self> for BigInt {
            type Output = Self;
            fn $func_name(self, rhs: &Self) -> Self::Output {
                let mut n = self;
                let _ = n.$func_impl_name(rhs);
                n
            }
        }

        // &Self + &Self -> Self
        impl $trait_name<Self> for &BigInt {
            type Output = BigInt;
            fn $func_name(self, rhs: Self) -> Self::Output {
                let mut n = self.clone();
                let _ = n.$func_impl_name(rhs);
                n
            }
        }

        // Self + u64 -> Self
        impl $trait_name<u64> for BigInt {
            type Output = Self;
            fn $func_name(self, rhs: u64) -> Self::Output {
                let mut n = self;
                let _ = n.$func_impl_name(&Self::from_u64(rhs));
                n
            }
        }
    };
}

declare_operator!(Add, add, inplace_add);
declare_operator!(Sub, sub, inplace_sub);
declare_operator!(Mul, mul, inplace_mul);
declare_operator!(Div, div, inplace_div);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: &BigInt) -> Self::Output {
        let mut n = self.clone();
        n.inplace_div(rhs)
    }
}

#[test]
fn test_shl() {
    let mut x = BigInt::from_u64(0xff00ff);
    assert_eq!(x.get_part(0), 0xff00ff);
    x.shift_left(17);
    assert_eq!(x.get_part(0), 0x1fe01fe0000);
    x.shift_left(17);
    assert_eq!(x.get_part(0), 0x3fc03fc00000000);
    x.shift_left(64);
    assert_eq!(x.get_part(1), 0x3fc03fc00000000);
    assert_eq!(x.get_part(0), 0);
}

#[test]
fn test_shr() {
    let mut x = BigInt::from_u64(0xff00ff);
    x.shift_left(128);
    assert_eq!(x.get_part(2), 0xff00ff);
    x.shift_right(17);
    assert_eq!(x.get_part(1), 0x807f800000000000);
    x.shift_right(17);
    assert_eq!(x.get_part(1), 0x03fc03fc0000000);
    x.shift_right(64);
    assert_eq!(x.get_part(0), 0x03fc03fc0000000);
    x.shift_right(1000);
    assert!(x.is_zero());
}

#[test]
fn test_shift_round_trip() {
    let original = BigInt::pseudorandom(3, 7);
    for bits in [1, 13, 63, 64, 65, 127, 200] {
        let mut x = original.clone();
        x.shift_left(bits);
        assert_eq!(x.msb_index(), original.msb_index() + bits);
        x.shift_right(bits);
        assert_eq!(x, original);
    }
}

#[test]
fn test_mul_basic() {
    let mut x = BigInt::from_u64(0xffff_ffff_ffff_ffff);
    let y = BigInt::from_u64(25);
    x.inplace_mul(&x.clone());
    x.inplace_mul(&y);
    assert_eq!(x.get_part(0), 0x19);
    assert_eq!(x.get_part(1), 0xffff_ffff_ffff_ffce);
    assert_eq!(x.get_part(2), 0x18);
}

#[test]
fn test_add_sub_basic() {
    let mut x = BigInt::from_u64(0xffffffff00000000);
    x.inplace_add(&BigInt::from_u64(0xffffffff));
    assert_eq!(x.get_part(0), 0xffffffffffffffff);
    x.inplace_add(&BigInt::from_u64(0xf));
    assert_eq!(x.get_part(0), 0xe);
    assert_eq!(x.get_part(1), 0x1);

    let borrow = x.inplace_sub(&BigInt::from_u64(0xf));
    assert!(!borrow);
    assert_eq!(x, BigInt::from_u64(0xffffffffffffffff));

    let mut small = BigInt::from_u64(1);
    assert!(small.inplace_sub(&BigInt::from_u64(2)));
}

#[test]
fn test_div_basic() {
    let mut x1 = BigInt::from_u64(49);
    let mut x2 = BigInt::from_u64(703);
    let y = BigInt::from_u64(7);

    let rem = x1.inplace_div(&y);
    assert_eq!(x1.as_u64(), 7);
    assert_eq!(rem.as_u64(), 0);

    let rem = x2.inplace_div(&y);
    assert_eq!(x2.as_u64(), 100);
    assert_eq!(rem.as_u64(), 3);
}

#[test]
fn test_div_wide() {
    use crate::utils::Lfsr;
    let mut lfsr = Lfsr::new();

    // Check that q * d + r == n and r < d on multi-word values.
    for i in 1..40 {
        let n = BigInt::from_iter(&mut lfsr, 1 + i % 5);
        let d = BigInt::from_iter(&mut lfsr, 1 + i % 3);
        if d.is_zero() {
            continue;
        }
        let mut q = n.clone();
        let r = q.inplace_div(&d);
        assert!(r < d);
        assert_eq!(&(&q * &d) + &r, n);
    }
}

#[test]
fn test_gcd() {
    let a = BigInt::from_u64(462);
    let b = BigInt::from_u64(1071);
    assert_eq!(a.gcd(&b).as_u64(), 21);
    assert_eq!(b.gcd(&a).as_u64(), 21);
    assert_eq!(a.gcd(&BigInt::zero()), a);
    assert_eq!(BigInt::from_u64(17).gcd(&BigInt::from_u64(5)).as_u64(), 1);

    // gcd(3 * 2^100, 2^70) == 2^70.
    let mut x = BigInt::from_u64(3);
    x.shift_left(100);
    let y = BigInt::one_hot(70);
    assert_eq!(x.gcd(&y), y);
}

#[test]
fn test_msb_and_trailing_zeros() {
    assert_eq!(BigInt::from_u64(0xffffffff00000000).msb_index(), 64);
    assert_eq!(BigInt::zero().msb_index(), 0);
    assert_eq!(BigInt::one().msb_index(), 1);
    assert_eq!(BigInt::from_u64(0xffffffff00000000).trailing_zeros(), 32);

    for i in 0..256 {
        let x = BigInt::one_hot(i);
        assert_eq!(x.msb_index(), i + 1);
        assert_eq!(x.trailing_zeros(), i);
        assert!(x.is_power_of_two());
    }
    assert!(!BigInt::from_u64(6).is_power_of_two());
}

#[test]
fn test_loss_kind() {
    let x = BigInt::from_u64(0b10000000);
    assert!(x.get_loss_kind_for_bit(3).is_exactly_zero());
    let x = BigInt::from_u64(0b10000111);
    assert!(x.get_loss_kind_for_bit(3).is_mt_half());
    let x = BigInt::from_u64(0b10000100);
    assert!(x.get_loss_kind_for_bit(3).is_exactly_half());
    let x = BigInt::from_u64(0b10000001);
    assert_eq!(x.get_loss_kind_for_bit(3), LossFraction::LessThanHalf);
    assert!(x.get_loss_kind_for_bit(0).is_exactly_zero());
}

#[test]
fn test_loss_from_remainder() {
    let ten = BigInt::from_u64(10);
    let kind = |r: u64| LossFraction::from_remainder(&BigInt::from_u64(r), &ten);
    assert_eq!(kind(0), LossFraction::ExactlyZero);
    assert_eq!(kind(4), LossFraction::LessThanHalf);
    assert_eq!(kind(5), LossFraction::ExactlyHalf);
    assert_eq!(kind(6), LossFraction::MoreThanHalf);

    use LossFraction::*;
    assert_eq!(LossFraction::combine(ExactlyZero, LessThanHalf), LessThanHalf);
    assert_eq!(LossFraction::combine(ExactlyHalf, LessThanHalf), MoreThanHalf);
    assert_eq!(LossFraction::combine(ExactlyHalf, ExactlyZero), ExactlyHalf);
    assert_eq!(LossFraction::combine(LessThanHalf, MoreThanHalf), LessThanHalf);
}

#[test]
fn test_mask_and_bits() {
    let mut x = BigInt::from_parts(&[0b11111, 0b10101010101010, 0b111]);
    x.mask(69);
    assert_eq!(x.get_part(0), 0b11111);
    assert_eq!(x.get_part(1), 0b01010);
    assert_eq!(x.len(), 2);
    assert!(x.get_bit(65));
    assert!(!x.get_bit(64));
    assert!(!x.get_bit(500));
}

#[test]
fn test_as_decimal() {
    assert_eq!(BigInt::zero().as_decimal(), "0");
    assert_eq!(BigInt::from_u64(90210).as_decimal(), "90210");
    let num = BigInt::from_u128(123_456_123_456_987_654_987_654u128);
    assert_eq!(num.as_decimal(), "123456123456987654987654");
    // 2^64 needs a zero-padded low group.
    assert_eq!(BigInt::one_hot(64).as_decimal(), "18446744073709551616");
    assert_eq!(
        BigInt::from_u128(10_000_000_000_000_000_000u128).as_decimal(),
        "10000000000000000000"
    );
}

#[test]
fn test_bigint_operators() {
    type BI = BigInt;
    let x = BI::from_u64(10);
    let y = BI::from_u64(1);

    let c = ((&x - &y) * x) / 2;
    assert_eq!(c.as_u64(), 45);
    assert_eq!((&y + &y).as_u64(), 2);
    assert_eq!((&BI::from_u64(47) % &BI::from_u64(10)).as_u64(), 7);
    assert!(BI::from_parts(&[5, 0, 0]) == BI::from_u64(5));
}
