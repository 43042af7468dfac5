//! This file contains simple helper functions and test helpers.

#[cfg(test)]
use super::bigint::BigInt;
#[cfg(test)]
use super::float::{Float, Semantics};

// Linear-feedback shift register. We use this as a random number generator for
// tests.
pub struct Lfsr {
    state: u32,
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new()
    }
}

impl Lfsr {
    /// Generate a new LFSR number generator.
    pub fn new() -> Lfsr {
        Lfsr { state: 0x13371337 }
    }

    /// Generate a new LFSR number generator that starts with a specific state.
    pub fn new_with_seed(seed: u32) -> Lfsr {
        Lfsr {
            state: 0x13371337 ^ seed,
        }
    }

    fn step(&mut self) {
        let a = (self.state >> 24) & 1;
        let b = (self.state >> 23) & 1;
        let c = (self.state >> 22) & 1;
        let d = (self.state >> 17) & 1;
        let n = a ^ b ^ c ^ d ^ 1;
        self.state <<= 1;
        self.state |= n;
    }

    fn get(&mut self) -> u32 {
        let mut res: u32 = 0;
        for _ in 0..32 {
            self.step();
            res <<= 1;
            res ^= self.state & 0x1;
        }
        res
    }

    pub fn get64(&mut self) -> u64 {
        ((self.get() as u64) << 32) | self.get() as u64
    }

    /// Returns a number in the range `0..n`.
    #[cfg(test)]
    pub fn below(&mut self, n: u64) -> u64 {
        self.get64() % n
    }
}

// Implement `Iterator` for `Lfsr`.
impl Iterator for Lfsr {
    type Item = u64;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.get64())
    }
}

/// Returns a random float in the range [0, 1), where every one of the
/// `precision` bits below the binary point is random. Leading zero bits
/// lower the exponent, and all-zero bits make a zero.
#[cfg(test)]
pub(crate) fn random_unit_float(sem: Semantics, lfsr: &mut Lfsr) -> Float {
    let precision = sem.get_precision();
    let mut bits = BigInt::from_iter(lfsr, precision.div_ceil(64));
    bits.mask(precision);
    if bits.is_zero() {
        return Float::zero(sem, false);
    }
    let msb = bits.msb_index();
    bits.shift_left(precision - msb);
    Float::new(sem, false, msb as i64 - 1 - precision as i64, bits)
}

/// Returns a random float with a random sign, scaled by a random power of two
/// in the range [-spread, spread].
#[cfg(test)]
pub(crate) fn random_float(sem: Semantics, lfsr: &mut Lfsr, spread: i64) -> Float {
    let x = random_unit_float(sem, lfsr);
    let negative = lfsr.below(2) == 1;
    if x.is_zero() {
        return Float::zero(sem, negative);
    }
    let shift = lfsr.below(2 * spread as u64 + 1) as i64 - spread;
    Float::new(sem, negative, x.get_exp() + shift, x.get_mantissa())
}

#[test]
fn test_lfsr_balance() {
    let mut lfsr = Lfsr::new();

    // Count the number of items, and the number of 1s.
    let mut items = 0;
    let mut ones = 0;

    for _ in 0..10000 {
        let mut u = lfsr.get();
        for _ in 0..32 {
            items += 1;
            ones += u & 1;
            u >>= 1;
        }
    }
    // Make sure that we have around 50% 1s and 50% zeros.
    assert!((ones as f64) < (0.55 * items as f64));
    assert!((ones as f64) > (0.45 * items as f64));
}

#[test]
fn test_repetition() {
    let mut lfsr = Lfsr::new();
    let first = lfsr.get();
    let second = lfsr.get();

    // Make sure that the items don't repeat themselves too frequently.
    for _ in 0..30000 {
        assert_ne!(first, lfsr.get());
        assert_ne!(second, lfsr.get());
    }
}

#[test]
fn test_random_floats_are_normalized() {
    use super::round::RoundingMode;
    let mut lfsr = Lfsr::new_with_seed(3);
    for precision in 1..130 {
        let sem = Semantics::new(32, precision, RoundingMode::Zero);
        let x = random_unit_float(sem, &mut lfsr);
        if x.is_zero() {
            continue;
        }
        assert_eq!(x.get_mantissa().msb_index(), precision);
        // The values are in [0, 1), so the leading bit is below 2^0.
        assert!(x.get_exp() < 0);
        assert!(!x.is_negative());
    }
}
