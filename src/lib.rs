//! ARPQ is an exact conversion library between arbitrary-precision binary
//! floating-point numbers and rational numbers.
//!
//! A finite float converts to the exact rational that it represents. A
//! rational converts to the float nearest to it under one of the rounding
//! modes, together with a ternary value that reports whether the result is
//! below, equal to, or above the rational.
//!
//! # Example
//!
//! ```
//!    use arpq::{Context, Float, Rational, RoundingMode, Semantics, Ternary};
//!
//!    // A float with 10 bits of precision and a 16-bit exponent.
//!    let sem = Semantics::new(16, 10, RoundingMode::NearestTiesToEven);
//!    let q = Rational::from_fraction(2, 3);
//!    let (x, t) = Float::from_rational(&q, sem);
//!    assert_eq!(t, Ternary::Above);
//!
//!    // The float is a rational with a power-of-two denominator.
//!    let mut ctx = Context::new();
//!    let r = x.to_rational(&mut ctx);
//!    assert_eq!(r, Rational::from_fraction(683, 1024));
//!    assert!(r > q);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bigint;
mod context;
mod convert;
mod error;
mod float;
mod rational;
mod round;
mod utils;

#[cfg(feature = "python")]
mod py;

pub use self::bigint::BigInt;
pub use self::context::Context;
pub use self::error::ConversionError;
pub use self::float::{Category, Float, Semantics, MIN_PRECISION};
pub use self::float::{FP128, FP16, FP256, FP32, FP64};
pub use self::rational::Rational;
pub use self::round::{RoundingMode, Ternary};
