//! Errors reported by the fallible conversion entry points.
//!
//! Every variant describes a caller bug (a precondition violation) rather
//! than a property of the data. The infallible entry points panic with the
//! same message. Converting NaN or an infinity to a rational is not an error;
//! it raises the range flag of the [`Context`](crate::Context) instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The requested precision is below the supported minimum.
    #[error("precision {precision} is below the minimum precision {min}")]
    PrecisionTooSmall { precision: usize, min: usize },

    /// The exponent width can't describe a valid exponent range.
    #[error("invalid exponent width of {bits} bits")]
    InvalidExponentWidth { bits: usize },

    /// The significand of a normal float does not have exactly `precision`
    /// significant bits.
    #[error("significand of {bits} bits does not match the precision {precision}")]
    InvalidSignificand { bits: usize, precision: usize },

    /// The rounded value is too large for the exponent range.
    #[error("exponent {exp} overflows the maximum exponent {max}")]
    ExponentOverflow { exp: i64, max: i64 },

    /// The rounded value is too small for the exponent range.
    #[error("exponent {exp} underflows the minimum exponent {min}")]
    ExponentUnderflow { exp: i64, min: i64 },

    /// A rational number was built with a zero denominator.
    #[error("zero denominator")]
    ZeroDenominator,
}

#[cfg(feature = "std")]
#[test]
fn test_error_messages() {
    use std::string::ToString;

    let err = ConversionError::PrecisionTooSmall { precision: 0, min: 1 };
    assert_eq!(err.to_string(), "precision 0 is below the minimum precision 1");
    let err = ConversionError::ExponentOverflow { exp: 9, max: 7 };
    assert_eq!(err.to_string(), "exponent 9 overflows the maximum exponent 7");
    let err = ConversionError::InvalidSignificand { bits: 3, precision: 8 };
    assert_eq!(
        err.to_string(),
        "significand of 3 bits does not match the precision 8"
    );
    assert_eq!(ConversionError::ZeroDenominator.to_string(), "zero denominator");
}
