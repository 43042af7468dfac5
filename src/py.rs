use crate::{
    BigInt, ConversionError, Context, Float, Rational, RoundingMode, Semantics,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::format;
use std::string::String;
use std::string::ToString;

fn to_py_err(err: ConversionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_rm(rm: &str) -> PyResult<RoundingMode> {
    RoundingMode::from_string(rm)
        .ok_or_else(|| PyValueError::new_err(format!("Invalid rounding mode: {}", rm)))
}

/// Semantics class defining the exponent range, the precision and the default
/// rounding mode.
#[pyclass]
struct PySemantics {
    inner: Semantics,
}

#[pymethods]
impl PySemantics {
    /// Create a new semantics object.
    ///
    /// Args:
    ///     exp_size: The size of the exponent in bits
    ///     precision: The number of significant bits
    ///     rounding_mode: The rounding mode to use:
    ///         "NearestTiesToEven", "NearestTiesToAway",
    ///         "Zero", "Positive", "Negative", "Away"
    #[new]
    fn new(exp_size: usize, precision: usize, rounding_mode: &str) -> PyResult<Self> {
        let sem = Semantics::new(exp_size, precision, parse_rm(rounding_mode)?);
        sem.validate().map_err(to_py_err)?;
        Ok(PySemantics { inner: sem })
    }
    /// Returns the length of the exponent in bits.
    fn get_exponent_len(&self) -> usize {
        self.inner.get_exponent_len()
    }
    /// Returns the precision in bits.
    fn get_precision(&self) -> usize {
        self.inner.get_precision()
    }
    /// Returns the rounding mode as a string.
    fn get_rounding_mode(&self) -> String {
        self.inner.get_rounding_mode().as_string().to_string()
    }
    fn __str__(&self) -> String {
        format!("{:?}", self.inner)
    }
    fn __repr__(&self) -> String {
        self.__str__()
    }
}

/// An exact rational number.
#[pyclass]
struct PyRational {
    inner: Rational,
}

#[pymethods]
impl PyRational {
    /// Create the rational number num/den, in lowest terms.
    ///
    /// Args:
    ///     num: The numerator (signed)
    ///     den: The denominator (positive)
    #[new]
    fn new(num: i64, den: u64) -> PyResult<Self> {
        let magnitude = BigInt::from_u64(num.unsigned_abs());
        let q = Rational::try_new(num < 0, magnitude, BigInt::from_u64(den))
            .map_err(to_py_err)?;
        Ok(PyRational {
            inner: q.canonical(),
        })
    }
    /// Returns the numerator as a decimal string, including the sign.
    fn get_numerator(&self) -> String {
        let num = self.inner.get_numerator().as_decimal();
        if self.inner.is_negative() {
            format!("-{}", num)
        } else {
            num
        }
    }
    /// Returns the denominator as a decimal string.
    fn get_denominator(&self) -> String {
        self.inner.get_denominator().as_decimal()
    }
    /// Returns true if the number is zero.
    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
    /// Returns true if the number is negative.
    fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }
    fn __eq__(&self, other: &PyRational) -> bool {
        self.inner == other.inner
    }
    fn __lt__(&self, other: &PyRational) -> bool {
        self.inner < other.inner
    }
    fn __str__(&self) -> String {
        self.inner.to_string()
    }
    fn __repr__(&self) -> String {
        self.__str__()
    }
}

/// A conversion context that holds the sticky range-error flag.
#[pyclass]
struct PyContext {
    inner: Context,
}

#[pymethods]
impl PyContext {
    #[new]
    fn new() -> Self {
        PyContext {
            inner: Context::new(),
        }
    }
    /// Returns true if the range-error flag is raised.
    fn range_error_is_set(&self) -> bool {
        self.inner.range_error_is_set()
    }
    /// Clear the range-error flag.
    fn clear_range_error(&mut self) {
        self.inner.clear_range_error()
    }
}

/// A class representing arbitrary precision floating-point numbers.
#[pyclass]
struct PyFloat {
    inner: Float,
}

#[pymethods]
impl PyFloat {
    /// Create the float nearest to (-1)^sign * mantissa * 2^exp.
    ///
    /// Args:
    ///     sem: The semantics of the number
    ///     is_negative: Whether the number is negative (sign bit)
    ///     exp: The exponent of the lowest bit of the mantissa
    ///     mantissa: The integer significand
    #[new]
    fn new(
        sem: &Bound<'_, PyAny>,
        is_negative: bool,
        exp: i64,
        mantissa: u64,
    ) -> PyResult<Self> {
        let sem: PyRef<PySemantics> = sem.extract()?;
        let mut num = BigInt::from_u64(mantissa);
        let mut den = BigInt::one();
        if exp >= 0 {
            num.shift_left(exp as usize);
        } else {
            den.shift_left(exp.unsigned_abs() as usize);
        }
        let q = Rational::new(is_negative, num, den);
        let (val, _) = Float::try_from_rational_with_rm(
            &q,
            sem.inner,
            sem.inner.get_rounding_mode(),
        )
        .map_err(to_py_err)?;
        Ok(PyFloat { inner: val })
    }

    fn __str__(&self) -> String {
        format!("{:?}", self.inner)
    }
    fn __repr__(&self) -> String {
        self.__str__()
    }
    /// Returns the exponent of the leading bit.
    fn get_exponent(&self) -> i64 {
        self.inner.get_exp()
    }
    /// Returns the category of the float.
    fn get_category(&self) -> String {
        format!("{:?}", self.inner.get_category())
    }
    /// Returns the semantics of the float.
    fn get_semantics(&self) -> PySemantics {
        PySemantics {
            inner: self.inner.get_semantics(),
        }
    }
    /// Returns true if the Float is negative
    fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }
    /// Returns true if the Float is +-inf.
    fn is_inf(&self) -> bool {
        self.inner.is_inf()
    }
    /// Returns true if the Float is a +- NaN.
    fn is_nan(&self) -> bool {
        self.inner.is_nan()
    }
    /// Returns true if the Float is a +- zero.
    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
    /// Returns true if this number is normal (not Zero, Nan, Inf).
    fn is_normal(&self) -> bool {
        self.inner.is_normal()
    }
    /// Returns the number with the sign flipped.
    fn __neg__(&self) -> PyFloat {
        PyFloat {
            inner: self.inner.neg(),
        }
    }
    fn __eq__(&self, other: &PyFloat) -> bool {
        self.inner == other.inner
    }
    fn __lt__(&self, other: &PyFloat) -> bool {
        self.inner < other.inner
    }
} // impl PyFloat

/// Convert the float to the exact rational it represents. NaN and infinity
/// return 0 and raise the range-error flag of the context.
///
/// Args:
///     f: The float to convert
///     ctx: The context that records the range error
#[pyfunction]
fn to_rational(f: &PyFloat, ctx: &mut PyContext) -> PyRational {
    PyRational {
        inner: f.inner.to_rational(&mut ctx.inner),
    }
}

/// Round the rational to a float. Returns the float and the ternary value
/// (-1, 0 or 1).
///
/// Args:
///     q: The rational to convert
///     sem: The semantics of the result
///     rm: The rounding mode
#[pyfunction]
fn from_rational(
    q: &PyRational,
    sem: &Bound<'_, PyAny>,
    rm: &str,
) -> PyResult<(PyFloat, i32)> {
    let sem: PyRef<PySemantics> = sem.extract()?;
    let rm = parse_rm(rm)?;
    let (val, t) = Float::try_from_rational_with_rm(&q.inner, sem.inner, rm)
        .map_err(to_py_err)?;
    Ok((PyFloat { inner: val }, t.as_i32()))
}

/// Returns a new float with the integer value 'val' with the given semantics.
#[pyfunction]
fn from_i64(sem: &Bound<'_, PyAny>, val: i64) -> PyResult<PyFloat> {
    let sem: PyRef<PySemantics> = sem.extract()?;
    let q = Rational::from_i64(val);
    let rm = sem.inner.get_rounding_mode();
    let (val, _) =
        Float::try_from_rational_with_rm(&q, sem.inner, rm).map_err(to_py_err)?;
    Ok(PyFloat { inner: val })
}

/// Returns the number zero with the given semantics.
#[pyfunction]
fn zero(sem: &Bound<'_, PyAny>) -> PyResult<PyFloat> {
    let sem: PyRef<PySemantics> = sem.extract()?;
    Ok(PyFloat {
        inner: Float::zero(sem.inner, false),
    })
}

/// Returns an infinity with the given semantics and sign.
#[pyfunction]
fn inf(sem: &Bound<'_, PyAny>, is_negative: bool) -> PyResult<PyFloat> {
    let sem: PyRef<PySemantics> = sem.extract()?;
    Ok(PyFloat {
        inner: Float::inf(sem.inner, is_negative),
    })
}

/// Returns a NaN with the given semantics.
#[pyfunction]
fn nan(sem: &Bound<'_, PyAny>) -> PyResult<PyFloat> {
    let sem: PyRef<PySemantics> = sem.extract()?;
    Ok(PyFloat {
        inner: Float::nan(sem.inner, false),
    })
}

#[pymodule]
fn _arpq(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFloat>()?;
    m.add_class::<PySemantics>()?;
    m.add_class::<PyRational>()?;
    m.add_class::<PyContext>()?;

    m.add_function(wrap_pyfunction!(to_rational, m)?)?;
    m.add_function(wrap_pyfunction!(from_rational, m)?)?;
    m.add_function(wrap_pyfunction!(from_i64, m)?)?;
    m.add_function(wrap_pyfunction!(zero, m)?)?;
    m.add_function(wrap_pyfunction!(inf, m)?)?;
    m.add_function(wrap_pyfunction!(nan, m)?)?;
    Ok(())
}

#[test]
fn test_rounding_mode_names() {
    for rm in RoundingMode::ALL {
        assert_eq!(parse_rm(rm.as_string()).ok(), Some(rm));
    }
    assert!(parse_rm("Up").is_err());
    assert!(parse_rm("").is_err());
}

#[test]
fn test_rational_constructor() {
    assert!(PyRational::new(1, 0).is_err());
    let q = match PyRational::new(-6, 8) {
        Ok(q) => q,
        Err(_) => panic!("-6/8 is a valid rational"),
    };
    assert_eq!(q.get_numerator(), "-3");
    assert_eq!(q.get_denominator(), "4");
    assert!(q.is_negative());
    assert_eq!(q.__str__(), "-3/4");
}
