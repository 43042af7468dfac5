//! The conversion context, which carries the sticky status flags.

/// Holds the sticky flags that conversions raise. Each thread or task that
/// converts numbers owns its own context and passes it by reference, so
/// conversions in different contexts never share state.
///
/// Flags are sticky: the conversions only ever set them. Clear a flag before
/// the operation that you want to observe.
///
/// # Examples
///
/// ```
///    use arpq::{Context, Float, FP64};
///
///    let mut ctx = Context::new();
///    let q = Float::nan(FP64, false).to_rational(&mut ctx);
///    assert!(ctx.range_error_is_set());
///    assert!(q.is_zero());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    // Raised when a value with no rational meaning (NaN, Inf) is converted.
    range_error: bool,
}

impl Context {
    /// Create a new context with all of the flags cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a range error was raised since the flag was cleared.
    pub fn range_error_is_set(&self) -> bool {
        self.range_error
    }

    /// Raise the range-error flag.
    pub fn set_range_error(&mut self) {
        self.range_error = true;
    }

    /// Clear the range-error flag.
    pub fn clear_range_error(&mut self) {
        self.range_error = false;
    }
}

#[test]
fn test_flag_accessors() {
    let mut ctx = Context::new();
    assert!(!ctx.range_error_is_set());
    ctx.set_range_error();
    ctx.set_range_error();
    assert!(ctx.range_error_is_set());
    ctx.clear_range_error();
    assert!(!ctx.range_error_is_set());
    assert_eq!(ctx, Context::default());
}
