//! The evaluation capability shared by analytic and tabulated functions.

/// A real-valued function of one real argument.
///
/// This is the capability everything in the workspace composes over: the
/// analytic formulas, the function combinators, and both tabulated
/// backends implement it, so callers can hold any of them behind the same
/// bound (or behind `&dyn Function`) without knowing which variant it is.
pub trait Function {
    /// Evaluate the function at `x`.
    ///
    /// Total over all of `f64`; implementations return `NaN` where the
    /// underlying function is undefined rather than failing.
    fn value(&self, x: f64) -> f64;
}

/// Plain function pointers participate directly, which keeps tests and
/// benches free of wrapper types.
///
/// # Example
///
/// ```
/// use tabfn_core::Function;
///
/// let square: fn(f64) -> f64 = |x| x * x;
/// assert_eq!(square.value(3.0), 9.0);
/// ```
impl Function for fn(f64) -> f64 {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
