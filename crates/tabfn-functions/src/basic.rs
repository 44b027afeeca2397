//! Elementary analytic functions.
//!
//! All of these are stateless evaluators: construction never allocates and
//! evaluation delegates straight to the `f64` intrinsics. Where the
//! mathematical function is undefined (tangent at odd multiples of π/2,
//! logarithms of non-positive arguments) the IEEE rules apply and the
//! result is `NaN` or an infinity, never an error.

use tabfn_core::Function;

use crate::error::FunctionError;

/// Sine of the argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sin;

impl Function for Sin {
    fn value(&self, x: f64) -> f64 {
        x.sin()
    }
}

/// Cosine of the argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cos;

impl Function for Cos {
    fn value(&self, x: f64) -> f64 {
        x.cos()
    }
}

/// Tangent of the argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tan;

impl Function for Tan {
    fn value(&self, x: f64) -> f64 {
        x.tan()
    }
}

/// Natural exponential of the argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exp;

impl Function for Exp {
    fn value(&self, x: f64) -> f64 {
        x.exp()
    }
}

/// Logarithm with a fixed base.
///
/// # Example
///
/// ```
/// use tabfn_core::Function;
/// use tabfn_functions::basic::Log;
///
/// let log2 = Log::new(2.0)?;
/// assert!((log2.value(8.0) - 3.0).abs() < 1e-12);
///
/// let ln = Log::natural();
/// assert_eq!(ln.value(1.0), 0.0);
/// # Ok::<(), tabfn_functions::FunctionError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Log {
    /// Natural log of the base; dividing by it rebases `ln`.
    ln_base: f64,
}

impl Log {
    /// Logarithm to the given base.
    ///
    /// # Errors
    ///
    /// [`FunctionError::InvalidLogBase`] when `base` is not positive, not
    /// finite, or equal to 1 (no logarithm exists for those bases).
    pub fn new(base: f64) -> Result<Self, FunctionError> {
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            return Err(FunctionError::InvalidLogBase { base });
        }
        Ok(Self {
            ln_base: base.ln(),
        })
    }

    /// The natural logarithm.
    pub fn natural() -> Self {
        Self { ln_base: 1.0 }
    }
}

impl Function for Log {
    fn value(&self, x: f64) -> f64 {
        x.ln() / self.ln_base
    }
}
