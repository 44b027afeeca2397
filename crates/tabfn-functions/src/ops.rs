//! Combinators over any [`Function`].
//!
//! Each combinator owns the functions it wraps and evaluates them on
//! demand; nothing is precomputed and no storage is touched, so a wrapped
//! tabulated function keeps its own interpolation semantics.
//!
//! [`Function`]: tabfn_core::Function

use tabfn_core::Function;

/// Pointwise sum of two functions.
#[derive(Clone, Copy, Debug)]
pub struct Sum<F, G> {
    first: F,
    second: G,
}

impl<F: Function, G: Function> Function for Sum<F, G> {
    fn value(&self, x: f64) -> f64 {
        self.first.value(x) + self.second.value(x)
    }
}

/// Pointwise product of two functions.
#[derive(Clone, Copy, Debug)]
pub struct Product<F, G> {
    first: F,
    second: G,
}

impl<F: Function, G: Function> Function for Product<F, G> {
    fn value(&self, x: f64) -> f64 {
        self.first.value(x) * self.second.value(x)
    }
}

/// Composition `outer(inner(x))`.
#[derive(Clone, Copy, Debug)]
pub struct Composition<F, G> {
    outer: F,
    inner: G,
}

impl<F: Function, G: Function> Function for Composition<F, G> {
    fn value(&self, x: f64) -> f64 {
        self.outer.value(self.inner.value(x))
    }
}

/// A function raised to a fixed real power.
#[derive(Clone, Copy, Debug)]
pub struct Power<F> {
    base: F,
    exponent: f64,
}

impl<F: Function> Function for Power<F> {
    fn value(&self, x: f64) -> f64 {
        self.base.value(x).powf(self.exponent)
    }
}

/// `first(x) + second(x)`.
pub fn sum<F: Function, G: Function>(first: F, second: G) -> Sum<F, G> {
    Sum { first, second }
}

/// `first(x) * second(x)`.
pub fn product<F: Function, G: Function>(first: F, second: G) -> Product<F, G> {
    Product { first, second }
}

/// `outer(inner(x))`.
pub fn composition<F: Function, G: Function>(outer: F, inner: G) -> Composition<F, G> {
    Composition { outer, inner }
}

/// `base(x)` raised to `exponent`.
pub fn power<F: Function>(base: F, exponent: f64) -> Power<F> {
    Power { base, exponent }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Cos, Exp, Log, Sin};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sum_and_product_evaluate_pointwise() {
        let double: fn(f64) -> f64 = |x| 2.0 * x;
        let offset: fn(f64) -> f64 = |x| x + 1.0;
        assert_eq!(sum(double, offset).value(3.0), 10.0);
        assert_eq!(product(double, offset).value(3.0), 24.0);
    }

    #[test]
    fn test_composition_applies_outer_after_inner() {
        let ln_of_exp = composition(Log::natural(), Exp);
        for x in [-2.0, 0.0, 1.5, 7.0] {
            assert_abs_diff_eq!(ln_of_exp.value(x), x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_power_raises_the_base_function() {
        let identity: fn(f64) -> f64 = |x| x;
        assert_abs_diff_eq!(power(identity, 2.0).value(3.0), 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(power(identity, 0.5).value(16.0), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pythagorean_identity_with_analytic_functions() {
        let unit = sum(power(Sin, 2.0), power(Cos, 2.0));
        for i in 0..=10 {
            let x = f64::from(i) * 0.3;
            assert_abs_diff_eq!(unit.value(x), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_combinators_nest() {
        let identity: fn(f64) -> f64 = |x| x;
        let nested = sum(product(identity, identity), power(identity, 3.0));
        // x^2 + x^3
        assert_abs_diff_eq!(nested.value(2.0), 12.0, epsilon = 1e-12);
    }
}
