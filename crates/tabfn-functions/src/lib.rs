//! Analytic elementary functions and combinators over any [`Function`].
//!
//! The elementary functions ([`basic`]) are stateless evaluators; the
//! combinators ([`ops`]) wrap any pair of [`Function`] values — analytic
//! or tabulated — without touching their storage. Together with
//! `tabfn-core::tabulate` this is what lets a table stand in for the
//! formula it sampled:
//!
//! ```
//! use tabfn_core::{tabulate, Function};
//! use tabfn_functions::basic::{Cos, Sin};
//! use tabfn_functions::ops::{power, sum};
//!
//! let sin_table = tabulate(&Sin, 0.0, std::f64::consts::PI, 25)?;
//! let cos_table = tabulate(&Cos, 0.0, std::f64::consts::PI, 25)?;
//! let unit = sum(power(sin_table, 2.0), power(cos_table, 2.0));
//!
//! assert!((unit.value(1.3) - 1.0).abs() < 1e-2);
//! # Ok::<(), tabfn_core::TableError>(())
//! ```
//!
//! [`Function`]: tabfn_core::Function

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod basic;
pub mod error;
pub mod ops;

pub use basic::{Cos, Exp, Log, Sin, Tan};
pub use error::FunctionError;
pub use ops::{composition, power, product, sum, Composition, Power, Product, Sum};
