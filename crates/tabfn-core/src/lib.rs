//! Tabulated mathematical functions with piecewise-linear evaluation.
//!
//! A tabulated function is known only at a finite, strictly x-ordered set
//! of sample points; evaluation anywhere else linearly interpolates inside
//! the sampled domain and linearly extrapolates from the boundary segments
//! outside it.
//!
//! # Overview
//!
//! - [`Point`]: a plain `(x, y)` sample.
//! - [`Function`]: the "evaluate at `f64`" capability shared by analytic
//!   formulas and tables, so combinators can treat them uniformly.
//! - [`TabulatedFunction`]: the storage contract — counts, bounds, indexed
//!   access, and order-preserving mutation.
//! - [`ArrayTabulated`] / [`LinkedTabulated`]: the two interchangeable
//!   backends behind that contract (contiguous array vs. doubly-linked
//!   sequence).
//! - [`tabulate`]: build a table by sampling any [`Function`] on an
//!   interval.
//!
//! # Invariants
//!
//! Sample x coordinates are strictly increasing, the point count never
//! drops below 2, and a failed mutation leaves its table untouched. The
//! companion `tabfn-codec` crate relies on exactly these guarantees when
//! reconstructing tables from external streams.
//!
//! # Example
//!
//! ```
//! use tabfn_core::{tabulate, Function, TabulatedFunction, Point};
//!
//! let square: fn(f64) -> f64 = |x| x * x;
//! let mut table = tabulate(&square, 0.0, 4.0, 5)?;
//!
//! assert_eq!(table.value(3.0), 9.0);      // exact sample
//! assert_eq!(table.value(3.5), 12.5);     // on the chord through (3,9)-(4,16)
//!
//! table.insert(Point::new(3.5, 12.25))?;  // refine the table
//! assert_eq!(table.value(3.5), 12.25);
//! # Ok::<(), tabfn_core::TableError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod array;
pub mod error;
pub mod function;
mod interp;
pub mod linked;
pub mod point;
pub mod prelude;
pub mod table;
pub mod tabulate;

pub use array::ArrayTabulated;
pub use error::TableError;
pub use function::Function;
pub use linked::LinkedTabulated;
pub use point::Point;
pub use table::TabulatedFunction;
pub use tabulate::tabulate;
