//! Convenience re-exports for downstream crates.
//!
//! ```
//! use tabfn_core::prelude::*;
//!
//! let table = tabulate(&(f64::sin as fn(f64) -> f64), 0.0, 1.0, 4)?;
//! assert_eq!(table.points_count(), 4);
//! # Ok::<(), TableError>(())
//! ```

pub use crate::array::ArrayTabulated;
pub use crate::error::TableError;
pub use crate::function::Function;
pub use crate::linked::LinkedTabulated;
pub use crate::point::Point;
pub use crate::table::TabulatedFunction;
pub use crate::tabulate::tabulate;
