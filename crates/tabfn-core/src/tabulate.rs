//! Building tables by sampling an evaluable function.

use tracing::debug;

use crate::array::ArrayTabulated;
use crate::error::TableError;
use crate::function::Function;
use crate::point::Point;

/// Sample `function` at `points_count` evenly spaced arguments over
/// `[left, right]`.
///
/// The last sample's x is pinned to exactly `right`, so repeated step
/// arithmetic cannot drift the table's domain away from the requested
/// interval.
pub(crate) fn sample<F>(
    function: &F,
    left: f64,
    right: f64,
    points_count: usize,
) -> Result<Vec<Point>, TableError>
where
    F: Function + ?Sized,
{
    if !(left < right) {
        return Err(TableError::InvalidInterval { left, right });
    }
    if points_count < 2 {
        return Err(TableError::TooFewPoints {
            count: points_count,
        });
    }
    debug!(left, right, points_count, "sampling function");
    let step = (right - left) / (points_count - 1) as f64;
    let mut points = Vec::with_capacity(points_count);
    for i in 0..points_count {
        let x = if i + 1 == points_count {
            right
        } else {
            left + i as f64 * step
        };
        points.push(Point::new(x, function.value(x)));
    }
    Ok(points)
}

/// Tabulate `function` over `[left, right]` with `points_count` evenly
/// spaced samples, producing an array-backed table.
///
/// Use [`LinkedTabulated::from_function`](crate::LinkedTabulated::from_function)
/// when the linked backend is wanted instead.
///
/// # Errors
///
/// [`TableError::InvalidInterval`] unless `left < right`;
/// [`TableError::TooFewPoints`] for `points_count < 2`.
///
/// # Example
///
/// ```
/// use tabfn_core::{tabulate, Function, TabulatedFunction};
///
/// let square: fn(f64) -> f64 = |x| x * x;
/// let table = tabulate(&square, 0.0, 2.0, 5)?;
/// assert_eq!(table.points_count(), 5);
/// assert_eq!(table.right_bound(), 2.0);
/// assert_eq!(table.value(1.0), 1.0);
/// # Ok::<(), tabfn_core::TableError>(())
/// ```
pub fn tabulate<F>(
    function: &F,
    left: f64,
    right: f64,
    points_count: usize,
) -> Result<ArrayTabulated, TableError>
where
    F: Function + ?Sized,
{
    ArrayTabulated::from_function(function, left, right, points_count)
}
