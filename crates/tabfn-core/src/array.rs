//! Contiguous array-backed tabulated function.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TableError;
use crate::function::Function;
use crate::interp;
use crate::point::Point;
use crate::table::{self, TabulatedFunction};
use crate::tabulate;

/// Tabulated function backed by a contiguous point array.
///
/// Indexed access and segment lookup are O(1)/O(log n); `insert` and
/// `remove` shift the tail of the array. Prefer
/// [`LinkedTabulated`](crate::LinkedTabulated) when a table is mutated
/// heavily at interior positions.
///
/// # Example
///
/// ```
/// use tabfn_core::{ArrayTabulated, Function, Point, TabulatedFunction};
///
/// let table = ArrayTabulated::from_points(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(2.0, 4.0),
/// ])?;
///
/// assert_eq!(table.value(1.0), 1.0);  // exact sample hit
/// assert_eq!(table.value(1.5), 2.5);  // interpolated
/// assert_eq!(table.value(-1.0), -1.0); // extrapolated from the first segment
/// # Ok::<(), tabfn_core::TableError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayTabulated {
    points: Vec<Point>,
}

impl ArrayTabulated {
    /// Tabulate `function` at `points_count` evenly spaced samples over
    /// `[left, right]`.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidInterval`] unless `left < right`;
    /// [`TableError::TooFewPoints`] for `points_count < 2`.
    pub fn from_function<F>(
        function: &F,
        left: f64,
        right: f64,
        points_count: usize,
    ) -> Result<Self, TableError>
    where
        F: Function + ?Sized,
    {
        Self::from_points(tabulate::sample(function, left, right, points_count)?)
    }

    /// Iterate over the samples in ascending x order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    fn check_index(&self, index: usize) -> Result<(), TableError> {
        if index >= self.points.len() {
            return Err(TableError::IndexOutOfRange {
                index,
                count: self.points.len(),
            });
        }
        Ok(())
    }
}

impl Function for ArrayTabulated {
    fn value(&self, x: f64) -> f64 {
        interp::eval_sorted(&self.points, x)
    }
}

impl TabulatedFunction for ArrayTabulated {
    fn from_points(points: Vec<Point>) -> Result<Self, TableError> {
        table::validate_points(&points)?;
        Ok(Self { points })
    }

    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn left_bound(&self) -> f64 {
        self.points[0].x
    }

    fn right_bound(&self) -> f64 {
        self.points[self.points.len() - 1].x
    }

    fn point(&self, index: usize) -> Result<Point, TableError> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    fn set_y(&mut self, index: usize, y: f64) -> Result<(), TableError> {
        self.check_index(index)?;
        self.points[index].y = y;
        Ok(())
    }

    fn set_point(&mut self, index: usize, point: Point) -> Result<(), TableError> {
        self.check_index(index)?;
        let fits_below = index == 0 || self.points[index - 1].x < point.x;
        let fits_above =
            index == self.points.len() - 1 || point.x < self.points[index + 1].x;
        if !(fits_below && fits_above) {
            return Err(TableError::OrderBroken { index, x: point.x });
        }
        self.points[index] = point;
        Ok(())
    }

    fn insert(&mut self, point: Point) -> Result<(), TableError> {
        if !point.x.is_finite() {
            return Err(TableError::OrderBroken {
                index: self.points.len(),
                x: point.x,
            });
        }
        let index = self.points.partition_point(|p| p.x < point.x);
        if index < self.points.len() && self.points[index].x == point.x {
            self.points[index].y = point.y;
        } else {
            self.points.insert(index, point);
        }
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Point, TableError> {
        self.check_index(index)?;
        if self.points.len() == 2 {
            return Err(TableError::MinimumSize);
        }
        Ok(self.points.remove(index))
    }

    fn to_points(&self) -> Vec<Point> {
        self.points.clone()
    }
}

impl fmt::Display for ArrayTabulated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        table::fmt_points(f, self.iter())
    }
}

impl Serialize for ArrayTabulated {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.points.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ArrayTabulated {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let points: Vec<Point> = Vec::deserialize(deserializer)?;
        Self::from_points(points).map_err(D::Error::custom)
    }
}
