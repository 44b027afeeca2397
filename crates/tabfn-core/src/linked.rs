//! Doubly-linked tabulated function over a slab of nodes.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TableError;
use crate::function::Function;
use crate::interp;
use crate::point::Point;
use crate::table::{self, TabulatedFunction};
use crate::tabulate;

/// Marks the absence of a neighbor at either end of the chain.
const NIL: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Node {
    point: Point,
    prev: usize,
    next: usize,
}

/// Tabulated function backed by a doubly-linked node sequence.
///
/// Locating a position costs a traversal (started from whichever end is
/// nearer), but once found, `insert` and `remove` splice in O(1) without
/// shifting the rest of the table. Prefer
/// [`ArrayTabulated`](crate::ArrayTabulated) when indexed reads dominate.
///
/// The links are indices into a slab rather than pointers; removed slots
/// go on a free list and are reused by later insertions.
#[derive(Clone, Debug)]
pub struct LinkedTabulated {
    nodes: Vec<Node>,
    head: usize,
    tail: usize,
    len: usize,
    free: Vec<usize>,
}

impl LinkedTabulated {
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
        let mut slot = self.head;
        std::iter::from_fn(move || {
            if slot == NIL {
                return None;
            }
            let node = self.nodes[slot];
            slot = node.next;
            Some(node.point)
        })
    }

    fn check_index(&self, index: usize) -> Result<(), TableError> {
        if index >= self.len {
            return Err(TableError::IndexOutOfRange {
                index,
                count: self.len,
            });
        }
        Ok(())
    }

    /// Slab slot of the node at `index`, walking from the nearer end.
    /// The caller guarantees `index < len`.
    fn slot_at(&self, index: usize) -> usize {
        if index <= self.len / 2 {
            let mut slot = self.head;
            for _ in 0..index {
                slot = self.nodes[slot].next;
            }
            slot
        } else {
            let mut slot = self.tail;
            for _ in 0..(self.len - 1 - index) {
                slot = self.nodes[slot].prev;
            }
            slot
        }
    }

    fn alloc(&mut self, node: Node) -> usize {
        if let Some(slot) = self.free.pop() {
            self.nodes[slot] = node;
            slot
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Link a new node in front of `slot` (at the tail when `slot` is
    /// `NIL`).
    fn splice_before(&mut self, slot: usize, point: Point) {
        let prev = if slot == NIL {
            self.tail
        } else {
            self.nodes[slot].prev
        };
        let new_slot = self.alloc(Node {
            point,
            prev,
            next: slot,
        });
        if prev == NIL {
            self.head = new_slot;
        } else {
            self.nodes[prev].next = new_slot;
        }
        if slot == NIL {
            self.tail = new_slot;
        } else {
            self.nodes[slot].prev = new_slot;
        }
        self.len += 1;
    }
}

impl Function for LinkedTabulated {
    fn value(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let first = self.nodes[self.head];
        let last = self.nodes[self.tail];
        if x < first.point.x {
            return interp::lerp(first.point, self.nodes[first.next].point, x);
        }
        if x > last.point.x {
            return interp::lerp(self.nodes[last.prev].point, last.point, x);
        }
        // Walk to the first node whose x is not below the query, stopping
        // at the tail: the query is inside the sampled domain.
        let mut slot = self.head;
        while slot != self.tail && self.nodes[slot].point.x < x {
            slot = self.nodes[slot].next;
        }
        let node = self.nodes[slot];
        if node.point.x == x {
            return node.point.y;
        }
        interp::lerp(self.nodes[node.prev].point, node.point, x)
    }
}

impl TabulatedFunction for LinkedTabulated {
    fn from_points(points: Vec<Point>) -> Result<Self, TableError> {
        table::validate_points(&points)?;
        let len = points.len();
        let nodes = points
            .into_iter()
            .enumerate()
            .map(|(i, point)| Node {
                point,
                prev: if i == 0 { NIL } else { i - 1 },
                next: if i + 1 == len { NIL } else { i + 1 },
            })
            .collect();
        Ok(Self {
            nodes,
            head: 0,
            tail: len - 1,
            len,
            free: Vec::new(),
        })
    }

    fn points_count(&self) -> usize {
        self.len
    }

    fn left_bound(&self) -> f64 {
        self.nodes[self.head].point.x
    }

    fn right_bound(&self) -> f64 {
        self.nodes[self.tail].point.x
    }

    fn point(&self, index: usize) -> Result<Point, TableError> {
        self.check_index(index)?;
        Ok(self.nodes[self.slot_at(index)].point)
    }

    fn set_y(&mut self, index: usize, y: f64) -> Result<(), TableError> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        self.nodes[slot].point.y = y;
        Ok(())
    }

    fn set_point(&mut self, index: usize, point: Point) -> Result<(), TableError> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        let node = self.nodes[slot];
        let fits_below = node.prev == NIL || self.nodes[node.prev].point.x < point.x;
        let fits_above = node.next == NIL || point.x < self.nodes[node.next].point.x;
        if !(fits_below && fits_above) {
            return Err(TableError::OrderBroken { index, x: point.x });
        }
        self.nodes[slot].point = point;
        Ok(())
    }

    fn insert(&mut self, point: Point) -> Result<(), TableError> {
        if !point.x.is_finite() {
            return Err(TableError::OrderBroken {
                index: self.len,
                x: point.x,
            });
        }
        // Walk to the first node whose x is not below the new x; the new
        // node goes in front of it (or at the tail if none is found).
        let mut slot = self.head;
        while slot != NIL && self.nodes[slot].point.x < point.x {
            slot = self.nodes[slot].next;
        }
        if slot != NIL && self.nodes[slot].point.x == point.x {
            self.nodes[slot].point.y = point.y;
            return Ok(());
        }
        self.splice_before(slot, point);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Point, TableError> {
        self.check_index(index)?;
        if self.len == 2 {
            return Err(TableError::MinimumSize);
        }
        let slot = self.slot_at(index);
        let node = self.nodes[slot];
        if node.prev == NIL {
            self.head = node.next;
        } else {
            self.nodes[node.prev].next = node.next;
        }
        if node.next == NIL {
            self.tail = node.prev;
        } else {
            self.nodes[node.next].prev = node.prev;
        }
        self.free.push(slot);
        self.len -= 1;
        Ok(node.point)
    }

    fn to_points(&self) -> Vec<Point> {
        self.iter().collect()
    }
}

impl PartialEq for LinkedTabulated {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Display for LinkedTabulated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        table::fmt_points(f, self.iter())
    }
}

impl Serialize for LinkedTabulated {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for LinkedTabulated {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let points: Vec<Point> = Vec::deserialize(deserializer)?;
        Self::from_points(points).map_err(D::Error::custom)
    }
}
