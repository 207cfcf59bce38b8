//! Point, Pta - Integer coordinates and point arrays
//!
//! Pattern generators produce relative offsets as a `Pta`, which is then
//! translated onto an anchor coordinate.
//!
//! # Storage layout
//!
//! Points are stored as separate X and Y vectors (SoA layout).

use serde::{Deserialize, Serialize};

/// A signed pixel coordinate.
///
/// Signed so that candidates generated left of or above the image can be
/// represented before being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Array of integer points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pta {
    /// X coordinates
    x: Vec<i32>,
    /// Y coordinates
    y: Vec<i32>,
}

impl Pta {
    /// Create a new empty Pta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Pta with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<Point> {
        Some(Point::new(*self.x.get(index)?, *self.y.get(index)?))
    }

    /// Add a point.
    pub fn push(&mut self, x: i32, y: i32) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Point::new(x, y))
    }

    /// Return a copy with every point shifted by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Pta {
        Pta {
            x: self.x.iter().map(|v| v.saturating_add(dx)).collect(),
            y: self.y.iter().map(|v| v.saturating_add(dy)).collect(),
        }
    }

    /// Return a copy with every coordinate multiplied by `factor`.
    pub fn scale(&self, factor: i32) -> Pta {
        Pta {
            x: self.x.iter().map(|v| v.saturating_mul(factor)).collect(),
            y: self.y.iter().map(|v| v.saturating_mul(factor)).collect(),
        }
    }

    /// Keep only the points for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(Point) -> bool) {
        let mut x = Vec::with_capacity(self.len());
        let mut y = Vec::with_capacity(self.len());
        for p in self.iter() {
            if keep(p) {
                x.push(p.x);
                y.push(p.y);
            }
        }
        self.x = x;
        self.y = y;
    }
}

impl FromIterator<Point> for Pta {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut pta = Pta::new();
        for p in iter {
            pta.push(p.x, p.y);
        }
        pta
    }
}

impl FromIterator<(i32, i32)> for Pta {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        iter.into_iter().map(Point::from).collect()
    }
}
