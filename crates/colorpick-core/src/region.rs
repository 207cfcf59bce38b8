//! Region - Rectangular selection in image coordinates
//!
//! A region is built from two arbitrary corners and is always stored
//! normalized (`min <= max` on both axes). Bounds are inclusive: the
//! corners themselves belong to the region.

use serde::{Deserialize, Serialize};

/// A normalized rectangle with inclusive bounds.
///
/// Small and frequently copied, so this is a plain `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Region {
    /// Create a region from two corner points, in any order.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// Smallest x inside the region.
    #[inline]
    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    /// Smallest y inside the region.
    #[inline]
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    /// Largest x inside the region.
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    /// Largest y inside the region.
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Number of columns covered.
    #[inline]
    pub fn width(&self) -> u32 {
        self.min_x.abs_diff(self.max_x) + 1
    }

    /// Number of rows covered.
    #[inline]
    pub fn height(&self) -> u32 {
        self.min_y.abs_diff(self.max_y) + 1
    }

    /// Restrict the region to a `width` x `height` image while keeping the
    /// phase of a grid walk with step `spacing`.
    ///
    /// The result starts at the first on-grid coordinate inside the image,
    /// so its [`grid`](Self::grid) visits exactly the in-image cells of
    /// `self.grid(spacing)`. Returns `None` when no cell lands inside.
    pub fn clip_to_image(&self, spacing: u32, width: u32, height: u32) -> Option<Region> {
        let (min_x, max_x) = clip_axis(self.min_x, self.max_x, spacing, width)?;
        let (min_y, max_y) = clip_axis(self.min_y, self.max_y, spacing, height)?;
        Some(Region {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Coordinates visited by a grid walk with step `spacing`.
    ///
    /// Columns advance in the outer loop and rows in the inner loop, both
    /// starting at the minimum corner and including the maximum corner when
    /// it falls on the grid. A `spacing` of 0 is treated as 1.
    pub fn grid(&self, spacing: u32) -> impl Iterator<Item = (i32, i32)> + '_ {
        let step = spacing.max(1) as usize;
        let (min_y, max_y) = (self.min_y, self.max_y);
        (self.min_x..=self.max_x)
            .step_by(step)
            .flat_map(move |x| (min_y..=max_y).step_by(step).map(move |y| (x, y)))
    }
}

/// First on-grid coordinate and last coordinate of `min..=max` inside
/// `0..extent`.
fn clip_axis(min: i32, max: i32, spacing: u32, extent: u32) -> Option<(i32, i32)> {
    let step = i64::from(spacing.max(1));
    let (min, max) = (i64::from(min), i64::from(max));
    let lo = min.max(0);
    let hi = max.min(i64::from(extent) - 1);
    let first = min + (lo - min + step - 1) / step * step;
    if first > hi {
        return None;
    }
    Some((i32::try_from(first).ok()?, i32::try_from(hi).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let r = Region::from_corners(10, 2, 4, 8);
        assert_eq!((r.min_x(), r.min_y(), r.max_x(), r.max_y()), (4, 2, 10, 8));
        assert_eq!(r, Region::from_corners(4, 8, 10, 2));
        assert_eq!(r.width(), 7);
        assert_eq!(r.height(), 7);
    }

    #[test]
    fn test_grid_order_and_bounds() {
        let r = Region::from_corners(0, 0, 4, 2);
        let pts: Vec<_> = r.grid(2).collect();
        assert_eq!(pts, vec![(0, 0), (0, 2), (2, 0), (2, 2), (4, 0), (4, 2)]);
    }

    #[test]
    fn test_grid_single_point() {
        let r = Region::from_corners(5, 5, 5, 5);
        assert_eq!(r.grid(3).collect::<Vec<_>>(), vec![(5, 5)]);
    }

    #[test]
    fn test_clip_keeps_grid_phase() {
        let r = Region::from_corners(-7, -1, 20, 3);
        let clipped = r.clip_to_image(3, 10, 10).unwrap();
        assert_eq!(
            (clipped.min_x(), clipped.min_y(), clipped.max_x(), clipped.max_y()),
            (2, 2, 9, 3)
        );
        let inside: Vec<_> = r
            .grid(3)
            .filter(|&(x, y)| (0..10).contains(&x) && (0..10).contains(&y))
            .collect();
        assert_eq!(clipped.grid(3).collect::<Vec<_>>(), inside);
    }

    #[test]
    fn test_clip_outside_image() {
        assert!(Region::from_corners(-5, -5, -1, -1).clip_to_image(1, 10, 10).is_none());
        assert!(Region::from_corners(10, 0, 12, 3).clip_to_image(1, 10, 10).is_none());
        assert!(Region::from_corners(0, 0, 3, 3).clip_to_image(1, 0, 0).is_none());
        // (-5, -5) stepping by 4 jumps over the single column at x = 0
        assert!(Region::from_corners(-5, -5, 0, 0).clip_to_image(4, 10, 10).is_none());
    }

    #[test]
    fn test_clip_extreme_corners() {
        let r = Region::from_corners(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        let clipped = r.clip_to_image(1, 4, 2).unwrap();
        assert_eq!(clipped.grid(1).count(), 8);
    }
}
