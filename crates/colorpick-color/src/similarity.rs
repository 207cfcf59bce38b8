//! Local color homogeneity
//!
//! A sampled pixel is scored by how many of its eight neighbors, taken at
//! the sampling distance, share its color within a tolerance. Neighbors that
//! fall outside the image are skipped: they count neither as similar nor as
//! dissimilar, so edge pixels simply have fewer chances to score.

use colorpick_core::PixelSource;
use colorpick_core::color::Rgb;
use serde::{Deserialize, Serialize};

/// Unit offsets of the 8 neighbors, row by row from the top-left.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Maximum similarity score.
pub const MAX_SIMILARITY: u8 = NEIGHBOR_OFFSETS.len() as u8;

/// A sampled pixel with its similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalyzePoint {
    pub x: u32,
    pub y: u32,
    /// Number of similar neighbors, `0..=8`
    pub similarity: u8,
    /// Color of the pixel itself
    pub rgb: Rgb,
}

impl AnalyzePoint {
    /// Create a point from its parts.
    pub const fn new(x: u32, y: u32, similarity: u8, rgb: Rgb) -> Self {
        Self {
            x,
            y,
            similarity,
            rgb,
        }
    }
}

/// Count the neighbors of `(x, y)` whose color matches the center.
///
/// Neighbors are taken at `spacing` pixels along the axes and diagonals.
/// A neighbor matches when it lies inside the image and each of its red,
/// green and blue channels differs from the center by at most `tolerance`.
///
/// `(x, y)` must lie inside `source`.
///
/// # Returns
///
/// A score in `0..=8`.
pub fn neighbor_similarity<S: PixelSource + ?Sized>(
    source: &S,
    x: u32,
    y: u32,
    spacing: u32,
    tolerance: u32,
) -> u8 {
    let center = Rgb::from_pixel(source.color_at(x, y));
    let step = i64::from(spacing);
    let (cx, cy) = (i64::from(x), i64::from(y));

    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| {
            source.color_at_checked(cx + i64::from(dx) * step, cy + i64::from(dy) * step)
        })
        .filter(|&pixel| center.within_tolerance(Rgb::from_pixel(pixel), tolerance))
        .count() as u8
}

/// Score `(x, y)` and wrap it into an [`AnalyzePoint`].
///
/// `(x, y)` must lie inside `source`.
pub fn analyze_point<S: PixelSource + ?Sized>(
    source: &S,
    x: u32,
    y: u32,
    spacing: u32,
    tolerance: u32,
) -> AnalyzePoint {
    let rgb = Rgb::from_pixel(source.color_at(x, y));
    let similarity = neighbor_similarity(source, x, y, spacing, tolerance);
    AnalyzePoint::new(x, y, similarity, rgb)
}
