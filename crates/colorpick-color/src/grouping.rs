//! First-fit color grouping
//!
//! Sampled points are clustered into color groups in a single pass. Each
//! group keeps the color of its first member as a fixed reference; a new
//! point joins the first group, in creation order, whose reference lies
//! within twice the sampling tolerance on every channel. Points matching
//! no group start a new one.
//!
//! The reference never moves (no running centroid) and the match is
//! first-fit rather than nearest-fit, so the result depends on the order in
//! which points are offered.

use crate::similarity::AnalyzePoint;
use colorpick_core::color::Rgb;

/// A non-empty, ordered run of points sharing a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGroup {
    points: Vec<AnalyzePoint>,
}

impl ColorGroup {
    fn new(first: AnalyzePoint) -> Self {
        Self {
            points: vec![first],
        }
    }

    /// Color of the first member, used for every membership test.
    #[inline]
    pub fn reference(&self) -> Rgb {
        self.points[0].rgb
    }

    /// Members in insertion order.
    #[inline]
    pub fn points(&self) -> &[AnalyzePoint] {
        &self.points
    }

    /// Number of members (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a group is created with its first member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered collection of color groups built with first-fit matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGroups {
    /// Per-channel match radius (twice the sampling tolerance)
    match_tolerance: u32,
    groups: Vec<ColorGroup>,
}

impl ColorGroups {
    /// Create an empty grouping for a given sampling tolerance.
    ///
    /// Group membership uses `2 * tolerance`.
    pub fn new(tolerance: u32) -> Self {
        Self {
            match_tolerance: tolerance.saturating_mul(2),
            groups: Vec::new(),
        }
    }

    /// Group a sequence of points in order.
    pub fn from_points<I>(tolerance: u32, points: I) -> Self
    where
        I: IntoIterator<Item = AnalyzePoint>,
    {
        let mut groups = Self::new(tolerance);
        for p in points {
            groups.insert(p);
        }
        groups
    }

    /// Per-channel radius used for membership tests.
    #[inline]
    pub fn match_tolerance(&self) -> u32 {
        self.match_tolerance
    }

    /// Add a point to the first matching group, or open a new group.
    ///
    /// Returns the index of the group the point went into.
    pub fn insert(&mut self, point: AnalyzePoint) -> usize {
        let found = self
            .groups
            .iter()
            .position(|g| g.reference().within_tolerance(point.rgb, self.match_tolerance));
        match found {
            Some(idx) => {
                self.groups[idx].points.push(point);
                idx
            }
            None => {
                self.groups.push(ColorGroup::new(point));
                self.groups.len() - 1
            }
        }
    }

    /// Groups in creation order.
    #[inline]
    pub fn groups(&self) -> &[ColorGroup] {
        &self.groups
    }

    /// Number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether no point has been inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of grouped points.
    pub fn point_count(&self) -> usize {
        self.groups.iter().map(ColorGroup::len).sum()
    }

    /// All points, group by group, each group in insertion order.
    pub fn flatten(&self) -> impl Iterator<Item = &AnalyzePoint> + '_ {
        self.groups.iter().flat_map(|g| g.points.iter())
    }
}
