//! Area analysis
//!
//! Walks a rectangular area on a regular grid, scores each sample by how
//! homogeneous its neighborhood is, clusters the scored samples by color and
//! emits a small set of representative points to a record sink.
//!
//! # Pipeline
//!
//! 1. Grid walk from the area's minimum corner with step `spacing`, columns
//!    outer and rows inner, both ends inclusive. The walk is clipped to the
//!    image up front, keeping the grid phase, so off-image cells are never
//!    visited.
//! 2. Neighbor similarity at distance `spacing` with per-channel `tolerance`.
//!    Samples scoring 0 are discarded.
//! 3. First-fit grouping with radius `2 * tolerance`.
//! 4. Selection of at most `max_points` points, anchor first.
//! 5. Each selected point is formatted and offered to the sink.

use crate::error::{RegionError, RegionResult};
use colorpick_color::{AnalyzePoint, ColorFormat, ColorGroups, analyze_point, select_points};
use colorpick_core::{PixelSource, Region};
use colorpick_record::{RecordSink, SinkReport};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options for area analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Upper bound on the number of emitted points
    pub max_points: usize,
    /// Per-channel color tolerance for the similarity test
    pub tolerance: u32,
    /// Grid step and neighbor distance, in pixels
    pub spacing: u32,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            max_points: 5,
            tolerance: 10,
            spacing: 5,
        }
    }
}

impl AnalyzeConfig {
    /// Set the point budget.
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Set the color tolerance.
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the sampling spacing.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `max_points` or
    /// `spacing` is 0.
    pub fn validate(&self) -> RegionResult<()> {
        if self.max_points == 0 {
            return Err(RegionError::InvalidParameters(
                "max_points must be at least 1".to_string(),
            ));
        }
        if self.spacing == 0 {
            return Err(RegionError::InvalidParameters(
                "spacing must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sample `region` of `source` and group the samples by color.
///
/// Only samples inside the image with a non-zero similarity are grouped.
pub fn collect_groups<S: PixelSource + ?Sized>(
    source: &S,
    region: &Region,
    config: &AnalyzeConfig,
) -> ColorGroups {
    let mut groups = ColorGroups::new(config.tolerance);
    let mut sampled = 0usize;

    let cells = region.clip_to_image(config.spacing, source.width(), source.height());
    for (x, y) in cells.iter().flat_map(|r| r.grid(config.spacing)) {
        sampled += 1;
        let point = analyze_point(source, x as u32, y as u32, config.spacing, config.tolerance);
        if point.similarity > 0 {
            groups.insert(point);
        }
    }

    debug!(
        sampled,
        kept = groups.point_count(),
        groups = groups.len(),
        "sampled region"
    );
    groups
}

/// Pick the representative points of `region` without emitting them.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for an invalid `config`.
pub fn select_region_points<S: PixelSource + ?Sized>(
    source: &S,
    region: &Region,
    config: &AnalyzeConfig,
) -> RegionResult<Vec<AnalyzePoint>> {
    config.validate()?;
    let groups = collect_groups(source, region, config);
    Ok(select_points(&groups, config.max_points))
}

/// Analyze `region` of `source` and emit the selected points to `sink`.
///
/// Each point is emitted with its color rendered in `format`. A sink that
/// refuses a point does not stop the emission; refusals are counted in the
/// returned report. When no sample has a similar neighbor nothing is
/// emitted.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] for an invalid `config`.
pub fn analyze_region<S, K>(
    source: &S,
    region: &Region,
    config: &AnalyzeConfig,
    format: ColorFormat,
    sink: &mut K,
) -> RegionResult<SinkReport>
where
    S: PixelSource + ?Sized,
    K: RecordSink + ?Sized,
{
    let selected = select_region_points(source, region, config)?;

    let mut report = SinkReport::default();
    for p in &selected {
        let native = source.color_at(p.x, p.y);
        report.offer(&mut *sink, p.x as i32, p.y as i32, format.format(native), native);
    }

    debug!(
        min_x = region.min_x(),
        min_y = region.min_y(),
        max_x = region.max_x(),
        max_y = region.max_y(),
        emitted = report.emitted,
        rejected = report.rejected,
        "analyzed region"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorpick_core::{Pix, color};

    type Emitted = Vec<(i32, i32, String, u32)>;

    fn uniform(w: u32, h: u32) -> Pix {
        Pix::new_filled(w, h, color::compose_rgb(30, 40, 50)).unwrap()
    }

    #[test]
    fn test_default_config() {
        let cfg = AnalyzeConfig::default();
        assert_eq!((cfg.max_points, cfg.tolerance, cfg.spacing), (5, 10, 5));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(AnalyzeConfig::default().with_max_points(0).validate().is_err());
        assert!(AnalyzeConfig::default().with_spacing(0).validate().is_err());
    }

    #[test]
    fn test_uniform_patch() {
        let pix = uniform(3, 3);
        let region = Region::from_corners(0, 0, 2, 2);
        let cfg = AnalyzeConfig::default().with_spacing(1);
        let groups = collect_groups(&pix, &region, &cfg);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.point_count(), 9);

        let mut sink = Emitted::new();
        let report = analyze_region(&pix, &region, &cfg, ColorFormat::Hex, &mut sink).unwrap();
        assert_eq!(report.emitted, 5);
        assert_eq!((sink[0].0, sink[0].1), (1, 1));
        assert_eq!(sink[0].2, "#1E2832");
    }

    #[test]
    fn test_isolated_samples_emit_nothing() {
        // Spacing larger than the image leaves every sample without neighbors
        let pix = uniform(4, 4);
        let region = Region::from_corners(0, 0, 3, 3);
        let cfg = AnalyzeConfig::default().with_spacing(10);
        let mut sink = Emitted::new();
        let report = analyze_region(&pix, &region, &cfg, ColorFormat::Hex, &mut sink).unwrap();
        assert_eq!(report.emitted, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_region_outside_image() {
        let pix = uniform(4, 4);
        let region = Region::from_corners(10, 10, 20, 20);
        let cfg = AnalyzeConfig::default().with_spacing(1);
        assert!(select_region_points(&pix, &region, &cfg).unwrap().is_empty());
    }

    #[test]
    fn test_config_serde_fills_defaults() {
        let cfg: AnalyzeConfig = serde_json::from_str(r#"{"tolerance": 3}"#).unwrap();
        assert_eq!(cfg, AnalyzeConfig::default().with_tolerance(3));
    }
}
