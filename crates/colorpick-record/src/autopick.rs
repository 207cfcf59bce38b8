//! Auto-pick pattern generation
//!
//! Starting from the base point (the record at position 0), a fixed pattern
//! of offsets scaled by a spacing is laid over the image. Candidates inside
//! the image are sampled and appended to the store with auto-assigned keys;
//! the rest are dropped silently.
//!
//! # Patterns
//!
//! | mode    | offsets (x spacing)                              |
//! |---------|--------------------------------------------------|
//! | Grid3x3 | `(i, j)`, `i, j` in `-1..=1`, center excluded    |
//! | Grid4x4 | `(i, j)`, `i, j` in `-1..=2`, center excluded    |
//! | Cross   | `(d, 0)` then `(0, d)` for `d` in `-2, -1, 1, 2` |
//! | Circle  | 8 points on a circle of radius `spacing`         |
//! | Diamond | 8 points of a radius-2 diamond                   |

use crate::error::{RecordError, RecordResult};
use crate::sink::SinkReport;
use crate::store::RecordSlotStore;
use colorpick_color::ColorFormat;
use colorpick_core::{PixelSource, Pta};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Unit offsets of the diamond pattern.
const DIAMOND_OFFSETS: [(i32, i32); 8] = [
    (0, -2),
    (-1, -1),
    (1, -1),
    (-2, 0),
    (2, 0),
    (-1, 1),
    (1, 1),
    (0, 2),
];

/// Circle sample angles in degrees.
const CIRCLE_ANGLES: [u32; 8] = [0, 45, 90, 135, 180, 225, 270, 315];

/// Auto-pick pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoPickMode {
    /// 3x3 grid around the base
    #[default]
    Grid3x3,
    /// 4x4 grid, extending right and down from the base
    Grid4x4,
    /// Two points on each side along both axes
    Cross,
    /// Eight points on a circle
    Circle,
    /// Eight points on a diamond
    Diamond,
}

impl AutoPickMode {
    /// Every mode, in declaration order.
    pub const ALL: [AutoPickMode; 5] = [
        AutoPickMode::Grid3x3,
        AutoPickMode::Grid4x4,
        AutoPickMode::Cross,
        AutoPickMode::Circle,
        AutoPickMode::Diamond,
    ];

    /// Offsets relative to the base point, in generation order.
    pub fn offsets(self, spacing: i32) -> Pta {
        match self {
            AutoPickMode::Grid3x3 => grid_offsets(-1, 1, spacing),
            AutoPickMode::Grid4x4 => grid_offsets(-1, 2, spacing),
            AutoPickMode::Cross => cross_offsets(spacing),
            AutoPickMode::Circle => circle_offsets(spacing),
            AutoPickMode::Diamond => diamond_offsets(spacing),
        }
    }
}

/// Square grid `lo..=hi` in both axes, x outer, origin excluded.
fn grid_offsets(lo: i32, hi: i32, spacing: i32) -> Pta {
    let mut pta = Pta::new();
    for i in lo..=hi {
        for j in lo..=hi {
            if i == 0 && j == 0 {
                continue;
            }
            pta.push(i, j);
        }
    }
    pta.scale(spacing)
}

fn cross_offsets(spacing: i32) -> Pta {
    let mut pta = Pta::with_capacity(8);
    for d in [-2, -1, 1, 2] {
        pta.push(d, 0);
        pta.push(0, d);
    }
    pta.scale(spacing)
}

/// Round half up, so `-2.5` becomes `-2`.
#[inline]
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

fn circle_offsets(spacing: i32) -> Pta {
    let radius = f64::from(spacing);
    CIRCLE_ANGLES
        .iter()
        .map(|&deg| {
            let rad = f64::from(deg).to_radians();
            (round_half_up(radius * rad.cos()), round_half_up(radius * rad.sin()))
        })
        .collect()
}

fn diamond_offsets(spacing: i32) -> Pta {
    DIAMOND_OFFSETS.iter().copied().collect::<Pta>().scale(spacing)
}

/// Options for [`auto_pick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoPickConfig {
    /// Pattern to lay around the base point
    pub mode: AutoPickMode,
    /// Distance unit between pattern points, in pixels
    pub spacing: u32,
}

impl Default for AutoPickConfig {
    fn default() -> Self {
        Self {
            mode: AutoPickMode::Grid3x3,
            spacing: 10,
        }
    }
}

impl AutoPickConfig {
    /// Set the pattern.
    pub fn with_mode(mut self, mode: AutoPickMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the spacing.
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidParameters`] if `spacing` is 0 or does
    /// not fit an `i32`.
    pub fn validate(&self) -> RecordResult<()> {
        if self.spacing == 0 || i32::try_from(self.spacing).is_err() {
            return Err(RecordError::InvalidParameters(format!(
                "auto-pick spacing must be in 1..={}, got {}",
                i32::MAX,
                self.spacing
            )));
        }
        Ok(())
    }
}

/// Record pattern points around the base point of `store`.
///
/// In-image candidates are sampled from `source`, formatted with `format`
/// and appended in generation order. Candidates the store refuses once it
/// is full are counted as rejected.
///
/// # Errors
///
/// - [`RecordError::InvalidParameters`] for an invalid `config`
/// - [`RecordError::NoBasePoint`] if `store` is empty
pub fn auto_pick<S: PixelSource + ?Sized>(
    store: &mut RecordSlotStore,
    source: &S,
    config: &AutoPickConfig,
    format: ColorFormat,
) -> RecordResult<SinkReport> {
    config.validate()?;
    let Some(base) = store.base_point() else {
        warn!("auto-pick requested without a base point");
        return Err(RecordError::NoBasePoint);
    };

    let spacing = config.spacing as i32;
    let mut candidates = config.mode.offsets(spacing).translate(base.x, base.y);
    let generated = candidates.len();
    candidates.retain(|p| source.contains(i64::from(p.x), i64::from(p.y)));
    let dropped = generated - candidates.len();

    let mut report = SinkReport::default();
    for p in candidates.iter() {
        let pixel = source.color_at(p.x as u32, p.y as u32);
        report.offer(store, p.x, p.y, format.format(pixel), pixel);
    }

    debug!(
        mode = ?config.mode,
        spacing,
        base_x = base.x,
        base_y = base.y,
        candidates = generated,
        dropped,
        recorded = report.recorded(),
        rejected = report.rejected,
        "auto-pick finished"
    );
    Ok(report)
}
