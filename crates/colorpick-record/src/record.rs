//! A single recorded sample point

use colorpick_core::Point;
use serde::{Deserialize, Serialize};

/// Display string of a placeholder record.
pub const PLACEHOLDER_DISPLAY: &str = "-1";

/// A recorded point with its color.
///
/// `native_color` is the packed `0xRRGGBBAA` value read from the image and
/// `display_color` its rendering in the active color format. Placeholders,
/// which only pad the store up to an explicitly requested slot, carry the
/// coordinate `(-1, -1)`, the display string [`PLACEHOLDER_DISPLAY`] and
/// no native color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub slot_key: String,
    pub x: i32,
    pub y: i32,
    pub display_color: String,
    pub native_color: Option<u32>,
}

impl Record {
    /// Create a sampled record.
    pub fn new(
        slot_key: impl Into<String>,
        x: i32,
        y: i32,
        display_color: impl Into<String>,
        native_color: Option<u32>,
    ) -> Self {
        Self {
            slot_key: slot_key.into(),
            x,
            y,
            display_color: display_color.into(),
            native_color,
        }
    }

    /// Create a placeholder for an empty slot.
    pub fn placeholder(slot_key: impl Into<String>) -> Self {
        Self::new(slot_key, -1, -1, PLACEHOLDER_DISPLAY, None)
    }

    /// Check whether this record is a gap filler rather than a sample.
    pub fn is_placeholder(&self) -> bool {
        self.native_color.is_none() && self.x == -1 && self.y == -1
    }

    /// Coordinate of the record.
    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
