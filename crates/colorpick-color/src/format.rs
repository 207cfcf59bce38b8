//! Display strings for packed colors
//!
//! Recorded points carry both the packed color and a human-readable form.
//! The readable form depends on the session's active [`ColorFormat`].

use crate::{ColorError, ColorResult};
use colorpick_core::color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a packed color is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#RRGGBB`, uppercase hex
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// The packed 32-bit value in decimal
    Decimal,
}

impl ColorFormat {
    /// Every format, in declaration order.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Decimal];

    /// Render `pixel` in this format. Alpha is not shown.
    pub fn format(self, pixel: u32) -> String {
        let (r, g, b) = color::extract_rgb(pixel);
        match self {
            ColorFormat::Hex => format!("#{:02X}{:02X}{:02X}", r, g, b),
            ColorFormat::Rgb => format!("rgb({}, {}, {})", r, g, b),
            ColorFormat::Decimal => pixel.to_string(),
        }
    }

    /// Short lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Decimal => "decimal",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        ColorFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownFormat(s.to_string()))
    }
}

/// Render `pixel` with `mode`.
pub fn format_color(pixel: u32, mode: ColorFormat) -> String {
    mode.format(pixel)
}
