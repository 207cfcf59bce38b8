//! colorpick Core - Basic data structures for color sampling
//!
//! This crate provides the fundamental data structures used throughout
//! the colorpick workspace:
//!
//! - [`Pix`] / [`PixMut`] - 32 bpp RGBA image buffer (immutable / mutable)
//! - [`PixelSource`] - Read-only pixel access contract used by the analyzers
//! - [`Region`] - Normalized rectangular selection with inclusive bounds
//! - [`Point`] / [`Pta`] - Integer coordinates and point arrays
//! - [`color`] - Packed color helpers and channel tolerance tests

pub mod error;
pub mod pix;
pub mod pta;
pub mod region;
pub mod source;

pub use error::{Error, Result};
pub use pix::{Pix, PixMut};
pub use pta::{Point, Pta};
pub use region::Region;
pub use source::PixelSource;

/// Color channel helpers for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
/// The sampling engine only ever looks at the red, green and blue bytes.
pub mod color {
    use serde::{Deserialize, Serialize};

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// The color part of a packed pixel, alpha dropped.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Rgb {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }

    impl Rgb {
        /// Create from individual channels.
        pub const fn new(r: u8, g: u8, b: u8) -> Self {
            Self { r, g, b }
        }

        /// Unpack the red, green and blue bytes of a packed pixel.
        #[inline]
        pub fn from_pixel(pixel: u32) -> Self {
            let (r, g, b) = extract_rgb(pixel);
            Self { r, g, b }
        }

        /// Largest per-channel absolute difference to `other`.
        #[inline]
        pub fn max_channel_diff(self, other: Rgb) -> u32 {
            let dr = self.r.abs_diff(other.r);
            let dg = self.g.abs_diff(other.g);
            let db = self.b.abs_diff(other.b);
            dr.max(dg).max(db) as u32
        }

        /// Check whether every channel differs from `other` by at most
        /// `tolerance`.
        #[inline]
        pub fn within_tolerance(self, other: Rgb, tolerance: u32) -> bool {
            self.max_channel_diff(other) <= tolerance
        }
    }

    impl From<u32> for Rgb {
        fn from(pixel: u32) -> Self {
            Self::from_pixel(pixel)
        }
    }

}
