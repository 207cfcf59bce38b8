//! Read-only pixel access used by the sampling engine
//!
//! The analyzers never decode or own images; they only need the extents of
//! the active image and a way to read one packed color at a time.

use crate::pix::Pix;

/// A bounded grid of packed `0xRRGGBBAA` colors.
///
/// Callers must bound-check with [`PixelSource::contains`] before calling
/// [`PixelSource::color_at`].
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Packed color at `(x, y)`.
    ///
    /// Only defined for `x < width` and `y < height`.
    fn color_at(&self, x: u32, y: u32) -> u32;

    /// Check whether a signed coordinate lies inside the image.
    #[inline]
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }

    /// Packed color at a signed coordinate, `None` outside the image.
    #[inline]
    fn color_at_checked(&self, x: i64, y: i64) -> Option<u32> {
        if self.contains(x, y) {
            Some(self.color_at(x as u32, y as u32))
        } else {
            None
        }
    }
}

impl PixelSource for Pix {
    #[inline]
    fn width(&self) -> u32 {
        Pix::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        Pix::height(self)
    }

    #[inline]
    fn color_at(&self, x: u32, y: u32) -> u32 {
        self.get_pixel_unchecked(x, y)
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn color_at(&self, x: u32, y: u32) -> u32 {
        (**self).color_at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_rejects_negative_and_edges() {
        let pix = Pix::new(10, 4).unwrap();
        assert!(pix.contains(0, 0));
        assert!(pix.contains(9, 3));
        assert!(!pix.contains(-1, 0));
        assert!(!pix.contains(0, -1));
        assert!(!pix.contains(10, 0));
        assert!(!pix.contains(0, 4));
    }

    #[test]
    fn test_color_at_checked() {
        let pix = Pix::new_filled(2, 2, 0x01020304).unwrap();
        assert_eq!(pix.color_at_checked(1, 1), Some(0x01020304));
        assert_eq!(pix.color_at_checked(2, 1), None);
        assert_eq!(pix.color_at_checked(-1, -1), None);
    }
}
