//! Synthetic test images
//!
//! The regression tests build their inputs in memory so that expected
//! selections can be reasoned about pixel by pixel.

use crate::error::{TestError, TestResult};
use colorpick_core::{Pix, color};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Image of one uniform RGB color.
pub fn solid(width: u32, height: u32, rgb: (u8, u8, u8)) -> TestResult<Pix> {
    let pixel = color::compose_rgb(rgb.0, rgb.1, rgb.2);
    Pix::new_filled(width, height, pixel).map_err(|e| TestError::Fixture {
        name: "solid".into(),
        message: e.to_string(),
    })
}

/// Image whose pixel at `(x, y)` is `f(x, y)`.
pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> u32) -> TestResult<Pix> {
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            data.push(f(x, y));
        }
    }
    Ok(Pix::from_data(width, height, data)?)
}

/// Image split into vertical stripes of equal width, one color each.
///
/// The last stripe absorbs any remainder columns.
pub fn stripes(width: u32, height: u32, colors: &[(u8, u8, u8)]) -> TestResult<Pix> {
    if colors.is_empty() {
        return Err(TestError::Fixture {
            name: "stripes".into(),
            message: "at least one color required".into(),
        });
    }
    let n = colors.len() as u32;
    let stripe = (width / n).max(1);
    from_fn(width, height, |x, _| {
        let idx = ((x / stripe).min(n - 1)) as usize;
        let (r, g, b) = colors[idx];
        color::compose_rgb(r, g, b)
    })
}

/// Image of uniformly random colors, reproducible from `seed`.
pub fn random(width: u32, height: u32, seed: u64) -> TestResult<Pix> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for _ in 0..(width as usize) * (height as usize) {
        let r: u8 = rng.random();
        let g: u8 = rng.random();
        let b: u8 = rng.random();
        data.push(color::compose_rgb(r, g, b));
    }
    Ok(Pix::from_data(width, height, data)?)
}

/// Image of random colors drawn from a small palette, reproducible from
/// `seed`.
pub fn random_palette(
    width: u32,
    height: u32,
    palette: &[(u8, u8, u8)],
    seed: u64,
) -> TestResult<Pix> {
    if palette.is_empty() {
        return Err(TestError::Fixture {
            name: "random_palette".into(),
            message: "empty palette".into(),
        });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for _ in 0..(width as usize) * (height as usize) {
        let (r, g, b) = palette[rng.random_range(0..palette.len())];
        data.push(color::compose_rgb(r, g, b));
    }
    Ok(Pix::from_data(width, height, data)?)
}
