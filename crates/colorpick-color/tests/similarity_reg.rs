//! Neighbor similarity regression test
//!
//! Checks score bounds on random images, the edge and spacing behavior on
//! uniform images, and tolerance monotonicity.

use colorpick_color::{MAX_SIMILARITY, neighbor_similarity};
use colorpick_core::PixelSource;
use colorpick_test::{RegParams, images};

#[test]
fn similarity_reg() {
    let mut rp = RegParams::new("similarity");

    // --- Test 1: bounds on random images, every pixel, several settings ---
    let pix = images::random(24, 17, 11).unwrap();
    let mut in_bounds = true;
    for &(spacing, tolerance) in &[(1u32, 0u32), (1, 40), (2, 128), (5, 255), (30, 255)] {
        for y in 0..pix.height() {
            for x in 0..pix.width() {
                let s = neighbor_similarity(&pix, x, y, spacing, tolerance);
                in_bounds &= s <= MAX_SIMILARITY;
            }
        }
    }
    rp.compare_true(in_bounds);

    // --- Test 2: full tolerance counts exactly the in-bounds neighbors ---
    let w = pix.width();
    let h = pix.height();
    let corner = neighbor_similarity(&pix, 0, 0, 1, 255);
    let edge = neighbor_similarity(&pix, 5, 0, 1, 255);
    let inner = neighbor_similarity(&pix, 5, 5, 1, 255);
    let far = neighbor_similarity(&pix, w / 2, h / 2, w, 255);
    rp.compare_values(3.0, corner as f64, 0.0);
    rp.compare_values(5.0, edge as f64, 0.0);
    rp.compare_values(8.0, inner as f64, 0.0);
    rp.compare_values(0.0, far as f64, 0.0);

    // --- Test 3: larger tolerance never lowers the score ---
    let mut monotone = true;
    for y in (0..h).step_by(3) {
        for x in (0..w).step_by(3) {
            let mut prev = 0u8;
            for tol in [0u32, 16, 64, 128, 255] {
                let s = neighbor_similarity(&pix, x, y, 2, tol);
                monotone &= s >= prev;
                prev = s;
            }
        }
    }
    rp.compare_true(monotone);

    // --- Test 4: uniform image is fully similar away from the edges ---
    let solid = images::solid(9, 9, (12, 34, 56)).unwrap();
    rp.compare_values(8.0, neighbor_similarity(&solid, 4, 4, 4, 0) as f64, 0.0);
    rp.compare_values(0.0, neighbor_similarity(&solid, 4, 4, 5, 255) as f64, 0.0);
    rp.compare_values(3.0, neighbor_similarity(&solid, 8, 8, 2, 0) as f64, 0.0);

    // --- Test 5: the source contract sees the same extents ---
    rp.compare_values(9.0, PixelSource::width(&solid) as f64, 0.0);
    rp.compare_values(9.0, PixelSource::height(&solid) as f64, 0.0);

    assert!(rp.cleanup());
}
