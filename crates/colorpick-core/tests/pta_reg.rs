//! Point array and region grid regression test
//!
//! Covers the coordinate plumbing shared by area analysis and auto-pick:
//! point arrays, region normalization, grid walks and image clipping, and
//! the bounds checks of the pixel source contract.

use colorpick_core::{PixelSource, Point, Pta, Region, color};
use colorpick_test::{RegParams, images};

#[test]
fn pta_reg() {
    let mut rp = RegParams::new("pta");

    // --- Test 1: Pta creation and access ---
    let mut pta = Pta::new();
    pta.push(10, 20);
    pta.push(-30, 40);
    pta.push(50, -60);
    rp.compare_values(3.0, pta.len() as f64, 0.0);
    let p = pta.get(1).unwrap();
    rp.compare_values(-30.0, p.x as f64, 0.0);
    rp.compare_values(40.0, p.y as f64, 0.0);
    rp.compare_true(pta.get(3).is_none());

    // --- Test 2: Scale then translate, the auto-pick placement ---
    let unit: Pta = [(-1, 0), (0, 1), (1, 1)].into_iter().collect();
    let placed = unit.scale(5).translate(50, 50);
    let got: Vec<Point> = placed.iter().collect();
    rp.compare_true(got == vec![Point::new(45, 50), Point::new(50, 55), Point::new(55, 55)]);

    // Saturating arithmetic at the extremes
    let far = unit.scale(i32::MAX);
    rp.compare_values(i32::MIN as f64 + 1.0, far.get(0).unwrap().x as f64, 0.0);

    // --- Test 3: Retain keeps order ---
    let mut pta = placed.clone();
    pta.retain(|p| p.y > 50);
    rp.compare_values(2.0, pta.len() as f64, 0.0);
    rp.compare_values(50.0, pta.get(0).unwrap().x as f64, 0.0);

    // --- Test 4: Region normalization and grid walk ---
    let region = Region::from_corners(9, 7, 3, 1);
    rp.compare_values(3.0, region.min_x() as f64, 0.0);
    rp.compare_values(1.0, region.min_y() as f64, 0.0);
    rp.compare_values(7.0, region.width() as f64, 0.0);
    let grid: Vec<(i32, i32)> = region.grid(3).collect();
    rp.compare_values(9.0, grid.len() as f64, 0.0);
    rp.compare_true(grid[0] == (3, 1) && grid[1] == (3, 4) && grid[3] == (6, 1));

    // --- Test 5: clipping to an image keeps the grid phase ---
    let wide = Region::from_corners(-100_000, -100_001, 7, 5);
    let clipped = wide.clip_to_image(3, 6, 4).unwrap();
    let cells: Vec<(i32, i32)> = clipped.grid(3).collect();
    // -100000 = -33334 * 3 + 2 and -100001 = -33334 * 3 + 1
    rp.compare_true(cells == vec![(2, 1), (5, 1)]);
    rp.compare_true(Region::from_corners(6, 0, 9, 3).clip_to_image(1, 6, 4).is_none());

    // --- Test 6: Pixel source bounds ---
    let pix = images::from_fn(6, 4, |x, y| color::compose_rgb(x as u8, y as u8, 0)).unwrap();
    rp.compare_true(pix.color_at_checked(-1, 0).is_none());
    rp.compare_true(pix.color_at_checked(6, 0).is_none());
    rp.compare_true(pix.color_at_checked(0, 4).is_none());
    rp.compare_true(pix.color_at_checked(5, 3) == Some(color::compose_rgb(5, 3, 0)));
    let by_ref = &pix;
    rp.compare_values(6.0, PixelSource::width(&by_ref) as f64, 0.0);

    assert!(rp.cleanup());
}
