//! Color grouping regression test
//!
//! First-fit grouping must be deterministic for a given input order and
//! must stay sensitive to that order.

use colorpick_color::{AnalyzePoint, ColorGroups};
use colorpick_core::color::Rgb;
use colorpick_test::RegParams;

fn pt(x: u32, r: u8) -> AnalyzePoint {
    AnalyzePoint::new(x, 0, 1, Rgb::new(r, r, r))
}

fn assignment(groups: &ColorGroups) -> Vec<Vec<u32>> {
    groups
        .groups()
        .iter()
        .map(|g| g.points().iter().map(|p| p.x).collect())
        .collect()
}

#[test]
fn grouping_reg() {
    let mut rp = RegParams::new("grouping");

    // tolerance 10 -> membership radius 20
    let input = vec![pt(0, 100), pt(1, 115), pt(2, 130), pt(3, 145), pt(4, 100)];

    // --- Test 1: determinism on identical input ---
    let a = ColorGroups::from_points(10, input.clone());
    let b = ColorGroups::from_points(10, input.clone());
    rp.compare_true(a == b);
    rp.compare_true(assignment(&a) == vec![vec![0, 1, 4], vec![2, 3]]);

    // --- Test 2: order dependence is preserved ---
    // Offering 115 first makes it the reference, so 130 joins it as well
    let permuted = vec![pt(1, 115), pt(0, 100), pt(2, 130), pt(3, 145), pt(4, 100)];
    let c = ColorGroups::from_points(10, permuted);
    rp.compare_true(assignment(&c) == vec![vec![1, 0, 2, 4], vec![3]]);
    rp.compare_true(assignment(&c) != assignment(&a));
    rp.compare_values(a.point_count() as f64, c.point_count() as f64, 0.0);

    // --- Test 3: reversed order ---
    let reversed: Vec<_> = input.iter().rev().copied().collect();
    let d = ColorGroups::from_points(10, reversed);
    rp.compare_true(assignment(&d) == vec![vec![4, 1, 0], vec![3, 2]]);

    // --- Test 4: every member is within radius of its group reference ---
    let mut ok = true;
    for groups in [&a, &c, &d] {
        for g in groups.groups() {
            for p in g.points() {
                ok &= g.reference().within_tolerance(p.rgb, groups.match_tolerance());
            }
        }
    }
    rp.compare_true(ok);

    // --- Test 5: zero tolerance splits every distinct color ---
    let e = ColorGroups::from_points(0, input);
    rp.compare_values(4.0, e.len() as f64, 0.0);

    assert!(rp.cleanup());
}
