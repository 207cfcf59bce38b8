//! Representative point selection
//!
//! Picks at most `max_points` points out of a grouping:
//!
//! 1. The **anchor** is the point with the highest similarity over all
//!    groups (first one in group order on ties). It always comes first.
//! 2. The rest of the budget is spread evenly over the groups; each group
//!    contributes its best-scoring members, anchor excluded.
//! 3. Unused budget is filled with the best of the members no group
//!    contributed, across all groups.
//!
//! Sorting is stable everywhere, so equally scored points keep their
//! sampling order and the selection is fully deterministic.

use crate::grouping::ColorGroups;
use crate::similarity::AnalyzePoint;
use tracing::debug;

/// Number of points each group may contribute in the first pass.
///
/// `max(1, (max_points - 1) / (group_count - 1))` for two or more groups.
/// With a single group the whole remaining budget goes to it, which avoids
/// dividing by zero.
pub fn per_group_budget(max_points: usize, group_count: usize) -> usize {
    let remaining = max_points.saturating_sub(1);
    if group_count <= 1 {
        remaining
    } else {
        (remaining / (group_count - 1)).max(1)
    }
}

/// Locate the anchor as `(group index, member index)`.
fn find_anchor(groups: &ColorGroups) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), u8)> = None;
    for (gi, group) in groups.groups().iter().enumerate() {
        for (mi, p) in group.points().iter().enumerate() {
            match best {
                Some((_, sim)) if sim >= p.similarity => {}
                _ => best = Some(((gi, mi), p.similarity)),
            }
        }
    }
    best.map(|(idx, _)| idx)
}

fn sort_by_similarity(points: &mut [AnalyzePoint]) {
    points.sort_by(|a, b| b.similarity.cmp(&a.similarity));
}

/// Select up to `max_points` representative points from `groups`.
///
/// The first element, when any, is the global similarity maximum. No input
/// point appears twice. Returns an empty list for an empty grouping or a
/// zero budget.
pub fn select_points(groups: &ColorGroups, max_points: usize) -> Vec<AnalyzePoint> {
    let Some((anchor_group, anchor_member)) = find_anchor(groups) else {
        return Vec::new();
    };
    if max_points == 0 {
        return Vec::new();
    }

    let anchor = groups.groups()[anchor_group].points()[anchor_member];
    let per_group = per_group_budget(max_points, groups.len());

    let mut selected = Vec::with_capacity(max_points);
    selected.push(anchor);
    let mut leftovers = Vec::new();

    for (gi, group) in groups.groups().iter().enumerate() {
        let mut members: Vec<AnalyzePoint> = group
            .points()
            .iter()
            .enumerate()
            .filter(|&(mi, _)| (gi, mi) != (anchor_group, anchor_member))
            .map(|(_, p)| *p)
            .collect();
        sort_by_similarity(&mut members);

        let take = per_group.min(members.len());
        leftovers.extend_from_slice(&members[take..]);
        members.truncate(take);
        selected.extend(members);
    }

    if selected.len() < max_points {
        sort_by_similarity(&mut leftovers);
        let need = max_points - selected.len();
        selected.extend(leftovers.into_iter().take(need));
    }
    selected.truncate(max_points);

    debug!(
        groups = groups.len(),
        per_group,
        anchor_similarity = anchor.similarity,
        selected = selected.len(),
        "selected representative points"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorpick_core::color::Rgb;

    fn pt(x: u32, sim: u8, r: u8) -> AnalyzePoint {
        AnalyzePoint::new(x, 0, sim, Rgb::new(r, 0, 0))
    }

    #[test]
    fn test_per_group_budget() {
        assert_eq!(per_group_budget(5, 3), 2);
        assert_eq!(per_group_budget(5, 6), 1);
        assert_eq!(per_group_budget(3, 10), 1);
        assert_eq!(per_group_budget(7, 1), 6);
        assert_eq!(per_group_budget(7, 0), 6);
        assert_eq!(per_group_budget(1, 1), 0);
    }

    #[test]
    fn test_empty_groups() {
        let groups = ColorGroups::new(10);
        assert!(select_points(&groups, 5).is_empty());
    }

    #[test]
    fn test_zero_budget() {
        let groups = ColorGroups::from_points(0, [pt(0, 8, 0)]);
        assert!(select_points(&groups, 0).is_empty());
    }

    #[test]
    fn test_anchor_tie_breaks_on_first() {
        let groups = ColorGroups::from_points(0, [pt(0, 3, 0), pt(1, 5, 200), pt(2, 5, 0)]);
        let sel = select_points(&groups, 1);
        assert_eq!(sel.len(), 1);
        // Group order is [x=0, x=2], [x=1]; x=2 comes first among the fives
        assert_eq!(sel[0].x, 2);
    }

    #[test]
    fn test_single_group_uses_whole_budget() {
        let groups = ColorGroups::from_points(
            10,
            [pt(0, 2, 0), pt(1, 8, 0), pt(2, 5, 0), pt(3, 7, 0), pt(4, 1, 0)],
        );
        let sel = select_points(&groups, 4);
        let xs: Vec<u32> = sel.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_per_group_then_fill() {
        // Three groups of colors 0, 100, 200 (tolerance 10 -> radius 20)
        let groups = ColorGroups::from_points(
            10,
            [
                pt(0, 8, 0),
                pt(1, 6, 0),
                pt(2, 5, 0),
                pt(3, 4, 100),
                pt(4, 7, 100),
                pt(5, 3, 200),
            ],
        );
        // per_group = max(1, 5 / 2) = 2
        let sel = select_points(&groups, 6);
        let xs: Vec<u32> = sel.iter().map(|p| p.x).collect();
        // anchor 0; group0 -> 1, 2; group1 -> 4, 3; group2 -> 5
        assert_eq!(xs, vec![0, 1, 2, 4, 3, 5]);
    }

    #[test]
    fn test_fill_from_leftovers_sorted() {
        let groups = ColorGroups::from_points(
            10,
            [
                pt(0, 8, 0),
                pt(1, 2, 0),
                pt(2, 6, 0),
                pt(3, 7, 0),
                pt(4, 1, 100),
            ],
        );
        // per_group = max(1, 3 / 1) = 3: group0 gives 3, 2, 1; group1 gives 4
        let sel = select_points(&groups, 4);
        let xs: Vec<u32> = sel.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 3, 2, 1]);

        let groups = ColorGroups::from_points(
            10,
            [
                pt(0, 8, 0),
                pt(1, 2, 0),
                pt(2, 6, 0),
                pt(3, 7, 100),
                pt(4, 1, 100),
                pt(5, 5, 200),
            ],
        );
        // per_group = max(1, 4 / 2) = 2 -> anchor + [2, 1] + [3, 4] + [5] = 6 > 5
        let sel = select_points(&groups, 5);
        let xs: Vec<u32> = sel.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 2, 1, 3, 4]);
    }

    #[test]
    fn test_leftovers_fill_when_groups_run_short() {
        let groups = ColorGroups::from_points(
            10,
            [
                pt(0, 8, 0),
                pt(1, 3, 0),
                pt(2, 6, 0),
                pt(3, 4, 0),
                pt(4, 2, 100),
                pt(5, 5, 200),
            ],
        );
        // per_group = max(1, 6 / 2) = 3; group0 gives 2, 3, 1 -> all used
        let sel = select_points(&groups, 7);
        assert_eq!(sel.len(), 6);

        let groups = ColorGroups::from_points(
            10,
            [
                pt(0, 8, 0),
                pt(1, 3, 0),
                pt(2, 6, 0),
                pt(3, 4, 0),
                pt(4, 7, 0),
                pt(5, 2, 100),
                pt(6, 1, 200),
                pt(7, 5, 200),
            ],
        );
        // per_group = max(1, 5 / 2) = 2
        // group0 -> 4, 2 (leftover 3, 1); group1 -> 5; group2 -> 7, 6
        // 6 selected, fill 0 more at budget 6
        let sel = select_points(&groups, 6);
        let xs: Vec<u32> = sel.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 4, 2, 5, 7, 6]);

        // Budget 8: per_group = 3, first pass yields 7, leftover x=1 fills
        let sel = select_points(&groups, 8);
        let xs: Vec<u32> = sel.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 4, 2, 3, 5, 7, 6, 1]);
    }
}
