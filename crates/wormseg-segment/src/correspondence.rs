//! Perpendicular correspondence between a centerline and two side boundaries.
//!
//! For every centerline sample `c[j]` the local tangent is
//! `t = c[j+1] - c[j-1]`. On each side boundary we pick the point `p[k]`
//! minimizing `|dot(t, p[k] - c[j])|`, i.e. the point closest to the
//! perpendicular through `c[j]`.
//!
//! The search is local: only indices in `[last - r, last + r)` are scanned,
//! where `last` is the index chosen for the previous sample and
//! `r = 3 * (max(|A|, |B|) / |C| + 1)` absorbs the density difference between
//! the boundaries and the centerline. Chosen indices never move backwards
//! along a boundary, so segment `j + 1` always lies at or after segment `j`.
//!
//! The ends use boundary A's first and last points as the synthetic
//! neighbours of the first and last centerline samples.
use log::{debug, error};
use serde::{Deserialize, Serialize};
use wormseg_core::{Error, Point2i, PointSeq, Vec2i, clamp_window};

/// Search-window anchors carried from one centerline sample to the next.
///
/// A fresh frame starts from `CorrespondenceState::default()`; passing the
/// state returned by [`segment_sides`] continues the walk, e.g. when a
/// centerline is processed in chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorrespondenceState {
    pub last_a: usize,
    pub last_b: usize,
}

/// Matched side points, one per centerline sample.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentedSides {
    pub left: PointSeq,
    pub right: PointSeq,
    /// Index into boundary A chosen for each centerline sample.
    pub left_indices: Vec<usize>,
    /// Index into boundary B chosen for each centerline sample.
    pub right_indices: Vec<usize>,
}

/// Half-width of the per-sample search window.
pub fn search_radius(len_a: usize, len_b: usize, len_centerline: usize) -> usize {
    if len_centerline == 0 {
        return 0;
    }
    3 * (len_a.max(len_b) / len_centerline + 1)
}

/// Finds the index in `[start, end) ∩ [0, seq.len())` minimizing
/// `|dot(seq[k] - x, t)|`.
///
/// Ties keep the earliest index. Returns `None` when the clipped window is
/// empty.
pub fn find_perp_point(
    x: Point2i,
    t: Vec2i,
    seq: &[Point2i],
    start: isize,
    end: isize,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_adp = i128::MAX;
    for k in clamp_window(start, end, seq.len()) {
        let adp = (seq[k] - x).dot(t).abs();
        if adp < best_adp {
            best_adp = adp;
            best = Some(k);
        }
    }
    best
}

/// Locates, for each centerline sample, the matching point on each side.
///
/// `side_a` and `side_b` must be walked in the same direction as the
/// centerline (head to tail) but may have any length. The incoming `state`
/// is clamped into range before the walk starts. On success returns the
/// matched points together with the final state.
pub fn segment_sides(
    side_a: &[Point2i],
    side_b: &[Point2i],
    centerline: &[Point2i],
    state: CorrespondenceState,
) -> Result<(SegmentedSides, CorrespondenceState), Error> {
    if centerline.is_empty() {
        error!("segment_sides: centerline is empty");
        return Err(Error::EmptyInput { what: "centerline" });
    }
    if side_a.is_empty() || side_b.is_empty() {
        error!("segment_sides: boundary side is empty");
        return Err(Error::EmptyInput {
            what: "boundary side",
        });
    }

    let radius = search_radius(side_a.len(), side_b.len(), centerline.len()) as isize;
    let mut last_a = state.last_a.min(side_a.len() - 1);
    let mut last_b = state.last_b.min(side_b.len() - 1);
    debug!(
        "segment_sides: |A|={} |B|={} |C|={} radius={} start=({}, {})",
        side_a.len(),
        side_b.len(),
        centerline.len(),
        radius,
        last_a,
        last_b
    );

    let n = centerline.len();
    let head = side_a[0];
    let tail = side_a[side_a.len() - 1];

    let mut out = SegmentedSides {
        left: PointSeq::with_capacity(n),
        right: PointSeq::with_capacity(n),
        left_indices: Vec::with_capacity(n),
        right_indices: Vec::with_capacity(n),
    };

    for j in 0..n {
        let backward = if j == 0 { head } else { centerline[j - 1] };
        let forward = if j + 1 == n { tail } else { centerline[j + 1] };
        let current = centerline[j];
        let tangent = forward - backward;

        last_a = advance_anchor(current, tangent, side_a, last_a, radius)?;
        last_b = advance_anchor(current, tangent, side_b, last_b, radius)?;

        out.left.push(side_a[last_a]);
        out.right.push(side_b[last_b]);
        out.left_indices.push(last_a);
        out.right_indices.push(last_b);
    }

    Ok((out, CorrespondenceState { last_a, last_b }))
}

fn advance_anchor(
    current: Point2i,
    tangent: Vec2i,
    side: &[Point2i],
    last: usize,
    radius: isize,
) -> Result<usize, Error> {
    let anchor = last as isize;
    let found = find_perp_point(current, tangent, side, anchor - radius, anchor + radius)
        .ok_or(Error::IndexOutOfRange {
            index: anchor,
            len: side.len(),
        })?;
    // Never step back along the boundary.
    Ok(found.max(last))
}

#[cfg(test)]
mod tests {
    use super::{CorrespondenceState, find_perp_point, search_radius, segment_sides};
    use wormseg_core::{Error, Point2i, Vec2i};

    fn hline(y: i32, x0: i32, x1: i32) -> Vec<Point2i> {
        (x0..=x1).map(|x| Point2i::new(x, y)).collect()
    }

    fn non_decreasing(v: &[usize]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn radius_scales_with_density() {
        assert_eq!(search_radius(100, 80, 20), 18);
        assert_eq!(search_radius(10, 10, 20), 3);
        assert_eq!(search_radius(5, 5, 0), 0);
    }

    #[test]
    fn perp_point_prefers_earliest_tie_and_respects_window() {
        // With a vertical tangent, |dot| only depends on y.
        let seq = vec![
            Point2i::new(0, 2),
            Point2i::new(0, 1),
            Point2i::new(5, 1),
            Point2i::new(0, 0),
            Point2i::new(9, 0),
        ];
        let x = Point2i::new(0, 0);
        let t = Vec2i::new(0, 1);
        assert_eq!(find_perp_point(x, t, &seq, -10, 10), Some(3));
        assert_eq!(find_perp_point(x, t, &seq, 0, 3), Some(1));
        assert_eq!(find_perp_point(x, t, &seq, 4, 99), Some(4));
        assert_eq!(find_perp_point(x, t, &seq, 5, 9), None);
    }

    #[test]
    fn straight_body_matches_straight_across() {
        // Head and tail sit on the midline so the end tangents stay horizontal.
        let mut side_a = vec![Point2i::new(-4, 5)];
        side_a.extend(hline(0, 0, 40));
        side_a.push(Point2i::new(44, 5));
        let side_b = hline(10, 0, 40);
        let centerline: Vec<Point2i> = (0..=10).map(|i| Point2i::new(i * 4, 5)).collect();

        let (sides, state) =
            segment_sides(&side_a, &side_b, &centerline, CorrespondenceState::default())
                .expect("valid input");

        assert_eq!(sides.left.len(), centerline.len());
        assert_eq!(sides.right.len(), centerline.len());
        for (j, c) in centerline.iter().enumerate() {
            assert_eq!(sides.left.as_slice()[j], Point2i::new(c.x, 0));
            assert_eq!(sides.right.as_slice()[j], Point2i::new(c.x, 10));
            assert_eq!(sides.left_indices[j], c.x as usize + 1);
            assert_eq!(sides.right_indices[j], c.x as usize);
        }
        assert_eq!(state, CorrespondenceState { last_a: 41, last_b: 40 });
    }

    #[test]
    fn indices_never_move_backwards() {
        // A wiggly centerline makes the locally best point sometimes lie
        // behind the previous pick.
        let side_a: Vec<Point2i> = (0..60)
            .map(|i| Point2i::new(i, if i % 7 < 3 { 0 } else { 2 }))
            .collect();
        let side_b: Vec<Point2i> = (0..45)
            .map(|i| Point2i::new(i * 4 / 3, 14 + (i % 5)))
            .collect();
        let centerline: Vec<Point2i> = (0..20)
            .map(|i| Point2i::new(i * 3 - (i % 3) * 2, 7 + (i % 4)))
            .collect();

        let (sides, _) =
            segment_sides(&side_a, &side_b, &centerline, CorrespondenceState::default())
                .expect("valid input");
        assert!(non_decreasing(&sides.left_indices));
        assert!(non_decreasing(&sides.right_indices));
        for (j, &k) in sides.left_indices.iter().enumerate() {
            assert_eq!(sides.left.as_slice()[j], side_a[k]);
        }
    }

    #[test]
    fn backward_best_is_clamped_to_previous_pick() {
        // Centerline runs right then doubles back; the perpendicular for the
        // last sample lies behind the previous pick on both sides.
        let mut side_a = vec![Point2i::new(0, 2)];
        side_a.extend(hline(0, 1, 8));
        side_a.push(Point2i::new(9, 2));
        let side_b = hline(4, 0, 9);
        let centerline = vec![Point2i::new(2, 2), Point2i::new(6, 2), Point2i::new(3, 2)];

        let (sides, state) =
            segment_sides(&side_a, &side_b, &centerline, CorrespondenceState::default())
                .expect("valid input");
        assert_eq!(sides.left_indices, vec![2, 6, 6]);
        assert_eq!(sides.right_indices, vec![2, 6, 6]);
        assert_eq!(state, CorrespondenceState { last_a: 6, last_b: 6 });
    }

    #[test]
    fn single_sample_uses_boundary_ends_as_neighbours() {
        let side_a = hline(0, 0, 8);
        let side_b = hline(6, 0, 8);
        let centerline = vec![Point2i::new(3, 3)];

        let (sides, _) =
            segment_sides(&side_a, &side_b, &centerline, CorrespondenceState::default())
                .expect("valid input");
        // Tangent = A.last - A.first = (8, 0); radius = 3 * (9 / 1 + 1) = 30.
        assert_eq!(sides.left.as_slice(), &[Point2i::new(3, 0)]);
        assert_eq!(sides.right.as_slice(), &[Point2i::new(3, 6)]);
    }

    #[test]
    fn incoming_state_is_clamped_and_resumes_walk() {
        let side_a = hline(3, 0, 20);
        let side_b = hline(6, 0, 20);
        let centerline: Vec<Point2i> = (0..=20).step_by(2).map(|x| Point2i::new(x, 3)).collect();

        let (first, mid) =
            segment_sides(&side_a, &side_b, &centerline[..5], CorrespondenceState::default())
                .expect("valid input");
        assert_eq!(first.left_indices, vec![0, 2, 4, 6, 8]);

        let (rest, _) =
            segment_sides(&side_a, &side_b, &centerline[5..], mid).expect("valid input");
        assert!(rest.left_indices.iter().all(|&k| k >= mid.last_a));

        let huge = CorrespondenceState {
            last_a: 1000,
            last_b: 1000,
        };
        let (clamped, _) =
            segment_sides(&side_a, &side_b, &centerline, huge).expect("valid input");
        assert!(clamped.left_indices.iter().all(|&k| k == 20));
    }

    #[test]
    fn far_apart_coordinates_are_compared_exactly() {
        // Offsets and tangent span more than the i32 range.
        let side = vec![Point2i::new(-2_000_000_000, 0), Point2i::new(0, 0)];
        let centerline = [Point2i::new(2_000_000_000, 2)];
        let (sides, state) = segment_sides(
            &side,
            &side,
            &centerline,
            CorrespondenceState::default(),
        )
        .expect("valid input");
        assert_eq!(sides.left_indices, vec![1]);
        assert_eq!(sides.right_indices, vec![1]);
        assert_eq!(state, CorrespondenceState { last_a: 1, last_b: 1 });

        let t = Point2i::new(i32::MAX, 0) - Point2i::new(i32::MIN, 0);
        let seq = [Point2i::new(i32::MIN, i32::MIN), Point2i::new(i32::MAX, i32::MAX)];
        assert_eq!(
            find_perp_point(Point2i::new(i32::MAX, 0), t, &seq, 0, 2),
            Some(1)
        );
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let side = hline(0, 0, 3);
        let st = CorrespondenceState::default();
        assert_eq!(
            segment_sides(&side, &side, &[], st),
            Err(Error::EmptyInput { what: "centerline" })
        );
        assert!(matches!(
            segment_sides(&[], &side, &side, st),
            Err(Error::EmptyInput { .. })
        ));
        assert!(matches!(
            segment_sides(&side, &[], &side, st),
            Err(Error::EmptyInput { .. })
        ));
    }
}
