use log::error;
use wormseg_core::{Error, Point2i, PointSeq};

/// Returns the point of `boundary` closest to `query` (squared distance).
///
/// Ties resolve to the last minimal point in scan order.
pub fn nearest_point(query: Point2i, boundary: &[Point2i]) -> Result<Point2i, Error> {
    let Some(&first) = boundary.first() else {
        return Err(Error::EmptyInput { what: "boundary" });
    };

    let mut best = first;
    let mut best_d = query.sq_dist(first);
    for &p in boundary {
        let d = query.sq_dist(p);
        if d <= best_d {
            best_d = d;
            best = p;
        }
    }
    Ok(best)
}

/// Removes consecutive repeats in place: `(1,1),(1,1),(1,2)` becomes
/// `(1,1),(1,2)` while `(1,1),(1,2),(1,1)` is kept as is.
pub fn remove_sequential_duplicates(seq: &mut PointSeq) {
    if seq.len() < 2 {
        return;
    }
    let mut kept: Vec<Point2i> = Vec::with_capacity(seq.len());
    for &p in seq.iter() {
        if kept.last() != Some(&p) {
            kept.push(p);
        }
    }
    seq.clear();
    seq.extend_from_slice(&kept);
}

/// Coordinate-wise median of a point set.
///
/// Sorts a copy by y and reads the element at `len / 2`, then sorts by x and
/// reads the element at the same position. This is not a true 2D median.
/// The input order is left untouched.
pub fn median_point(points: &[Point2i]) -> Result<Point2i, Error> {
    if points.is_empty() {
        error!("median_point: sequence has no elements");
        return Err(Error::EmptyInput {
            what: "median points",
        });
    }

    let mid = points.len() / 2;
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.y);
    let y = sorted[mid].y;
    sorted.sort_by_key(|p| p.x);
    let x = sorted[mid].x;
    Ok(Point2i::new(x, y))
}

/// Index of the first point differing from `a`, scanning `seq` from `start`
/// in steps of `step` (`+1` or `-1`).
///
/// Returns `None` when every visited point equals `a` or `start` is out of
/// range.
pub fn first_not_matching(a: Point2i, seq: &[Point2i], start: usize, step: isize) -> Option<usize> {
    let mut i = start as isize;
    while i >= 0 && (i as usize) < seq.len() {
        if seq[i as usize] != a {
            return Some(i as usize);
        }
        if step == 0 {
            return None;
        }
        i += step;
    }
    None
}

/// Index of the contour with the most points; the first wins on ties.
pub fn longest_contour<S: AsRef<[Point2i]>>(contours: &[S]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (i, c) in contours.iter().enumerate() {
        let len = c.as_ref().len();
        match best {
            Some((_, best_len)) if len <= best_len => {}
            _ => best = Some((i, len)),
        }
    }
    best.map(|(i, _)| i)
}
