use log::error;
use wormseg_core::{Error, Point2i, PointSeq, SeqArena, SeqId, SeqReader, round_half_up};

/// Appends the grid points walking from `a` towards `b`.
///
/// Steps in unit Euclidean distance along the segment and rounds each
/// position half-up to the grid. The walk includes `a` but stops before `b`,
/// so consecutive polygon edges chain without repeating shared vertices.
/// Rounding collisions never produce consecutive duplicates. `a == b`
/// appends nothing.
pub fn rasterize_line(a: Point2i, b: Point2i, out: &mut PointSeq) {
    let delta = b - a;
    let d = delta.norm();
    if d == 0.0 {
        return;
    }
    let ihat = delta.x as f64 / d;
    let jhat = delta.y as f64 / d;

    let steps = round_half_up(d).max(0);
    let mut prev = a;
    for t in 0..steps {
        let tf = f64::from(t);
        let curr = Point2i::new(
            round_half_up(tf * ihat + f64::from(a.x)),
            round_half_up(tf * jhat + f64::from(a.y)),
        );
        if t == 0 || curr != prev {
            out.push(curr);
        }
        prev = curr;
    }
}

/// Like [`rasterize_line`] but closes the segment by appending `b` when the
/// walk did not already end on it.
pub fn rasterize_line_inclusive(a: Point2i, b: Point2i, out: &mut PointSeq) {
    let start = out.len();
    rasterize_line(a, b, out);
    let ends_on_b = out.len() > start && out.last() == Some(b);
    if !ends_on_b {
        out.push(b);
    }
}

/// Converts a closed polygon into a dense contour.
///
/// Each vertex is joined to the next with [`rasterize_line`]; the last vertex
/// joins back to the first.
pub fn polygon_to_contour(polygon: &[Point2i], out: &mut PointSeq) -> Result<(), Error> {
    if polygon.is_empty() {
        error!("polygon_to_contour: polygon has no vertices");
        return Err(Error::EmptyInput { what: "polygon" });
    }

    let mut curr = SeqReader::new(polygon);
    let mut next = SeqReader::new(polygon);
    next.advance_wrapping();

    for _ in 0..polygon.len() {
        if let (Some(a), Some(b)) = (curr.current(), next.current()) {
            rasterize_line(a, b, out);
        }
        curr.advance_wrapping();
        next.advance_wrapping();
    }
    Ok(())
}

/// Arena form of [`rasterize_line`]. The destination handle is resolved
/// before anything is written.
pub fn rasterize_line_in_arena(
    arena: &mut SeqArena,
    a: Point2i,
    b: Point2i,
    dst: SeqId,
) -> Result<(), Error> {
    rasterize_line(a, b, arena.get_mut(dst)?);
    Ok(())
}

/// Arena form of [`polygon_to_contour`]: reads the vertices from `polygon`,
/// appends the contour to `dst`.
pub fn polygon_to_contour_in_arena(
    arena: &mut SeqArena,
    polygon: SeqId,
    dst: SeqId,
) -> Result<(), Error> {
    let (polygon, dst) = arena.src_dst(polygon, dst)?;
    polygon_to_contour(polygon.as_slice(), dst)
}
