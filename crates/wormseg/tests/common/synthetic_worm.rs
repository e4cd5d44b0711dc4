use wormseg::{Point2i, PointSeq, contour::polygon_to_contour};

/// Closed boundary of a horizontal capsule with chamfered ends, shifted by
/// `(ox, oy)`. Returns the boundary with the indices of its left and right
/// tips.
pub fn capsule(ox: i32, oy: i32, length: i32, half_width: i32) -> (Vec<Point2i>, usize, usize) {
    assert!(length > 2 * half_width, "capsule must be longer than wide");
    let w = half_width;
    let polygon = [
        Point2i::new(ox, oy + w),
        Point2i::new(ox + w, oy),
        Point2i::new(ox + length - w, oy),
        Point2i::new(ox + length, oy + w),
        Point2i::new(ox + length - w, oy + 2 * w),
        Point2i::new(ox + w, oy + 2 * w),
    ];
    let mut contour = PointSeq::new();
    polygon_to_contour(&polygon, &mut contour).expect("non-empty polygon");

    let head = index_of(&contour, polygon[0]);
    let tail = index_of(&contour, polygon[3]);
    (contour.into_vec(), head, tail)
}

pub fn index_of(contour: &PointSeq, p: Point2i) -> usize {
    contour
        .iter()
        .position(|&q| q == p)
        .expect("polygon vertex lies on its contour")
}
