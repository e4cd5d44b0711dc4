use log::error;
use wormseg_core::{Error, Point2i, PointSeq, SeqArena, SeqId};

/// Builds a centerline from two boundaries walked in the same direction.
///
/// Element `i` is the integer midpoint of `side_a[i]` and `side_b[i]`
/// (truncating division). Both sides must already have the same length,
/// typically by resampling them to a common sample count.
pub fn build_centerline(
    side_a: &[Point2i],
    side_b: &[Point2i],
    out: &mut PointSeq,
) -> Result<(), Error> {
    if side_a.is_empty() || side_b.is_empty() {
        error!("build_centerline: empty boundary");
        return Err(Error::EmptyInput {
            what: "centerline boundary",
        });
    }
    if side_a.len() != side_b.len() {
        error!(
            "build_centerline: boundary lengths differ ({} vs {})",
            side_a.len(),
            side_b.len()
        );
        return Err(Error::SizeMismatch {
            expected: side_a.len(),
            actual: side_b.len(),
        });
    }

    out.extend(side_a.iter().zip(side_b).map(|(&a, &b)| a.midpoint(b)));
    Ok(())
}

/// Arena form of [`build_centerline`].
pub fn build_centerline_in_arena(
    arena: &mut SeqArena,
    side_a: SeqId,
    side_b: SeqId,
    dst: SeqId,
) -> Result<(), Error> {
    let (a, b, out) = arena.src2_dst(side_a, side_b, dst)?;
    build_centerline(a.as_slice(), b.as_slice(), out)
}
