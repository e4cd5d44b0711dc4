use log::error;
use wormseg_core::{Error, Point2i, PointSeq, SeqReader};

/// Direction in which a closed boundary is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Forward,
    Backward,
}

/// Appends the boundary points from index `from` to index `to` (both
/// included), stepping in `walk` direction and wrapping around the closed
/// contour.
pub fn walk_boundary(
    boundary: &[Point2i],
    from: usize,
    to: usize,
    walk: Walk,
    out: &mut PointSeq,
) -> Result<(), Error> {
    check_index(boundary, from)?;
    check_index(boundary, to)?;

    let n = boundary.len();
    match walk {
        Walk::Forward => {
            let mut reader = SeqReader::new(boundary);
            reader.set_pos(from)?;
            loop {
                if let Some(p) = reader.current() {
                    out.push(p);
                }
                if reader.pos() == to {
                    break;
                }
                reader.advance_wrapping();
            }
        }
        Walk::Backward => {
            let mut i = from;
            loop {
                out.push(boundary[i]);
                if i == to {
                    break;
                }
                i = if i == 0 { n - 1 } else { i - 1 };
            }
        }
    }
    Ok(())
}

/// Splits a closed boundary into its two sides between head and tail.
///
/// Side A walks forward from `head` to `tail`, side B walks backward; both
/// start at the head and end at the tail, so their indices run in the same
/// direction along the body.
pub fn split_boundary(
    boundary: &[Point2i],
    head: usize,
    tail: usize,
) -> Result<(PointSeq, PointSeq), Error> {
    check_head_tail(boundary, head, tail)?;

    let mut side_a = PointSeq::new();
    let mut side_b = PointSeq::new();
    walk_boundary(boundary, head, tail, Walk::Forward, &mut side_a)?;
    walk_boundary(boundary, head, tail, Walk::Backward, &mut side_b)?;
    Ok((side_a, side_b))
}

/// Validates a head/tail pair against a closed boundary.
pub(crate) fn check_head_tail(
    boundary: &[Point2i],
    head: usize,
    tail: usize,
) -> Result<(), Error> {
    if boundary.is_empty() {
        error!("boundary is empty");
        return Err(Error::EmptyInput { what: "boundary" });
    }
    if head == tail {
        error!("head and tail share boundary index {head}");
        return Err(Error::InvalidParameter {
            name: "tail",
            reason: "head and tail must be distinct boundary indices".to_string(),
        });
    }
    check_index(boundary, head)?;
    check_index(boundary, tail)
}

fn check_index(boundary: &[Point2i], i: usize) -> Result<(), Error> {
    if i >= boundary.len() {
        error!("boundary index {i} out of range for {} points", boundary.len());
        return Err(Error::IndexOutOfRange {
            index: i as isize,
            len: boundary.len(),
        });
    }
    Ok(())
}
