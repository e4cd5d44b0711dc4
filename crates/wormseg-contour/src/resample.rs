use log::error;
use wormseg_core::{Error, Point2i, PointSeq, SeqArena, SeqId};

/// Source indices picked when decimating `len` points to `num_samples`.
///
/// Sample `i` reads index `round(i * (len - 1) / (num_samples - 1))`, with
/// ties rounded to even. A single sample reads index 0. The first sample is
/// always index 0; the last lands on `len - 1`.
pub fn resample_indices(len: usize, num_samples: usize) -> Result<Vec<usize>, Error> {
    if len == 0 {
        error!("resample: source sequence is empty");
        return Err(Error::EmptyInput {
            what: "resample source",
        });
    }
    if num_samples == 0 {
        error!("resample: requested zero samples");
        return Err(Error::InvalidParameter {
            name: "num_samples",
            reason: "must be >= 1".to_string(),
        });
    }
    if num_samples == 1 {
        return Ok(vec![0]);
    }

    let span = (len - 1) as f64;
    let denom = (num_samples - 1) as f64;
    let mut indices = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let pos = (i as f64 * span / denom).round_ties_even() as isize;
        if pos < 0 || pos as usize >= len {
            error!("resample: computed index {pos} outside [0, {len})");
            return Err(Error::IndexOutOfRange { index: pos, len });
        }
        indices.push(pos as usize);
    }
    Ok(indices)
}

/// Appends `num_samples` points of `src` at uniform index spacing to `out`.
///
/// No interpolation: every output point is a copy of a source point.
pub fn resample_seq(src: &[Point2i], num_samples: usize, out: &mut PointSeq) -> Result<(), Error> {
    let indices = resample_indices(src.len(), num_samples)?;
    out.extend(indices.into_iter().map(|i| src[i]));
    Ok(())
}

/// Arena form of [`resample_seq`].
pub fn resample_in_arena(
    arena: &mut SeqArena,
    src: SeqId,
    dst: SeqId,
    num_samples: usize,
) -> Result<(), Error> {
    let (src, dst) = arena.src_dst(src, dst)?;
    resample_seq(src.as_slice(), num_samples, dst)
}
