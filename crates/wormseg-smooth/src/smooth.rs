use log::trace;
use wormseg_core::{Error, Point2i, PointSeq, SeqArena, SeqId, round_half_up};

use crate::conv1d::convolve_i32_clamp;
use crate::kernels1d::GaussianKernelI32;

/// Smooths a point sequence with a Gaussian of standard deviation `sigma`,
/// appending `src.len()` points to `out`.
///
/// The x and y channels are convolved independently with the same kernel.
/// The kernel and channel buffers live only for the duration of the call.
pub fn smooth_points(src: &[Point2i], sigma: f64, out: &mut PointSeq) -> Result<(), Error> {
    let kernel = GaussianKernelI32::new(sigma)?;
    trace!(
        "smooth_points: n={} sigma={} radius={} norm={}",
        src.len(),
        sigma,
        kernel.radius,
        kernel.norm
    );

    let n = src.len();
    let xs: Vec<i32> = src.iter().map(|p| p.x).collect();
    let ys: Vec<i32> = src.iter().map(|p| p.y).collect();
    let mut cx = vec![0i64; n];
    let mut cy = vec![0i64; n];
    convolve_i32_clamp(&xs, &kernel.weights, kernel.radius, &mut cx)?;
    convolve_i32_clamp(&ys, &kernel.weights, kernel.radius, &mut cy)?;

    let norm = kernel.norm as f64;
    out.extend(cx.iter().zip(cy.iter()).map(|(&sx, &sy)| {
        Point2i::new(
            round_half_up(sx as f64 / norm),
            round_half_up(sy as f64 / norm),
        )
    }));
    Ok(())
}

/// Arena form of [`smooth_points`]: reads `src`, appends to `dst`.
pub fn smooth_seq(arena: &mut SeqArena, src: SeqId, dst: SeqId, sigma: f64) -> Result<(), Error> {
    let (src, dst) = arena.src_dst(src, dst)?;
    smooth_points(src.as_slice(), sigma, dst)
}
