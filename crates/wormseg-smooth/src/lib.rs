//! Integer Gaussian smoothing for boundary point sequences.
//!
//! Coordinates stay on the integer grid: the kernel has integer weights with
//! an explicit normalization factor, and each smoothed coordinate is rounded
//! half-up after dividing by that factor.
//!
//! Borders clamp to the first/last sample, so the curve ends are not pulled
//! toward the origin the way zero padding would.

pub mod conv1d;
pub mod kernels1d;
pub mod smooth;

pub use conv1d::convolve_i32_clamp;
pub use kernels1d::GaussianKernelI32;
pub use smooth::{smooth_points, smooth_seq};
