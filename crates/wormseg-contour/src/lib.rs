//! Contour-level primitives over integer pixel sequences.
//!
//! - [`raster`]: walk the grid between two points and turn sparse polygons
//!   into dense, gap-free contours.
//! - [`resample`]: decimate a dense sequence to a fixed number of samples at
//!   uniform index spacing. Samples are copies of source points; nothing is
//!   interpolated.
//! - [`points`]: nearest-point search, consecutive-duplicate removal,
//!   coordinate-wise median and related scans.

pub mod points;
pub mod raster;
pub mod resample;

pub use points::{
    first_not_matching, longest_contour, median_point, nearest_point,
    remove_sequential_duplicates,
};
pub use raster::{
    polygon_to_contour, polygon_to_contour_in_arena, rasterize_line, rasterize_line_in_arena,
    rasterize_line_inclusive,
};
pub use resample::{resample_in_arena, resample_indices, resample_seq};
