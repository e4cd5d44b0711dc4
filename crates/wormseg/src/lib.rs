//! Umbrella crate for the `wormseg` workspace.
//!
//! Core types are re-exported at the root; each processing stage is
//! available under its own module.

pub use wormseg_core::*;

pub use wormseg_contour as contour;
pub use wormseg_draw as draw;
pub use wormseg_segment as segment;
pub use wormseg_smooth as smooth;

pub use wormseg_segment::{SegmentConfig, SegmentedWorm, WormSegmenter};
