//! Centerline extraction and bilateral segmentation of worm boundaries.
//!
//! Given two boundary sides walked head to tail, [`build_centerline`] pairs
//! them by index into a midline, and [`segment_sides`] matches every
//! centerline sample to the boundary point lying on its perpendicular on each
//! side. [`WormSegmenter`] chains splitting, resampling, smoothing and
//! matching for one frame at a time.
//!
//! Head/tail classification is not done here; callers pass the boundary
//! indices of both ends.

mod centerline;
mod config;
mod correspondence;
mod segmenter;
mod split;

pub use centerline::{build_centerline, build_centerline_in_arena};
pub use config::SegmentConfig;
pub use correspondence::{
    CorrespondenceState, SegmentedSides, find_perp_point, search_radius, segment_sides,
};
pub use segmenter::{SegmentedWorm, WormSegmenter};
pub use split::{Walk, split_boundary, walk_boundary};
