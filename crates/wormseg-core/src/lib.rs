//! Foundational primitives for worm boundary analysis.
//!
//! ## Points and Sequences
//! Boundaries are ordered sequences of integer pixel coordinates
//! ([`Point2i`]). A [`PointSeq`] is append-only while it is being built and is
//! read through a bounds-checked [`SeqReader`] cursor. Points double as 2D
//! vectors from the origin for dot/cross products.
//!
//! ## Arena
//! [`SeqArena`] owns a pool of sequences addressed by opaque [`SeqId`]
//! handles. Resetting the arena clears every sequence but keeps its capacity,
//! so per-frame processing does not reallocate. Handles issued before a reset
//! are rejected with [`Error::StaleHandle`].
//!
//! ## Rounding
//! Float-to-grid conversions round half-up (`floor(v + 0.5)`), see
//! [`round_half_up`].

mod arena;
mod border;
mod error;
mod geom;
mod image;
mod seq;

pub use arena::{SeqArena, SeqId};
pub use border::{clamp_index, clamp_window};
pub use error::Error;
pub use geom::{Point2i, Vec2i, round_half_up};
pub use image::Image;
pub use seq::{PointSeq, SeqReader};
