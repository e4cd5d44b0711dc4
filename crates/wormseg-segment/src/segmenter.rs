//! Per-frame segmentation pipeline.
//!
//! boundary → split at head/tail → resample each side → smooth each side →
//! centerline → resample to `num_segments` → perpendicular side matching.
//!
//! Intermediate sequences live in a [`SeqArena`] owned by the segmenter and
//! reset at the start of every frame, so steady-state processing reuses the
//! same buffers.
use log::debug;
use wormseg_contour::{resample_in_arena, remove_sequential_duplicates};
use wormseg_core::{Error, Point2i, PointSeq, SeqArena};
use wormseg_smooth::smooth_seq;

use crate::centerline::build_centerline_in_arena;
use crate::config::SegmentConfig;
use crate::correspondence::{CorrespondenceState, segment_sides};
use crate::split::{Walk, check_head_tail, walk_boundary};

/// Skeleton and bilateral segmentation of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedWorm {
    pub centerline: PointSeq,
    pub left: PointSeq,
    pub right: PointSeq,
    pub left_indices: Vec<usize>,
    pub right_indices: Vec<usize>,
    pub head: Point2i,
    pub tail: Point2i,
    pub num_segments: usize,
}

#[derive(Debug)]
pub struct WormSegmenter {
    cfg: SegmentConfig,
    arena: SeqArena,
    frames: u64,
}

impl WormSegmenter {
    pub fn new(cfg: SegmentConfig) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            arena: SeqArena::new(),
            frames: 0,
        })
    }

    pub fn config(&self) -> &SegmentConfig {
        &self.cfg
    }

    pub fn set_config(&mut self, cfg: SegmentConfig) -> Result<(), Error> {
        cfg.validate()?;
        self.cfg = cfg;
        Ok(())
    }

    /// Number of frames segmented successfully.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Segments one frame given its closed boundary and the boundary indices
    /// of head and tail.
    ///
    /// Consecutive duplicate boundary points are dropped before splitting;
    /// `head` and `tail` index the boundary as given.
    pub fn segment(
        &mut self,
        boundary: &[Point2i],
        head: usize,
        tail: usize,
    ) -> Result<SegmentedWorm, Error> {
        check_head_tail(boundary, head, tail)?;

        self.arena.reset();
        let cfg = self.cfg.clone();
        let arena = &mut self.arena;

        let raw_a = arena.alloc();
        let raw_b = arena.alloc();
        walk_boundary(boundary, head, tail, Walk::Forward, arena.get_mut(raw_a)?)?;
        walk_boundary(boundary, head, tail, Walk::Backward, arena.get_mut(raw_b)?)?;
        remove_sequential_duplicates(arena.get_mut(raw_a)?);
        remove_sequential_duplicates(arena.get_mut(raw_b)?);

        let res_a = arena.alloc();
        let res_b = arena.alloc();
        resample_in_arena(arena, raw_a, res_a, cfg.side_samples)?;
        resample_in_arena(arena, raw_b, res_b, cfg.side_samples)?;

        let smooth_a = arena.alloc();
        let smooth_b = arena.alloc();
        smooth_seq(arena, res_a, smooth_a, cfg.smooth_sigma)?;
        smooth_seq(arena, res_b, smooth_b, cfg.smooth_sigma)?;

        let dense_center = arena.alloc();
        build_centerline_in_arena(arena, smooth_a, smooth_b, dense_center)?;
        let centerline = arena.alloc();
        resample_in_arena(arena, dense_center, centerline, cfg.num_segments)?;

        let (sides, state) = segment_sides(
            arena.get(smooth_a)?.as_slice(),
            arena.get(smooth_b)?.as_slice(),
            arena.get(centerline)?.as_slice(),
            CorrespondenceState::default(),
        )?;

        debug!(
            "WormSegmenter::segment frame={} boundary={} sides=({}, {}) segments={} final=({}, {})",
            self.frames,
            boundary.len(),
            arena.get(raw_a)?.len(),
            arena.get(raw_b)?.len(),
            cfg.num_segments,
            state.last_a,
            state.last_b
        );

        let worm = SegmentedWorm {
            centerline: arena.get(centerline)?.clone(),
            left: sides.left,
            right: sides.right,
            left_indices: sides.left_indices,
            right_indices: sides.right_indices,
            head: boundary[head],
            tail: boundary[tail],
            num_segments: cfg.num_segments,
        };
        self.frames += 1;
        Ok(worm)
    }
}
