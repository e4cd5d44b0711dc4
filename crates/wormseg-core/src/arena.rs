//! Region-style storage for per-frame point sequences.
//!
//! The arena hands out [`SeqId`] handles instead of references so several
//! pipeline stages can hold on to sequences without borrowing the arena.
//! [`SeqArena::reset`] releases every sequence at once; buffers keep their
//! capacity so the next frame does not hit the allocator.
use crate::Error;
use crate::geom::Point2i;
use crate::seq::PointSeq;

/// Opaque handle to a sequence owned by a [`SeqArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeqId {
    index: u32,
    generation: u32,
}

#[derive(Debug, Default)]
pub struct SeqArena {
    seqs: Vec<PointSeq>,
    live: usize,
    generation: u32,
}

impl SeqArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sequences handed out since the last reset.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Allocates an empty sequence, reusing a cleared buffer when possible.
    pub fn alloc(&mut self) -> SeqId {
        if self.live == self.seqs.len() {
            self.seqs.push(PointSeq::new());
        }
        let id = SeqId {
            index: self.live as u32,
            generation: self.generation,
        };
        self.live += 1;
        id
    }

    pub fn alloc_from(&mut self, points: &[Point2i]) -> SeqId {
        let id = self.alloc();
        self.seqs[id.index as usize].extend_from_slice(points);
        id
    }

    pub fn get(&self, id: SeqId) -> Result<&PointSeq, Error> {
        let idx = self.check(id)?;
        Ok(&self.seqs[idx])
    }

    pub fn get_mut(&mut self, id: SeqId) -> Result<&mut PointSeq, Error> {
        let idx = self.check(id)?;
        Ok(&mut self.seqs[idx])
    }

    /// Borrows one sequence for reading and another for writing.
    pub fn src_dst(&mut self, src: SeqId, dst: SeqId) -> Result<(&PointSeq, &mut PointSeq), Error> {
        let si = self.check(src)?;
        let di = self.check(dst)?;
        if si == di {
            return Err(Error::InvalidParameter {
                name: "dst",
                reason: "destination aliases the source sequence".to_string(),
            });
        }

        if si < di {
            let (lo, hi) = self.seqs.split_at_mut(di);
            Ok((&lo[si], &mut hi[0]))
        } else {
            let (lo, hi) = self.seqs.split_at_mut(si);
            Ok((&hi[0], &mut lo[di]))
        }
    }

    /// Borrows two sequences for reading and a third for writing.
    pub fn src2_dst(
        &mut self,
        a: SeqId,
        b: SeqId,
        dst: SeqId,
    ) -> Result<(&PointSeq, &PointSeq, &mut PointSeq), Error> {
        let ai = self.check(a)?;
        let bi = self.check(b)?;
        let di = self.check(dst)?;
        if di == ai || di == bi {
            return Err(Error::InvalidParameter {
                name: "dst",
                reason: "destination aliases a source sequence".to_string(),
            });
        }

        let (before, rest) = self.seqs.split_at_mut(di);
        let (dst_seq, after) = rest.split_first_mut().ok_or(Error::UnknownSequence)?;
        let before: &[PointSeq] = before;
        let after: &[PointSeq] = after;
        let sa = if ai < di { &before[ai] } else { &after[ai - di - 1] };
        let sb = if bi < di { &before[bi] } else { &after[bi - di - 1] };
        Ok((sa, sb, dst_seq))
    }

    /// Clears every sequence and invalidates all outstanding handles.
    pub fn reset(&mut self) {
        for seq in self.seqs.iter_mut().take(self.live) {
            seq.clear();
        }
        self.live = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    fn check(&self, id: SeqId) -> Result<usize, Error> {
        if id.generation != self.generation {
            return Err(Error::StaleHandle);
        }
        let idx = id.index as usize;
        if idx >= self.live {
            return Err(Error::UnknownSequence);
        }
        Ok(idx)
    }
}
