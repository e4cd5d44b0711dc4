use crate::Error;
use crate::geom::Point2i;

/// Ordered, growable sequence of pixel coordinates.
///
/// Insertion order is significant: boundaries are walked in one rotational
/// direction and correspondence relies on index order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointSeq {
    points: Vec<Point2i>,
}

impl PointSeq {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn from_vec(points: Vec<Point2i>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, p: Point2i) {
        self.points.push(p);
    }

    pub fn extend_from_slice(&mut self, points: &[Point2i]) {
        self.points.extend_from_slice(points);
    }

    /// Drops all points while keeping the allocation.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn get(&self, i: usize) -> Option<Point2i> {
        self.points.get(i).copied()
    }

    pub fn first(&self) -> Option<Point2i> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point2i> {
        self.points.last().copied()
    }

    pub fn as_slice(&self) -> &[Point2i] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2i> {
        self.points.iter()
    }

    pub fn reader(&self) -> SeqReader<'_> {
        SeqReader::new(&self.points)
    }

    pub fn into_vec(self) -> Vec<Point2i> {
        self.points
    }

    /// Removes a point from the middle of the sequence, shifting later points.
    pub fn remove(&mut self, i: usize) -> Result<Point2i, Error> {
        if i >= self.points.len() {
            return Err(Error::IndexOutOfRange {
                index: i as isize,
                len: self.points.len(),
            });
        }
        Ok(self.points.remove(i))
    }
}

impl AsRef<[Point2i]> for PointSeq {
    fn as_ref(&self) -> &[Point2i] {
        &self.points
    }
}

impl From<Vec<Point2i>> for PointSeq {
    fn from(points: Vec<Point2i>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point2i> for PointSeq {
    fn from_iter<I: IntoIterator<Item = Point2i>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point2i> for PointSeq {
    fn extend<I: IntoIterator<Item = Point2i>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

/// Bounds-checked read cursor over a point slice.
///
/// `advance` stops one past the end (where `current` is `None`);
/// `advance_wrapping` cycles back to index 0, which is how closed contours
/// are walked.
#[derive(Debug, Clone, Copy)]
pub struct SeqReader<'a> {
    points: &'a [Point2i],
    pos: usize,
}

impl<'a> SeqReader<'a> {
    pub fn new(points: &'a [Point2i]) -> Self {
        Self { points, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn current(&self) -> Option<Point2i> {
        self.points.get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        if self.pos < self.points.len() {
            self.pos += 1;
        }
    }

    pub fn advance_wrapping(&mut self) {
        if self.points.is_empty() {
            return;
        }
        self.pos = (self.pos + 1) % self.points.len();
    }

    pub fn set_pos(&mut self, pos: usize) -> Result<(), Error> {
        if pos >= self.points.len() {
            return Err(Error::IndexOutOfRange {
                index: pos as isize,
                len: self.points.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }
}
