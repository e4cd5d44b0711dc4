use core::ops::Sub;

/// Integer pixel coordinate.
///
/// Also used as a 2D vector from the origin, e.g. for tangents and offsets
/// between boundary and centerline samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Dot product of the two position vectors.
    ///
    /// Saturates only when every coordinate is `i32::MIN`.
    pub fn dot(self, rhs: Self) -> i64 {
        let xx = i64::from(self.x) * i64::from(rhs.x);
        xx.saturating_add(i64::from(self.y) * i64::from(rhs.y))
    }

    pub fn cross(self, rhs: Self) -> i64 {
        let xy = i64::from(self.x) * i64::from(rhs.y);
        xy.saturating_sub(i64::from(self.y) * i64::from(rhs.x))
    }

    /// Dot product of the two vectors after normalizing both.
    ///
    /// Returns `0.0` when either vector has zero length.
    pub fn norm_dot(self, rhs: Self) -> f32 {
        let denom = self.norm() * rhs.norm();
        if denom == 0.0 {
            return 0.0;
        }
        self.dot(rhs) as f32 / denom
    }

    /// Cross product of the two vectors after normalizing both.
    ///
    /// Returns `0.0` when either vector has zero length.
    pub fn norm_cross(self, rhs: Self) -> f32 {
        let denom = self.norm() * rhs.norm();
        if denom == 0.0 {
            return 0.0;
        }
        self.cross(rhs) as f32 / denom
    }

    pub fn norm(self) -> f32 {
        Vec2i::from(self).norm() as f32
    }

    pub fn sq_dist(self, other: Self) -> i128 {
        let d = other - self;
        d.dot(d)
    }

    pub fn dist(self, other: Self) -> f64 {
        (other - self).norm()
    }

    /// Integer midpoint; each coordinate uses truncating division.
    pub fn midpoint(self, other: Self) -> Self {
        // The mean of two i32 values always fits in i32.
        Self {
            x: ((i64::from(self.x) + i64::from(other.x)) / 2) as i32,
            y: ((i64::from(self.y) + i64::from(other.y)) / 2) as i32,
        }
    }
}

/// Difference of two [`Point2i`]s, widened so it never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2i {
    pub x: i64,
    pub y: i64,
}

impl Vec2i {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, rhs: Self) -> i128 {
        i128::from(self.x) * i128::from(rhs.x) + i128::from(self.y) * i128::from(rhs.y)
    }

    pub fn cross(self, rhs: Self) -> i128 {
        i128::from(self.x) * i128::from(rhs.y) - i128::from(self.y) * i128::from(rhs.x)
    }

    pub fn norm(self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }
}

impl From<Point2i> for Vec2i {
    fn from(p: Point2i) -> Self {
        Self {
            x: i64::from(p.x),
            y: i64::from(p.y),
        }
    }
}

impl Sub for Point2i {
    type Output = Vec2i;

    fn sub(self, rhs: Point2i) -> Self::Output {
        Vec2i {
            x: i64::from(self.x) - i64::from(rhs.x),
            y: i64::from(self.y) - i64::from(rhs.y),
        }
    }
}

impl From<(i32, i32)> for Point2i {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Rounds half-up onto the integer grid: `floor(v + 0.5)`.
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}
