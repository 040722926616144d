//! 2D primitives: points, segments, distances, and proper-crossing tests.
use glam::DVec2;

/// A point in canvas space (origin top-left, y pointing down).
pub type Point = DVec2;

/// A straight sub-edge between two points. Paths are ordered chains of segments.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn delta(&self) -> DVec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Whether this segment properly crosses `other`. See [`segments_intersect`].
    #[inline]
    pub fn crosses(&self, other: &Segment) -> bool {
        segments_intersect(self, other)
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start, end): (Point, Point)) -> Self {
        Self { start, end }
    }
}

/// Euclidean distance.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1).
#[inline]
pub fn interpolate(a: Point, b: Point, t: f64) -> Point {
    DVec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Sign of `v` as -1, 0, or 1. Unlike [`f64::signum`], zero maps to zero.
#[inline]
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Whether two segments cross at a point interior to both.
///
/// Both interpolation parameters must lie strictly inside `(0, 1)`, so segments that
/// only touch at an endpoint never intersect, and neither do parallel, collinear, or
/// zero-length segments (zero determinant).
pub fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    let (p1, p2) = (s1.start, s1.end);
    let (p3, p4) = (s2.start, s2.end);

    let a1 = p2.x - p1.x;
    let b1 = p3.x - p4.x;
    let c1 = p3.x - p1.x;

    let a2 = p2.y - p1.y;
    let b2 = p3.y - p4.y;
    let c2 = p3.y - p1.y;

    let d = a1 * b2 - b1 * a2;
    if d == 0.0 || !d.is_finite() {
        return false;
    }

    let t1 = (c1 * b2 - b1 * c2) / d;
    let t2 = (a1 * c2 - c1 * a2) / d;
    0.0 < t1 && t1 < 1.0 && 0.0 < t2 && t2 < 1.0
}

/// Whether any segment of `path` properly crosses any segment in `placed`.
pub fn path_intersects(path: &[Segment], placed: &[Segment]) -> bool {
    path.iter()
        .any(|a| placed.iter().any(|b| a.crosses(b)))
}
