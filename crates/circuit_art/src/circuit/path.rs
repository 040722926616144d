//! Path shape families and stroke polylines.
//!
//! Every shape maps one straight [`Segment`] to an ordered chain of segments running
//! from the segment's start to its end. [`squiggle`] and [`resistor`] produce
//! stroke-only polylines for the "resistor" curve style; they never take part in
//! collision tests.
use glam::DVec2;

use crate::geometry::{distance, interpolate, sign, Point, Segment};
use crate::rng::RandomSource;

/// Approximate length of one squiggle period.
pub const SQUIGGLE_SIZE: f64 = 5.0;
/// Perpendicular squiggle amplitude.
pub const SQUIGGLE_DEPTH: f64 = 3.0;

/// Number of [`PathShape`] families.
pub const SHAPE_COUNT: usize = 5;

/// The closed set of connection shapes, in menu order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathShape {
    /// The straight segment.
    Line,
    /// One right angle, horizontal leg first.
    ManhattanHorizontal,
    /// One right angle, vertical leg first.
    ManhattanVertical,
    /// Three legs with a randomly placed middle leg across the dominant axis.
    Zigzag,
    /// A 45° bevel followed by a straight leg.
    Diagonal,
}

impl PathShape {
    pub const ALL: [PathShape; SHAPE_COUNT] = [
        PathShape::Line,
        PathShape::ManhattanHorizontal,
        PathShape::ManhattanVertical,
        PathShape::Zigzag,
        PathShape::Diagonal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PathShape::Line => "line",
            PathShape::ManhattanHorizontal => "manhattan1",
            PathShape::ManhattanVertical => "manhattan2",
            PathShape::Zigzag => "zigzag",
            PathShape::Diagonal => "diagonal",
        }
    }

    /// Build this shape's polyline for `segment`. Only [`PathShape::Zigzag`] draws from `rng`.
    pub fn build<R: RandomSource>(self, segment: Segment, rng: &mut R) -> Vec<Segment> {
        match self {
            PathShape::Line => vec![segment],
            PathShape::ManhattanHorizontal => manhattan(segment, false),
            PathShape::ManhattanVertical => manhattan(segment, true),
            PathShape::Zigzag => zigzag(segment, rng),
            PathShape::Diagonal => diagonal(segment),
        }
    }
}

/// How a committed connection is stroked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveStyle {
    /// Straight strokes along each segment.
    Line,
    /// Elliptical arcs whose radii are the segment's axis extents.
    Arc,
    /// Resistor squiggles, see [`resistor`].
    Squiggle,
}

impl CurveStyle {
    pub const ALL: [CurveStyle; 3] = [CurveStyle::Line, CurveStyle::Arc, CurveStyle::Squiggle];

    pub fn name(self) -> &'static str {
        match self {
            CurveStyle::Line => "line",
            CurveStyle::Arc => "arc",
            CurveStyle::Squiggle => "squiggle",
        }
    }
}

/// Single right-angle corner. With `vertical_first` the corner is `(start.x, end.y)`,
/// otherwise `(end.x, start.y)`.
pub fn manhattan(segment: Segment, vertical_first: bool) -> Vec<Segment> {
    let Segment { start, end } = segment;
    let corner = if vertical_first {
        DVec2::new(start.x, end.y)
    } else {
        DVec2::new(end.x, start.y)
    };
    vec![Segment::new(start, corner), Segment::new(corner, end)]
}

/// Three-leg zigzag. The middle leg runs parallel to the dominant axis at a uniformly
/// drawn offset between the endpoints. Draws once.
pub fn zigzag<R: RandomSource>(segment: Segment, rng: &mut R) -> Vec<Segment> {
    let Segment { start, end } = segment;
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();

    let (first, second) = if dx >= dy {
        let y = rng.uniform(start.y, end.y);
        (DVec2::new(start.x, y), DVec2::new(end.x, y))
    } else {
        let x = rng.uniform(start.x, end.x);
        (DVec2::new(x, start.y), DVec2::new(x, end.y))
    };

    vec![
        Segment::new(start, first),
        Segment::new(first, second),
        Segment::new(second, end),
    ]
}

/// Beveled corner: a diagonal leg covering the shorter axis, then a straight leg.
pub fn diagonal(segment: Segment) -> Vec<Segment> {
    let Segment { start, end } = segment;
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();

    let corner = if dx >= dy {
        DVec2::new(start.x + dy * sign(end.x - start.x), end.y)
    } else {
        DVec2::new(end.x, start.y + dx * sign(end.y - start.y))
    };
    vec![Segment::new(start, corner), Segment::new(corner, end)]
}

/// Squiggle polyline from `a` to `b`.
///
/// The span is cut into `ceil(len / SQUIGGLE_SIZE)` periods; each period contributes four
/// points at quarter steps: on the line, offset left by [`SQUIGGLE_DEPTH`], on the line,
/// offset right. The polyline ends at `b`. A zero-length span yields `[b]`.
pub fn squiggle(a: Point, b: Point) -> Vec<Point> {
    let length = distance(a, b);
    let periods = (length / SQUIGGLE_SIZE).ceil() as usize;
    if periods == 0 {
        return vec![b];
    }

    let step = (b - a) / periods as f64;
    let normal = DVec2::new(-(b.y - a.y) / length, (b.x - a.x) / length) * SQUIGGLE_DEPTH;
    let quarter = step / 4.0;

    let mut points = Vec::with_capacity(periods * 4 + 1);
    let mut cursor = a;
    for _ in 0..periods {
        points.push(cursor);
        cursor += quarter;
        points.push(cursor + normal);
        cursor += quarter;
        points.push(cursor);
        cursor += quarter;
        points.push(cursor - normal);
        cursor += quarter;
    }
    points.push(b);
    points
}

/// Resistor stroke over `segment`: straight lead-in, a squiggle between two random
/// fractions of the span (`[0.1, 0.4)` and `[0.6, 0.9)`), and a straight lead-out.
/// Draws twice.
pub fn resistor<R: RandomSource>(segment: Segment, rng: &mut R) -> Vec<Point> {
    let Segment { start, end } = segment;
    let squiggle_start = interpolate(start, end, rng.uniform(0.1, 0.4));
    let squiggle_end = interpolate(start, end, rng.uniform(0.6, 0.9));

    let body = squiggle(squiggle_start, squiggle_end);
    let mut points = Vec::with_capacity(body.len() + 2);
    points.push(start);
    points.extend(body);
    points.push(end);
    points
}
