//! Collision-avoiding path selection for a candidate connection.
//!
//! [`pick_path`] builds the full shape menu, admits each shape through an independent
//! Bernoulli trial against its [`ShapeWeights`] probability, shuffles the admitted
//! polylines and returns the first one that crosses nothing already placed.
use crate::circuit::path::{PathShape, SHAPE_COUNT};
use crate::geometry::{path_intersects, Segment};
use crate::rng::RandomSource;

/// Per-shape acceptance probabilities in `[0, 1]`, iterated in [`PathShape::ALL`] order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeWeights {
    probabilities: [f64; SHAPE_COUNT],
}

impl ShapeWeights {
    pub fn new(probabilities: [f64; SHAPE_COUNT]) -> Self {
        Self { probabilities }
    }

    /// Every shape always admitted.
    pub fn uniform() -> Self {
        Self::new([1.0; SHAPE_COUNT])
    }

    /// Only `shape` admitted.
    pub fn only(shape: PathShape) -> Self {
        let mut weights = Self::new([0.0; SHAPE_COUNT]);
        weights.set(shape, 1.0);
        weights
    }

    pub fn get(&self, shape: PathShape) -> f64 {
        self.probabilities[shape as usize]
    }

    pub fn set(&mut self, shape: PathShape, probability: f64) {
        self.probabilities[shape as usize] = probability;
    }

    pub fn iter(&self) -> impl Iterator<Item = (PathShape, f64)> + '_ {
        PathShape::ALL
            .iter()
            .map(move |&shape| (shape, self.get(shape)))
    }
}

/// Pick a non-crossing path for `segment`, or `None` when no admitted shape fits.
///
/// Draw order: menu construction (the zigzag offset), one admission draw per shape, then
/// the shuffle of admitted candidates. A `None` result means the connection is skipped.
pub fn pick_path<R: RandomSource>(
    segment: Segment,
    placed: &[Segment],
    rng: &mut R,
    weights: &ShapeWeights,
) -> Option<Vec<Segment>> {
    pick_shaped_path(segment, placed, rng, weights).map(|(_, path)| path)
}

/// [`pick_path`], also reporting which shape family won.
pub fn pick_shaped_path<R: RandomSource>(
    segment: Segment,
    placed: &[Segment],
    rng: &mut R,
    weights: &ShapeWeights,
) -> Option<(PathShape, Vec<Segment>)> {
    let mut menu: Vec<Option<Vec<Segment>>> = PathShape::ALL
        .iter()
        .map(|shape| Some(shape.build(segment, rng)))
        .collect();

    let mut candidates = Vec::new();
    for (shape, probability) in weights.iter() {
        if rng.random() < probability {
            if let Some(path) = menu[shape as usize].take() {
                candidates.push((shape, path));
            }
        }
    }
    rng.shuffle(&mut candidates);

    candidates
        .into_iter()
        .find(|(_, path)| !path_intersects(path, placed))
}
