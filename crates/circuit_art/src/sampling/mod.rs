//! Sampling strategies for placing node points on the canvas.
//!
//! Samplers draw from a [`RandomSource`] in a fixed order and return points in
//! emission order; downstream stages depend on that order for reproducibility.
use mint::Vector2;

use crate::geometry::Point;
use crate::rng::RandomSource;

pub mod poisson_disk;

pub use poisson_disk::PoissonDiskSampling;

/// Trait for point placement over a `width x height` canvas.
pub trait PointSampling {
    fn generate<R: RandomSource>(&self, canvas_extent: Vector2<f64>, rng: &mut R) -> Vec<Point>;
}
