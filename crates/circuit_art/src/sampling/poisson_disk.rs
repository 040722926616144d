//! Bounded dart-throwing Poisson-disk sampler.
use glam::DVec2;
use mint::Vector2;

use crate::geometry::{distance, Point};
use crate::rng::RandomSource;
use crate::sampling::PointSampling;

/// Attempts per slot before the slot is given up.
pub const MAX_ATTEMPTS: usize = 100;

/// Dart-throwing sampler with a minimum separation and a margin.
///
/// Each of `count` slots gets up to [`MAX_ATTEMPTS`] uniform candidates inside
/// `[margin, width - margin] x [margin, height - margin]` (x drawn before y). The first
/// candidate at least `radius` away from every accepted point is kept. A slot whose
/// attempts are exhausted is skipped, so fewer than `count` points may come back.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonDiskSampling {
    /// Number of slots to fill.
    pub count: usize,
    /// Minimum distance between accepted points.
    pub radius: f64,
    /// Distance kept clear along every canvas edge.
    pub margin: f64,
}

impl PoissonDiskSampling {
    pub fn new(count: usize, radius: f64, margin: f64) -> Self {
        Self {
            count,
            radius,
            margin,
        }
    }
}

impl PointSampling for PoissonDiskSampling {
    fn generate<R: RandomSource>(&self, canvas_extent: Vector2<f64>, rng: &mut R) -> Vec<Point> {
        let extent = DVec2::from(canvas_extent);
        let inner = extent - DVec2::splat(2.0 * self.margin);

        if self.count == 0
            || !self.radius.is_finite()
            || self.radius < 0.0
            || !self.margin.is_finite()
            || inner.x <= 0.0
            || inner.y <= 0.0
        {
            return Vec::new();
        }

        let mut points: Vec<Point> = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            for _ in 0..MAX_ATTEMPTS {
                let x = self.margin + rng.random() * inner.x;
                let y = self.margin + rng.random() * inner.y;
                let candidate = DVec2::new(x, y);

                if points
                    .iter()
                    .all(|&p| distance(candidate, p) >= self.radius)
                {
                    points.push(candidate);
                    break;
                }
            }
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SineRng};
    use crate::seed::Seed;

    fn pairwise_min_distance(points: &[Point]) -> f64 {
        let mut min = f64::MAX;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                min = min.min(distance(points[i], points[j]));
            }
        }
        min
    }

    #[test]
    fn reference_canvas_respects_bounds_and_separation() {
        let seed = Seed::new(123_456_789_012);
        let sampling = PoissonDiskSampling::new(45, 50.0, 30.0);
        let extent = DVec2::new(700.0, 400.0);

        let points = sampling.generate(extent.into(), &mut seed.rng());
        assert!(!points.is_empty());
        assert!(points.len() <= 45);
        for p in &points {
            assert!((30.0..=670.0).contains(&p.x), "x out of bounds: {p}");
            assert!((30.0..=370.0).contains(&p.y), "y out of bounds: {p}");
        }
        if points.len() > 1 {
            assert!(pairwise_min_distance(&points) >= 50.0);
        }

        let again = sampling.generate(extent.into(), &mut seed.rng());
        assert_eq!(points, again);
    }

    #[test]
    fn exhausted_slots_are_skipped() {
        // Every draw lands on the same spot, so only the first slot succeeds.
        let mut rng = ScriptedRng::new(vec![0.5]);
        let sampling = PoissonDiskSampling::new(3, 10.0, 0.0);
        let points = sampling.generate(DVec2::new(100.0, 100.0).into(), &mut rng);

        assert_eq!(points, vec![DVec2::new(50.0, 50.0)]);
        assert_eq!(rng.draws(), 2 + 2 * 2 * MAX_ATTEMPTS);
    }

    #[test]
    fn first_valid_candidate_wins() {
        // Slot 0 accepts (10, 10); slot 1 rejects (10, 10) then accepts (90, 90).
        let mut rng = ScriptedRng::new(vec![0.1, 0.1, 0.1, 0.1, 0.9, 0.9]);
        let sampling = PoissonDiskSampling::new(2, 20.0, 0.0);
        let points = sampling.generate(DVec2::new(100.0, 100.0).into(), &mut rng);

        assert_eq!(points.len(), 2);
        assert!((points[0] - DVec2::new(10.0, 10.0)).length() < 1e-9);
        assert!((points[1] - DVec2::new(90.0, 90.0)).length() < 1e-9);
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn degenerate_inputs_return_no_points_and_draw_nothing() {
        let extent: Vector2<f64> = DVec2::new(100.0, 100.0).into();
        let cases = [
            PoissonDiskSampling::new(0, 10.0, 0.0),
            PoissonDiskSampling::new(5, f64::NAN, 0.0),
            PoissonDiskSampling::new(5, -1.0, 0.0),
            PoissonDiskSampling::new(5, 10.0, 50.0),
        ];
        for sampling in cases {
            let mut rng = ScriptedRng::new(vec![0.5]);
            assert!(sampling.generate(extent, &mut rng).is_empty());
            assert_eq!(rng.draws(), 0);
        }
    }

    #[test]
    fn separation_holds_across_many_seeds() {
        let sampling = PoissonDiskSampling::new(60, 50.0, 30.0);
        for seed in 0..50u64 {
            let mut rng = SineRng::new(seed as f64 * 7919.0 + 1.0);
            let points = sampling.generate(DVec2::new(700.0, 400.0).into(), &mut rng);
            assert!(points.len() <= 60);
            if points.len() > 1 {
                assert!(pairwise_min_distance(&points) >= 50.0, "seed {seed}");
            }
        }
    }
}
