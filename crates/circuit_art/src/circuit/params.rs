//! Per-pass scene parameters.
use crate::circuit::decoration::DecorationKind;
use crate::circuit::path::{CurveStyle, SHAPE_COUNT};
use crate::circuit::runner::GeneratorConfig;
use crate::circuit::selection::ShapeWeights;
use crate::rng::RandomSource;

/// Parameters drawn once at the start of a pass. They skew every later decision, so two
/// seeds can produce very different "moods".
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SceneParameters {
    /// Number of sampler slots.
    pub point_count: usize,
    /// Probability that a candidate pair is attempted at all.
    pub density: f64,
    /// Probability that a point receives a decoration.
    pub dot_density: f64,
    /// Exponent applied to the weight draws; higher values favor fewer kinds.
    pub power: f64,
    /// Per-shape admission probabilities.
    pub shape_weights: ShapeWeights,
    /// Relative weights in [`DecorationKind::ALL`] order.
    pub decoration_weights: [f64; 4],
    /// Relative weights in [`CurveStyle::ALL`] order.
    pub curve_weights: [f64; 3],
}

impl SceneParameters {
    /// Draw a parameter set.
    ///
    /// Order: point count, density, decoration density, power, five shape weights, four
    /// decoration weights, three curve weights.
    pub fn draw<R: RandomSource>(config: &GeneratorConfig, rng: &mut R) -> Self {
        let point_count = rng
            .integer(config.min_points as i64, config.max_points as i64)
            .max(0) as usize;
        let density = rng.uniform(0.5, 1.0);
        let dot_density = rng.random();
        let power = rng.uniform(1.0, 5.0);

        let mut shapes = [0.0; SHAPE_COUNT];
        for weight in &mut shapes {
            *weight = rng.random().powf(power);
        }

        let mut decoration_weights = [0.0; 4];
        for weight in &mut decoration_weights {
            *weight = rng.uniform(0.1, 1.0).powf(power);
        }

        let mut curve_weights = [0.0; 3];
        for weight in &mut curve_weights {
            *weight = rng.uniform(0.1, 1.0);
        }

        Self {
            point_count,
            density,
            dot_density,
            power,
            shape_weights: ShapeWeights::new(shapes),
            decoration_weights,
            curve_weights,
        }
    }

    /// Weighted curve style choice. Consumes one draw.
    pub fn choose_curve<R: RandomSource>(&self, rng: &mut R) -> CurveStyle {
        rng.choose_weighted(&CurveStyle::ALL, &self.curve_weights)
            .copied()
            .unwrap_or(CurveStyle::Line)
    }

    /// Weighted decoration kind choice. Consumes one draw.
    pub fn choose_decoration<R: RandomSource>(&self, rng: &mut R) -> DecorationKind {
        rng.choose_weighted(&DecorationKind::ALL, &self.decoration_weights)
            .copied()
            .unwrap_or(DecorationKind::Dot)
    }
}
