//! High-level runner: one seeded pass from parameters to a finished scene.
use glam::DVec2;
use tracing::{debug, info, trace, warn};

use crate::circuit::decoration::{Decoration, Node};
use crate::circuit::params::SceneParameters;
use crate::circuit::path::{resistor, CurveStyle, PathShape};
use crate::circuit::selection::pick_shaped_path;
use crate::circuit::surface::{Color, DashPattern, LineCap, PathCommand, Style, Surface};
use crate::error::{Error, Result};
use crate::geometry::{distance, Point, Segment};
use crate::rng::RandomSource;
use crate::sampling::{PoissonDiskSampling, PointSampling};
use crate::seed::Seed;

/// Stroke width of every connection.
pub const STROKE_WIDTH: f64 = 1.5;
/// Probability that a line or arc connection is dashed.
pub const DASH_PROBABILITY: f64 = 0.2;
const DASH_PATTERNS: [DashPattern; 2] = [DashPattern::new(10.0, 5.0), DashPattern::new(5.0, 5.0)];

/// Configuration for a generation pass.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Lower bound of the drawn point count (inclusive).
    pub min_points: usize,
    /// Upper bound of the drawn point count (exclusive).
    pub max_points: usize,
    /// Minimum separation between sampled points.
    pub point_radius: f64,
    /// Distance kept clear along every canvas edge.
    pub margin: f64,
    /// Points closer than this become candidate connections.
    pub connection_radius: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 400.0,
            min_points: 30,
            max_points: 60,
            point_radius: 50.0,
            margin: 30.0,
            connection_radius: 150.0,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new [`GeneratorConfig`] for a `width x height` canvas.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// The large canvas preset: 1080x720 with up to 100 points.
    pub fn large() -> Self {
        Self {
            width: 1080.0,
            height: 720.0,
            max_points: 100,
            ..Default::default()
        }
    }

    /// Sets the canvas size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the point count range `[min, max)`.
    pub fn with_point_range(mut self, min_points: usize, max_points: usize) -> Self {
        self.min_points = min_points;
        self.max_points = max_points;
        self
    }

    /// Sets the minimum point separation.
    pub fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = point_radius;
        self
    }

    /// Sets the edge margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the connection radius.
    pub fn with_connection_radius(mut self, connection_radius: f64) -> Self {
        self.connection_radius = connection_radius;
        self
    }

    pub fn extent(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidConfig(
                "width and height must be finite and > 0".into(),
            ));
        }
        if self.min_points > self.max_points {
            return Err(Error::InvalidConfig(
                "min_points must not exceed max_points".into(),
            ));
        }
        if !self.point_radius.is_finite() || self.point_radius < 0.0 {
            return Err(Error::InvalidConfig("point_radius must be >= 0".into()));
        }
        if !self.margin.is_finite()
            || self.margin < 0.0
            || 2.0 * self.margin >= self.width.min(self.height)
        {
            return Err(Error::InvalidConfig(
                "margin must be >= 0 and leave room inside the canvas".into(),
            ));
        }
        if !self.connection_radius.is_finite() || self.connection_radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "connection_radius must be > 0".into(),
            ));
        }

        Ok(())
    }
}

/// A committed connection between two points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub shape: PathShape,
    pub curve: CurveStyle,
    pub dash: Option<DashPattern>,
    /// The collision geometry, committed to the placed set.
    pub segments: Vec<Segment>,
    /// One stroke outline per segment.
    pub strokes: Vec<Vec<PathCommand>>,
}

impl Connection {
    pub fn style(&self) -> Style {
        Style::stroked(Color::BLACK, STROKE_WIDTH)
            .with_line_cap(LineCap::Round)
            .with_dash(self.dash)
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        let style = self.style();
        for stroke in &self.strokes {
            surface.path(stroke.clone(), style.clone());
        }
    }
}

/// The full record of one generation pass.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub seed: Seed,
    pub config: GeneratorConfig,
    pub parameters: SceneParameters,
    /// Sampled points in emission order.
    pub points: Vec<Point>,
    /// Committed connections in placement order.
    pub connections: Vec<Connection>,
    /// Decorated points in sampler order.
    pub nodes: Vec<Node>,
}

impl Scene {
    /// Replay the scene onto `surface`. Emits exactly the commands the generating pass
    /// emitted.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.begin(self.config.width, self.config.height);
        for connection in &self.connections {
            connection.render(surface);
        }
        for node in &self.nodes {
            node.render(surface);
        }
    }

    /// Every committed segment, in placement order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.connections.iter().flat_map(|c| c.segments.iter())
    }
}

/// Runs generation passes for a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn try_new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: GeneratorConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid GeneratorConfig");
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run a pass without drawing anything.
    pub fn generate(&self, seed: &Seed) -> Scene {
        self.generate_with_surface(seed, &mut ())
    }

    /// Run a pass, emitting draw commands to `surface` as elements are decided.
    pub fn generate_with_surface(&self, seed: &Seed, surface: &mut dyn Surface) -> Scene {
        self.generate_with_rng(seed, &mut seed.rng(), surface)
    }

    /// Run a pass drawing from `rng` instead of the seed's own stream. `seed` is only
    /// recorded in the scene and the logs.
    ///
    /// Draw order: scene parameters, sampler, pair shuffle; per pair the density draw,
    /// path selection, curve style, dash, strokes; per point the decoration density draw,
    /// the decoration kind, then its styling.
    pub fn generate_with_rng<R: RandomSource>(
        &self,
        seed: &Seed,
        rng: &mut R,
        surface: &mut dyn Surface,
    ) -> Scene {
        let config = &self.config;
        surface.begin(config.width, config.height);

        let parameters = SceneParameters::draw(config, rng);
        debug!(
            "Seed {}: {} slots, density {:.3}, dot density {:.3}, power {:.3}.",
            seed, parameters.point_count, parameters.density, parameters.dot_density, parameters.power,
        );

        let sampler =
            PoissonDiskSampling::new(parameters.point_count, config.point_radius, config.margin);
        let points = sampler.generate(config.extent().into(), rng);
        if points.is_empty() {
            warn!("Seed {}: sampler produced no points.", seed);
        }

        let mut pairs = candidate_pairs(&points, config.connection_radius);
        rng.shuffle(&mut pairs);

        let mut placed: Vec<Segment> = Vec::new();
        let mut connections = Vec::new();
        let mut skipped = 0;
        for pair in pairs {
            if rng.random() >= parameters.density {
                continue;
            }
            let Some((shape, segments)) =
                pick_shaped_path(pair, &placed, rng, &parameters.shape_weights)
            else {
                trace!("No clear path from {} to {}; skipping.", pair.start, pair.end);
                skipped += 1;
                continue;
            };

            let curve = parameters.choose_curve(rng);
            let dash = if curve == CurveStyle::Squiggle {
                None
            } else if rng.random() < DASH_PROBABILITY {
                rng.choose(&DASH_PATTERNS).copied()
            } else {
                None
            };

            let mut strokes = Vec::with_capacity(segments.len());
            for &segment in &segments {
                strokes.push(stroke_outline(segment, curve, rng));
            }
            placed.extend_from_slice(&segments);
            trace!(
                "Placed {} as {} ({} segments).",
                shape.name(),
                curve.name(),
                segments.len()
            );

            let connection = Connection {
                shape,
                curve,
                dash,
                segments,
                strokes,
            };
            connection.render(surface);
            connections.push(connection);
        }

        let mut nodes = Vec::new();
        for &position in &points {
            if rng.random() < parameters.dot_density {
                let kind = parameters.choose_decoration(rng);
                trace!("Decorating {} with a {}.", position, kind.name());
                let node = Node::new(position, Decoration::draw(kind, rng));
                node.render(surface);
                nodes.push(node);
            }
        }

        info!(
            "Seed {}: {} points, {} connections ({} skipped), {} nodes.",
            seed,
            points.len(),
            connections.len(),
            skipped,
            nodes.len(),
        );

        Scene {
            seed: seed.clone(),
            config: config.clone(),
            parameters,
            points,
            connections,
            nodes,
        }
    }

    /// Clear `surface` and run a fresh pass, with `seed` or a newly synthesised one.
    pub fn regenerate(&self, surface: &mut dyn Surface, seed: Option<Seed>) -> Scene {
        surface.clear();
        let seed = seed.unwrap_or_else(Seed::random);
        self.generate_with_surface(&seed, surface)
    }
}

/// Validate `config` and run a single pass without a surface.
pub fn generate(seed: &Seed, config: GeneratorConfig) -> Result<Scene> {
    Ok(Generator::try_new(config)?.generate(seed))
}

/// Every unordered pair closer than `radius`, collected for `i < j` in index order.
fn candidate_pairs(points: &[Point], radius: f64) -> Vec<Segment> {
    let mut pairs = Vec::new();
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            if distance(a, b) < radius {
                pairs.push(Segment::new(a, b));
            }
        }
    }
    pairs
}

/// Stroke outline for one segment. Only [`CurveStyle::Squiggle`] draws (twice).
fn stroke_outline<R: RandomSource>(
    segment: Segment,
    curve: CurveStyle,
    rng: &mut R,
) -> Vec<PathCommand> {
    match curve {
        CurveStyle::Line => vec![
            PathCommand::MoveTo(segment.start),
            PathCommand::LineTo(segment.end),
        ],
        CurveStyle::Arc => vec![
            PathCommand::MoveTo(segment.start),
            PathCommand::ArcTo {
                radii: segment.delta().abs(),
                to: segment.end,
            },
        ],
        CurveStyle::Squiggle => PathCommand::polyline(&resistor(segment, rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::surface::{CommandLog, DrawCommand};
    use crate::geometry::segments_intersect;
    use crate::rng::ScriptedRng;

    #[test]
    fn default_and_large_configs_validate() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(GeneratorConfig::large().validate().is_ok());
        assert_eq!(GeneratorConfig::large().extent(), DVec2::new(1080.0, 720.0));
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let cases = [
            GeneratorConfig::default().with_size(0.0, 400.0),
            GeneratorConfig::default().with_size(f64::NAN, 400.0),
            GeneratorConfig::default().with_point_range(60, 30),
            GeneratorConfig::default().with_point_radius(-1.0),
            GeneratorConfig::default().with_margin(200.0),
            GeneratorConfig::default().with_connection_radius(0.0),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(Error::InvalidConfig(_))),
                "{config:?}"
            );
            assert!(Generator::try_new(config).is_err());
        }
    }

    #[test]
    fn same_seed_same_commands() {
        let generator = Generator::new(GeneratorConfig::default());
        let seed = Seed::new(123456789012);

        let mut first = CommandLog::new();
        let mut second = CommandLog::new();
        let a = generator.generate_with_surface(&seed, &mut first);
        let b = generator.generate_with_surface(&seed, &mut second);

        assert_eq!(first, second);
        assert_eq!(a, b);
        assert!(first.len() > 1);
    }

    #[test]
    fn committed_segments_never_cross() {
        let generator = Generator::new(GeneratorConfig::large());
        for value in [1_u64, 42, 2024, 123456789012, 987654321] {
            let scene = generator.generate(&Seed::new(value));
            let segments: Vec<&Segment> = scene.segments().collect();
            for (i, a) in segments.iter().enumerate() {
                for b in &segments[i + 1..] {
                    assert!(!segments_intersect(a, b), "seed {value}: {a:?} crosses {b:?}");
                }
            }
        }
    }

    #[test]
    fn scene_replays_the_generated_commands() {
        let generator = Generator::default();
        let mut live = CommandLog::new();
        let scene = generator.generate_with_surface(&Seed::new(777), &mut live);

        let mut replay = CommandLog::new();
        scene.render(&mut replay);
        assert_eq!(live, replay);
    }

    #[test]
    fn scene_respects_configured_ranges() {
        let config = GeneratorConfig::default();
        let scene = generate(&Seed::new(31415926), config.clone()).expect("valid config");

        assert!(scene.points.len() <= scene.parameters.point_count);
        for p in &scene.points {
            assert!(p.x >= config.margin && p.x <= config.width - config.margin);
            assert!(p.y >= config.margin && p.y <= config.height - config.margin);
        }
        for connection in &scene.connections {
            assert_eq!(connection.segments.len(), connection.strokes.len());
            if connection.curve == CurveStyle::Squiggle {
                assert!(connection.dash.is_none());
            }
        }
        assert!(scene.nodes.len() <= scene.points.len());
    }

    #[test]
    fn scripted_pass_consumes_draws_in_decision_order() {
        let config = GeneratorConfig::new(100.0, 100.0)
            .with_point_range(2, 2)
            .with_point_radius(10.0)
            .with_margin(0.0);
        let generator = Generator::new(config);

        #[rustfmt::skip]
        let draws = vec![
            // point count, density 0.5, dot density 0.6, power 1
            0.0, 0.0, 0.6, 0.0,
            // shape weights: only the straight line admitted
            0.9, 0.0, 0.0, 0.0, 0.0,
            // decoration and curve weights, all 0.1
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0,
            // sampler: (20, 20) then (60, 50)
            0.2, 0.2, 0.6, 0.5,
            // pair: attempt, zigzag offset, five admissions
            0.1, 0.5, 0.3, 0.3, 0.3, 0.3, 0.3,
            // curve (line), dashed, second pattern
            0.1, 0.1, 0.7,
            // first point: decorated, triangle, size 15, offset pi
            0.5, 0.6, 0.9, 0.6,
            // second point: undecorated
            0.9,
        ];
        let expected_draws = draws.len();
        let mut rng = ScriptedRng::new(draws);
        let mut log = CommandLog::new();
        let scene = generator.generate_with_rng(&Seed::new(1), &mut rng, &mut log);

        assert_eq!(rng.draws(), expected_draws);
        assert_eq!(scene.parameters.point_count, 2);
        assert_eq!(scene.parameters.density, 0.5);
        assert_eq!(scene.parameters.power, 1.0);
        assert_eq!(scene.points.len(), 2);

        assert_eq!(scene.connections.len(), 1);
        let connection = &scene.connections[0];
        assert_eq!(connection.shape, PathShape::Line);
        assert_eq!(connection.curve, CurveStyle::Line);
        assert_eq!(connection.dash, Some(DashPattern::new(5.0, 5.0)));
        assert_eq!(
            connection.segments,
            vec![Segment::new(scene.points[0], scene.points[1])]
        );

        assert_eq!(scene.nodes.len(), 1);
        assert_eq!(scene.nodes[0].position, scene.points[0]);
        assert_eq!(
            scene.nodes[0].decoration,
            Decoration::Triangle {
                size: 15.0,
                offset: std::f64::consts::PI
            }
        );

        // Begin, one stroke, one triangle.
        assert_eq!(log.len(), 3);
        match &log.as_slice()[1] {
            DrawCommand::Path { style, .. } => {
                assert_eq!(style.dash, Some(DashPattern::new(5.0, 5.0)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn regenerate_clears_first_and_honours_seed() {
        let generator = Generator::default();
        let seed = Seed::new(55);

        let mut log = CommandLog::new();
        let scene = generator.regenerate(&mut log, Some(seed.clone()));
        assert_eq!(scene.seed, seed);
        assert_eq!(log.as_slice()[0], DrawCommand::Clear);
        assert!(matches!(log.as_slice()[1], DrawCommand::Begin { .. }));

        let fresh = generator.regenerate(&mut (), None);
        assert_eq!(fresh.seed.as_str().len(), crate::seed::SEED_DIGITS);
    }

    #[test]
    fn candidate_pairs_use_strict_radius_in_index_order() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(150.0, 0.0),
            DVec2::new(100.0, 100.0),
        ];
        let pairs = candidate_pairs(&points, 150.0);
        assert_eq!(
            pairs,
            vec![
                Segment::new(points[0], points[2]),
                Segment::new(points[1], points[2]),
            ]
        );
    }

    #[test]
    fn strokes_follow_curve_style() {
        let segment = Segment::new(DVec2::new(0.0, 10.0), DVec2::new(30.0, 0.0));
        let mut rng = ScriptedRng::new(vec![0.0]);

        let line = stroke_outline(segment, CurveStyle::Line, &mut rng);
        assert_eq!(line[1], PathCommand::LineTo(segment.end));

        let arc = stroke_outline(segment, CurveStyle::Arc, &mut rng);
        assert_eq!(
            arc[1],
            PathCommand::ArcTo {
                radii: DVec2::new(30.0, 10.0),
                to: segment.end
            }
        );
        assert_eq!(rng.draws(), 0);

        let squiggle = stroke_outline(segment, CurveStyle::Squiggle, &mut rng);
        assert_eq!(rng.draws(), 2);
        assert_eq!(squiggle[0], PathCommand::MoveTo(segment.start));
        assert_eq!(squiggle.last(), Some(&PathCommand::LineTo(segment.end)));
    }

    #[test]
    fn connection_strokes_are_round_capped_black_lines() {
        let generator = Generator::default();
        let mut log = CommandLog::new();
        generator.generate_with_surface(&Seed::new(8080), &mut log);
        for command in log.as_slice() {
            if let DrawCommand::Path { style, .. } = command {
                if style.line_cap.is_some() {
                    assert_eq!(style.stroke, Some(Color::BLACK));
                    assert_eq!(style.stroke_width, STROKE_WIDTH);
                    assert!(style.fill.is_none());
                }
            }
        }
    }
}
