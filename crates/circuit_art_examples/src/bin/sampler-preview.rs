use circuit_art::prelude::*;
use circuit_art_examples::{init_tracing, write_output, RenderConfig};
use glam::DVec2;
use tracing::info;

/// Draw the raw sampler output for a fixed seed: each point with its exclusion circle.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GeneratorConfig::default();
    let seed = Seed::new(123456789012);
    let mut rng = seed.rng();

    let sampler = PoissonDiskSampling::new(60, config.point_radius, config.margin);
    let points = sampler.generate(config.extent().into(), &mut rng);
    info!("Sampled {} of {} slots.", points.len(), sampler.count);

    let mut svg = SvgSurface::new();
    svg.begin(config.width, config.height);
    svg.rect(
        DVec2::splat(config.margin),
        config.extent() - DVec2::splat(2.0 * config.margin),
        0.0,
        Style::stroked(Color::rgb(180, 180, 180), 1.0).with_dash(Some(DashPattern::new(4.0, 4.0))),
    );
    for &p in &points {
        svg.ellipse(
            p,
            DVec2::splat(config.point_radius / 2.0),
            Style::stroked(Color::rgb(120, 160, 220), 1.0),
        );
        svg.ellipse(p, DVec2::splat(2.5), Style::filled(Color::BLACK));
    }

    write_output(&svg, "sampler-preview.png", &RenderConfig::new(2.0))?;
    Ok(())
}
