use std::path::PathBuf;

use circuit_art::prelude::*;
use circuit_art_examples::{init_tracing, write_output, RenderConfig};
use clap::Parser;
use tracing::info;

/// Generate one circuit drawing from a seed.
#[derive(Parser)]
#[command(name = "generate")]
struct Args {
    /// Seed digits; a fresh 12-digit seed is used when missing or unparsable.
    #[arg(long, default_value = "")]
    seed: String,
    /// Output file; `.png` rasterises, anything else writes SVG.
    #[arg(long, short, default_value = "circuit.svg")]
    output: PathBuf,
    /// Use the 1080x720 canvas with up to 100 points.
    #[arg(long)]
    large: bool,
    /// Pixels per canvas unit for PNG output.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = if args.large {
        GeneratorConfig::large()
    } else {
        GeneratorConfig::default()
    };
    let generator = Generator::try_new(config)?;

    let seed = Seed::parse_or_random(&args.seed);
    let mut svg = SvgSurface::new();
    let scene = generator.generate_with_surface(&seed, &mut svg);

    info!(
        "Seed {} ({}): {} connections, {} nodes.",
        seed,
        seed.fragment(),
        scene.connections.len(),
        scene.nodes.len(),
    );

    write_output(&svg, &args.output, &RenderConfig::new(args.scale))?;
    Ok(())
}
