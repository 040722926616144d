use std::path::PathBuf;

use anyhow::Context;
use circuit_art::prelude::*;
use circuit_art_examples::{init_tracing, write_output, RenderConfig};
use clap::Parser;

/// Regenerate repeatedly on one surface, saving every pass.
#[derive(Parser)]
#[command(name = "regenerate-gallery")]
struct Args {
    /// Number of passes.
    #[arg(long, short, default_value_t = 6)]
    count: usize,
    /// Directory the images are written to.
    #[arg(long, default_value = "gallery")]
    out_dir: PathBuf,
    /// Write PNG instead of SVG.
    #[arg(long)]
    png: bool,
    /// Use the 1080x720 canvas with up to 100 points.
    #[arg(long)]
    large: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let config = if args.large {
        GeneratorConfig::large()
    } else {
        GeneratorConfig::default()
    };
    let generator = Generator::try_new(config)?;
    let render_config = RenderConfig::default();
    let extension = if args.png { "png" } else { "svg" };

    let mut svg = SvgSurface::new();
    for _ in 0..args.count {
        let scene = generator.regenerate(&mut svg, None);
        let path = args
            .out_dir
            .join(format!("circuit-{}.{extension}", scene.seed));
        write_output(&svg, &path, &render_config)?;
    }
    Ok(())
}
