use std::path::Path;

use anyhow::{anyhow, Context};
use circuit_art::circuit::svg::SvgSurface;
use image::RgbaImage;
use resvg::{tiny_skia, usvg};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Infer the format from a file extension; anything but `.png` is written as SVG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => OutputFormat::Png,
            _ => OutputFormat::Svg,
        }
    }
}

/// Raster output settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Pixels per canvas unit.
    pub scale: f32,
    /// Load system fonts so label glyphs render.
    pub system_fonts: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            system_fonts: true,
        }
    }
}

impl RenderConfig {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }
}

/// Rasterise an SVG document and save it as PNG.
pub fn render_svg_to_png(
    document: &str,
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut options = usvg::Options::default();
    if config.system_fonts {
        options.fontdb_mut().load_system_fonts();
    }
    let tree = usvg::Tree::from_str(document, &options).context("parsing SVG document")?;

    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * config.scale).ceil() as u32;
    let height = (size.height() as f32 * config.scale).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("cannot allocate a {width}x{height} pixmap"))?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(config.scale, config.scale),
        &mut pixmap.as_mut(),
    );

    // The document paints an opaque background, so premultiplied and straight alpha agree.
    let img = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| anyhow!("pixmap size does not match {width}x{height}"))?;
    img.save(out_path.as_ref())
        .with_context(|| format!("writing {}", out_path.as_ref().display()))?;
    Ok(())
}

/// Write `svg` to `path`, as SVG or PNG depending on the extension.
pub fn write_output(
    svg: &SvgSurface,
    path: impl AsRef<Path>,
    config: &RenderConfig,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    match OutputFormat::from_path(path) {
        OutputFormat::Svg => svg
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?,
        OutputFormat::Png => render_svg_to_png(&svg.document(), config, path)?,
    }
    info!("Wrote {}.", path.display());
    Ok(())
}
