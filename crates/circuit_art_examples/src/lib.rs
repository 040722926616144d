#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_svg_to_png, write_output, OutputFormat, RenderConfig};
