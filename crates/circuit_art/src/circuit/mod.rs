//! Circuit-diagram generation: path shapes, selection, decorations, and the runner that
//! assembles them into a scene drawn on a [`surface::Surface`].
pub mod decoration;
pub mod params;
pub mod path;
pub mod runner;
pub mod selection;
pub mod surface;
pub mod svg;

pub use decoration::{Decoration, DecorationKind, Node};
pub use params::SceneParameters;
pub use path::{CurveStyle, PathShape};
pub use runner::{generate, Connection, Generator, GeneratorConfig, Scene};
pub use selection::{pick_path, pick_shaped_path, ShapeWeights};
pub use surface::{CommandLog, DrawCommand, FnSurface, MultiSurface, Surface};
pub use svg::SvgSurface;
