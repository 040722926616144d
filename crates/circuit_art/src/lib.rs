#![forbid(unsafe_code)]
//! circuit_art: Seeded generator for circuit-diagram style line art.
//!
//! Modules:
//! - rng: the sine-recurrence random stream and derived draws
//! - seed: seed parsing, synthesis, and shareable fragments
//! - geometry: points, segments, proper-crossing tests
//! - sampling: minimum-separation point sampling
//! - circuit: path shapes, collision-free selection, decorations, surfaces, runner
//!
//! For examples, see README and the `circuit_art_examples` binaries.
pub mod circuit;
pub mod error;
pub mod geometry;
pub mod rng;
pub mod sampling;
pub mod seed;

/// Convenient re-exports for common types. Import with `use circuit_art::prelude::*;`.
pub mod prelude {
    pub use crate::circuit::decoration::{Decoration, DecorationKind, Node};
    pub use crate::circuit::params::SceneParameters;
    pub use crate::circuit::path::{resistor, squiggle, CurveStyle, PathShape};
    pub use crate::circuit::runner::{
        generate, Connection, Generator, GeneratorConfig, Scene,
    };
    pub use crate::circuit::selection::{pick_path, pick_shaped_path, ShapeWeights};
    pub use crate::circuit::surface::{
        Color, CommandLog, DashPattern, DrawCommand, FnSurface, LineCap, MultiSurface,
        PathCommand, Style, Surface, TextStyle,
    };
    pub use crate::circuit::svg::SvgSurface;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{distance, interpolate, segments_intersect, Point, Segment};
    pub use crate::rng::{RandomSource, SineRng};
    pub use crate::sampling::{PoissonDiskSampling, PointSampling};
    pub use crate::seed::Seed;
}
