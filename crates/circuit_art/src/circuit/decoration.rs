//! Node decorations: the glyph drawn on top of a sampled point.
use std::f64::consts::PI;

use glam::DVec2;

use crate::circuit::surface::{Color, PathCommand, Style, Surface, TextStyle};
use crate::geometry::Point;
use crate::rng::RandomSource;

const DOT_DIAMETERS: [f64; 3] = [3.0, 5.0, 10.0];
const DOT_OUTLINE_WIDTH: f64 = 2.0;
const SQUARE_SIDES: [f64; 3] = [3.0, 5.0, 10.0];
const TRIANGLE_SIZES: [f64; 2] = [10.0, 15.0];
const TRIANGLE_OFFSETS: [f64; 2] = [0.0, PI];
const LABEL_SIZE: DVec2 = DVec2::new(25.0, 21.0);
const LABEL_CORNER_RADIUS: f64 = 5.0;
const LABEL_ALPHABETS: [&str; 2] = ["0123456789", "ABCDEFGHIJKLMNOPQRSTUVWXYZ"];
const OUTLINE_WIDTH: f64 = 1.5;

/// Decoration families, in weight-table order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Dot,
    Rectangle,
    Triangle,
    Label,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 4] = [
        DecorationKind::Dot,
        DecorationKind::Rectangle,
        DecorationKind::Triangle,
        DecorationKind::Label,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DecorationKind::Dot => "dot",
            DecorationKind::Rectangle => "rectangle",
            DecorationKind::Triangle => "triangle",
            DecorationKind::Label => "label",
        }
    }
}

/// A decoration with all of its random styling decided.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decoration {
    /// Solid black disc, or a white disc with a black outline when `hollow`, optionally
    /// with a smaller black disc inside.
    Dot {
        diameter: f64,
        hollow: bool,
        nested: bool,
    },
    /// White square, optionally turned 45°.
    Rectangle { side: f64, rotated: bool },
    /// White equilateral triangle; `offset` is the angle of the first vertex.
    Triangle { size: f64, offset: f64 },
    /// Rounded white box with a single digit or capital letter.
    Label { character: char },
}

impl Decoration {
    /// Decide the styling of a `kind` decoration.
    ///
    /// Draws, in order: dot (diameter, hollow, nested only if hollow); rectangle (side,
    /// rotation); triangle (size, offset); label (alphabet, character).
    pub fn draw<R: RandomSource>(kind: DecorationKind, rng: &mut R) -> Self {
        match kind {
            DecorationKind::Dot => {
                let diameter = rng.choose(&DOT_DIAMETERS).copied().unwrap_or(DOT_DIAMETERS[0]);
                let hollow = rng.random() < 0.5;
                let nested = hollow && rng.random() < 0.5;
                Decoration::Dot {
                    diameter,
                    hollow,
                    nested,
                }
            }
            DecorationKind::Rectangle => {
                let side = rng.choose(&SQUARE_SIDES).copied().unwrap_or(SQUARE_SIDES[0]);
                Decoration::Rectangle {
                    side,
                    rotated: rng.random() < 0.5,
                }
            }
            DecorationKind::Triangle => {
                let size = rng.choose(&TRIANGLE_SIZES).copied().unwrap_or(TRIANGLE_SIZES[0]);
                let offset = rng.choose(&TRIANGLE_OFFSETS).copied().unwrap_or(0.0);
                Decoration::Triangle { size, offset }
            }
            DecorationKind::Label => {
                let alphabet = rng
                    .choose(&LABEL_ALPHABETS)
                    .copied()
                    .unwrap_or(LABEL_ALPHABETS[0]);
                let character = rng
                    .choose(alphabet.as_bytes())
                    .map(|&b| char::from(b))
                    .unwrap_or('0');
                Decoration::Label { character }
            }
        }
    }

    pub fn kind(&self) -> DecorationKind {
        match self {
            Decoration::Dot { .. } => DecorationKind::Dot,
            Decoration::Rectangle { .. } => DecorationKind::Rectangle,
            Decoration::Triangle { .. } => DecorationKind::Triangle,
            Decoration::Label { .. } => DecorationKind::Label,
        }
    }
}

/// A decorated point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub position: Point,
    pub decoration: Decoration,
}

impl Node {
    pub fn new(position: Point, decoration: Decoration) -> Self {
        Self {
            position,
            decoration,
        }
    }

    /// Emit this node's shapes.
    pub fn render(&self, surface: &mut dyn Surface) {
        let center = self.position;
        match self.decoration {
            Decoration::Dot {
                diameter,
                hollow,
                nested,
            } => {
                let style = if hollow {
                    Style::filled(Color::WHITE).with_stroke(Color::BLACK, DOT_OUTLINE_WIDTH)
                } else {
                    Style::filled(Color::BLACK)
                };
                surface.ellipse(center, DVec2::splat(diameter / 2.0), style);

                // Small outlined dots leave no room for the inner disc.
                let inner = diameter - DOT_OUTLINE_WIDTH * 3.0;
                if nested && inner > 0.0 {
                    surface.ellipse(center, DVec2::splat(inner / 2.0), Style::filled(Color::BLACK));
                }
            }
            Decoration::Rectangle { side, rotated } => {
                let mut style =
                    Style::filled(Color::WHITE).with_stroke(Color::BLACK, OUTLINE_WIDTH);
                if rotated {
                    style = style.with_rotation(45.0);
                }
                surface.rect(center - DVec2::splat(side / 2.0), DVec2::splat(side), 0.0, style);
            }
            Decoration::Triangle { size, offset } => {
                let theta = 2.0 * PI / 3.0;
                let vertex = |k: f64| {
                    let angle = offset + k * theta;
                    center + DVec2::new(angle.cos() * size, angle.sin() * size)
                };
                let mut commands = PathCommand::polyline(&[vertex(0.0), vertex(1.0), vertex(2.0)]);
                commands.push(PathCommand::Close);
                surface.path(
                    commands,
                    Style::filled(Color::WHITE).with_stroke(Color::BLACK, OUTLINE_WIDTH),
                );
            }
            Decoration::Label { character } => {
                surface.rect(
                    center - LABEL_SIZE / 2.0,
                    LABEL_SIZE,
                    LABEL_CORNER_RADIUS,
                    Style::filled(Color::WHITE).with_stroke(Color::BLACK, OUTLINE_WIDTH),
                );
                surface.text(
                    character.to_string(),
                    DVec2::new(center.x, center.y + LABEL_SIZE.y * 0.05),
                    TextStyle::default(),
                );
            }
        }
    }
}
