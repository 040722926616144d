//! Drawing commands and the surfaces that receive them.
//!
//! A generation pass emits [`DrawCommand`]s to a [`Surface`] synchronously, in the order
//! elements are decided. Surfaces here either discard ([`()`](unit)), record
//! ([`CommandLog`]), forward ([`FnSurface`]), fan out ([`MultiSurface`]), or build an SVG
//! document ([`crate::circuit::svg::SvgSurface`]).
use std::fmt;

use glam::DVec2;

use crate::geometry::Point;

/// An opaque RGB color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Alternating dash and gap lengths.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash: f64,
    pub gap: f64,
}

impl DashPattern {
    pub const fn new(dash: f64, gap: f64) -> Self {
        Self { dash, gap }
    }
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.dash, self.gap)
    }
}

/// Shape styling. `None` for fill or stroke means "not painted".
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub line_cap: Option<LineCap>,
    pub dash: Option<DashPattern>,
    /// Rotation about the shape's center.
    pub rotation_degrees: Option<f64>,
}

impl Style {
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Default::default()
        }
    }

    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            stroke: Some(color),
            stroke_width: width,
            ..Default::default()
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = Some(cap);
        self
    }

    pub fn with_dash(mut self, dash: Option<DashPattern>) -> Self {
        self.dash = dash;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = Some(degrees);
        self
    }
}

/// Text styling. Text is anchored at its center both horizontally and vertically.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_family: String,
    pub fill: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".into(),
            fill: Color::BLACK,
        }
    }
}

/// One step of a path outline.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Elliptical arc (no rotation, small arc, counter-clockwise sweep) to `to`.
    ArcTo { radii: DVec2, to: Point },
    Close,
}

impl PathCommand {
    /// `MoveTo` the first point followed by `LineTo` every other point.
    pub fn polyline(points: &[Point]) -> Vec<PathCommand> {
        points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                if i == 0 {
                    PathCommand::MoveTo(p)
                } else {
                    PathCommand::LineTo(p)
                }
            })
            .collect()
    }
}

/// Everything a surface can be asked to do.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Start a new document of the given size.
    Begin { width: f64, height: f64 },
    Path {
        commands: Vec<PathCommand>,
        style: Style,
    },
    Ellipse {
        center: Point,
        radii: DVec2,
        style: Style,
    },
    Rect {
        top_left: Point,
        size: DVec2,
        corner_radius: f64,
        style: Style,
    },
    Text {
        content: String,
        position: Point,
        style: TextStyle,
    },
    /// Discard everything drawn so far.
    Clear,
}

/// A receiver of [`DrawCommand`]s.
pub trait Surface {
    fn draw(&mut self, command: DrawCommand);

    fn begin(&mut self, width: f64, height: f64) {
        self.draw(DrawCommand::Begin { width, height });
    }

    fn path(&mut self, commands: Vec<PathCommand>, style: Style) {
        self.draw(DrawCommand::Path { commands, style });
    }

    fn ellipse(&mut self, center: Point, radii: DVec2, style: Style) {
        self.draw(DrawCommand::Ellipse {
            center,
            radii,
            style,
        });
    }

    fn rect(&mut self, top_left: Point, size: DVec2, corner_radius: f64, style: Style) {
        self.draw(DrawCommand::Rect {
            top_left,
            size,
            corner_radius,
            style,
        });
    }

    fn text(&mut self, content: String, position: Point, style: TextStyle) {
        self.draw(DrawCommand::Text {
            content,
            position,
            style,
        });
    }

    fn clear(&mut self) {
        self.draw(DrawCommand::Clear);
    }
}

/// A no-op surface.
impl Surface for () {
    #[inline]
    fn draw(&mut self, _command: DrawCommand) {}
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn draw(&mut self, command: DrawCommand) {
        (**self).draw(command);
    }
}

/// A surface that forwards to a user-provided closure.
pub struct FnSurface<F>
where
    F: FnMut(DrawCommand),
{
    f: F,
}

impl<F> FnSurface<F>
where
    F: FnMut(DrawCommand),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Surface for FnSurface<F>
where
    F: FnMut(DrawCommand),
{
    #[inline]
    fn draw(&mut self, command: DrawCommand) {
        (self.f)(command);
    }
}

/// A surface that records every command in order. `Clear` is recorded too, not applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandLog {
    commands: Vec<DrawCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            commands: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn as_slice(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for CommandLog {
    #[inline]
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Fan-out surface that forwards each command to all contained surfaces.
pub struct MultiSurface<S: Surface> {
    pub(crate) surfaces: Vec<S>,
}

impl<S: Surface> MultiSurface<S> {
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }

    pub fn with_surfaces(surfaces: Vec<S>) -> Self {
        Self { surfaces }
    }

    pub fn push(&mut self, surface: S) {
        self.surfaces.push(surface);
    }

    pub fn into_inner(self) -> Vec<S> {
        self.surfaces
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl<S: Surface> Default for MultiSurface<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Surface for MultiSurface<S> {
    fn draw(&mut self, command: DrawCommand) {
        let Some((last, rest)) = self.surfaces.split_last_mut() else {
            return;
        };
        for surface in rest {
            surface.draw(command.clone());
        }
        last.draw(command);
    }
}
