//! SVG document surface.
use std::path::Path;

use crate::circuit::surface::{DrawCommand, PathCommand, Style, Surface, TextStyle};
use crate::error::Result;

/// Builds an SVG document from draw commands.
///
/// `Begin` resets the document and sets its size; `Clear` drops all elements but keeps
/// the size. The document is rendered on a white background.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    elements: Vec<String>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            elements: Vec::new(),
        }
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n  {}\n</svg>\n",
            self.elements.join("\n  "),
            w = self.width,
            h = self.height,
        )
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.document())?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Begin { width, height } => {
                self.width = width;
                self.height = height;
                self.elements.clear();
            }
            DrawCommand::Clear => self.elements.clear(),
            DrawCommand::Path { commands, style } => {
                self.elements.push(format!(
                    r#"<path d="{}"{}/>"#,
                    path_data(&commands),
                    style_attrs(&style, None)
                ));
            }
            DrawCommand::Ellipse {
                center,
                radii,
                style,
            } => {
                self.elements.push(format!(
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{}/>"#,
                    center.x,
                    center.y,
                    radii.x,
                    radii.y,
                    style_attrs(&style, Some((center.x, center.y)))
                ));
            }
            DrawCommand::Rect {
                top_left,
                size,
                corner_radius,
                style,
            } => {
                let rounding = if corner_radius > 0.0 {
                    format!(r#" rx="{corner_radius}" ry="{corner_radius}""#)
                } else {
                    String::new()
                };
                let center = top_left + size / 2.0;
                self.elements.push(format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}"{}{}/>"#,
                    top_left.x,
                    top_left.y,
                    size.x,
                    size.y,
                    rounding,
                    style_attrs(&style, Some((center.x, center.y)))
                ));
            }
            DrawCommand::Text {
                content,
                position,
                style,
            } => {
                self.elements.push(text_element(&content, position.x, position.y, &style));
            }
        }
    }
}

fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|command| match command {
            PathCommand::MoveTo(p) => format!("M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => format!("L {} {}", p.x, p.y),
            PathCommand::ArcTo { radii, to } => {
                format!("A {} {} 0 0 0 {} {}", radii.x, radii.y, to.x, to.y)
            }
            PathCommand::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn style_attrs(style: &Style, rotation_center: Option<(f64, f64)>) -> String {
    let mut attrs = String::new();
    match style.fill {
        Some(color) => attrs.push_str(&format!(r#" fill="{color}""#)),
        None => attrs.push_str(r#" fill="none""#),
    }
    if let Some(color) = style.stroke {
        attrs.push_str(&format!(
            r#" stroke="{color}" stroke-width="{}""#,
            style.stroke_width
        ));
        if let Some(cap) = style.line_cap {
            attrs.push_str(&format!(r#" stroke-linecap="{}""#, cap.as_str()));
        }
        if let Some(dash) = style.dash {
            attrs.push_str(&format!(r#" stroke-dasharray="{dash}""#));
        }
    }
    if let (Some(degrees), Some((cx, cy))) = (style.rotation_degrees, rotation_center) {
        attrs.push_str(&format!(r#" transform="rotate({degrees} {cx} {cy})""#));
    }
    attrs
}

fn text_element(content: &str, x: f64, y: f64, style: &TextStyle) -> String {
    format!(
        r#"<text x="{x}" y="{y}" font-family="{}" fill="{}" dominant-baseline="middle" text-anchor="middle">{}</text>"#,
        escape_xml(&style.font_family),
        style.fill,
        escape_xml(content)
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::circuit::surface::{Color, DashPattern, LineCap};

    #[test]
    fn begin_sets_size_and_empty_document_is_valid() {
        let mut svg = SvgSurface::new();
        svg.begin(700.0, 400.0);
        let doc = svg.document();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(r#"width="700""#));
        assert!(doc.contains(r#"viewBox="0 0 700 400""#));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert_eq!(svg.element_count(), 0);
    }

    #[test]
    fn path_renders_line_and_arc_commands() {
        let mut svg = SvgSurface::new();
        let style = Style::stroked(Color::BLACK, 1.5)
            .with_line_cap(LineCap::Round)
            .with_dash(Some(DashPattern::new(10.0, 5.0)));
        svg.path(
            vec![
                PathCommand::MoveTo(DVec2::new(1.0, 2.0)),
                PathCommand::LineTo(DVec2::new(3.5, 4.0)),
                PathCommand::ArcTo {
                    radii: DVec2::new(2.0, 3.0),
                    to: DVec2::new(5.0, 6.0),
                },
                PathCommand::Close,
            ],
            style,
        );
        let doc = svg.document();
        assert!(doc.contains(r#"d="M 1 2 L 3.5 4 A 2 3 0 0 0 5 6 Z""#));
        assert!(doc.contains(r#"fill="none""#));
        assert!(doc.contains(r##"stroke="#000000" stroke-width="1.5""##));
        assert!(doc.contains(r#"stroke-linecap="round""#));
        assert!(doc.contains(r#"stroke-dasharray="10,5""#));
    }

    #[test]
    fn rotated_rect_rotates_about_center() {
        let mut svg = SvgSurface::new();
        svg.rect(
            DVec2::new(10.0, 20.0),
            DVec2::splat(10.0),
            0.0,
            Style::filled(Color::WHITE).with_rotation(45.0),
        );
        let doc = svg.document();
        assert!(doc.contains(r##"<rect x="10" y="20" width="10" height="10" fill="#ffffff""##));
        assert!(doc.contains(r#"transform="rotate(45 15 25)""#));
    }

    #[test]
    fn rounded_rect_and_text_are_written() {
        let mut svg = SvgSurface::new();
        svg.rect(DVec2::ZERO, DVec2::new(25.0, 21.0), 5.0, Style::filled(Color::WHITE));
        svg.text("<A>".into(), DVec2::new(12.5, 11.55), TextStyle::default());
        let doc = svg.document();
        assert!(doc.contains(r#"rx="5" ry="5""#));
        assert!(doc.contains("&lt;A&gt;</text>"));
        assert!(doc.contains(r#"font-family="sans-serif""#));
    }

    #[test]
    fn clear_drops_elements_but_keeps_size() {
        let mut svg = SvgSurface::new();
        svg.begin(100.0, 50.0);
        svg.ellipse(DVec2::ONE, DVec2::ONE, Style::filled(Color::BLACK));
        assert_eq!(svg.element_count(), 1);
        svg.clear();
        assert_eq!(svg.element_count(), 0);
        assert_eq!(svg.size(), (100.0, 50.0));
    }
}
