use std::fmt::Write;

use super::{ProjectionStyle, Viewport};
use crate::geometry::{Facing, WALL_CORNERS};
use crate::math::Point2;

/// Group id of the base wall layer.
pub const WALLS_LAYER_ID: &str = "walls-layer";

/// Group id of the highlight layer.
pub const HIGHLIGHT_LAYER_ID: &str = "highlight-layer";

/// One wall drawn as a closed four-point path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPath {
    pub corners: [Point2; WALL_CORNERS],
    pub facing: Facing,
    pub highlighted: bool,
}

impl WallPath {
    /// The SVG path data: `M x0 y0 L x1 y1 L x2 y2 L x3 y3 Z`.
    #[must_use]
    pub fn path_data(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.corners.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { "L" };
            let _ = write!(d, "{cmd} {} {} ", p.x, p.y);
        }
        d.push('Z');
        d
    }
}

/// A named group of wall paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: &'static str,
    paths: Vec<WallPath>,
}

impl Layer {
    pub(crate) fn new(id: &'static str) -> Self {
        Self {
            id,
            paths: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, path: WallPath) {
        self.paths.push(path);
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn paths(&self) -> &[WallPath] {
        &self.paths
    }
}

/// A rendered wall projection: base layer, highlight layer, and framing.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub(crate) viewport: Viewport,
    pub(crate) walls: Layer,
    pub(crate) highlight: Layer,
    pub(crate) style: ProjectionStyle,
}

impl Drawing {
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The base layer of non-highlighted walls.
    #[must_use]
    pub fn walls(&self) -> &Layer {
        &self.walls
    }

    #[must_use]
    pub fn highlight(&self) -> &Layer {
        &self.highlight
    }

    /// Layers in paint order: base first, highlight on top.
    #[must_use]
    pub fn layers(&self) -> [&Layer; 2] {
        [&self.walls, &self.highlight]
    }

    #[must_use]
    pub fn style(&self) -> &ProjectionStyle {
        &self.style
    }

    /// Serializes the drawing as a standalone SVG document with inline
    /// styling.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" style="background: transparent;">"#,
            self.viewport.view_box()
        );
        for layer in self.layers() {
            if layer.paths.is_empty() {
                let _ = write!(out, r#"<g id="{}"/>"#, layer.id);
                continue;
            }
            let _ = write!(out, r#"<g id="{}">"#, layer.id);
            for path in &layer.paths {
                let color = xml_escape(self.style.color(path.highlighted));
                let _ = write!(
                    out,
                    r#"<path d="{}" fill="{color}" stroke="{color}" stroke-width="{}"/>"#,
                    path.path_data(),
                    self.style.stroke_width()
                );
            }
            out.push_str("</g>");
        }
        out.push_str("</svg>");
        out
    }
}

/// Escapes the five XML special characters for attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_data_is_closed_in_corner_order() {
        let path = WallPath {
            corners: [
                Point2::new(0.0, 0.0),
                Point2::new(10.5, 0.0),
                Point2::new(10.5, -1.0),
                Point2::new(0.0, -1.0),
            ],
            facing: Facing::Back,
            highlighted: false,
        };
        assert_eq!(path.path_data(), "M 0 0 L 10.5 0 L 10.5 -1 L 0 -1 Z");
    }

    #[test]
    fn xml_escape_special_characters() {
        assert_eq!(xml_escape(r#"a<b>"c"&'d'"#), "a&lt;b&gt;&quot;c&quot;&amp;&apos;d&apos;");
        assert_eq!(xml_escape("#259DC9"), "#259DC9");
    }
}
