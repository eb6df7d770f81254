mod drawing;
mod highlight;
mod style;
mod viewport;

pub use drawing::{Drawing, Layer, WallPath, HIGHLIGHT_LAYER_ID, WALLS_LAYER_ID};
pub use highlight::HighlightSet;
pub use style::ProjectionStyle;
pub use viewport::Viewport;

use tracing::debug;

use crate::error::Result;
use crate::geometry::LabeledWall;

/// Renders classified walls into a two-layer projection drawing.
///
/// Walls whose facing is in the highlight set go to the highlight layer,
/// all others to the base layer. Each layer keeps the input wall order.
#[derive(Debug)]
pub struct RenderProjection<'a> {
    walls: &'a [LabeledWall],
    highlight: &'a HighlightSet,
    style: ProjectionStyle,
}

impl<'a> RenderProjection<'a> {
    /// Creates a new render with the default style.
    #[must_use]
    pub fn new(walls: &'a [LabeledWall], highlight: &'a HighlightSet) -> Self {
        Self {
            walls,
            highlight,
            style: ProjectionStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ProjectionStyle) -> Self {
        self.style = style;
        self
    }

    /// Executes the render.
    ///
    /// # Errors
    ///
    /// Returns `EmptyFloorplan` if there are no walls to frame.
    pub fn execute(&self) -> Result<Drawing> {
        let viewport = Viewport::of_walls(
            self.walls.iter().map(LabeledWall::wall),
            self.style.padding(),
        )?;

        let mut walls = Layer::new(WALLS_LAYER_ID);
        let mut highlight = Layer::new(HIGHLIGHT_LAYER_ID);
        for labeled in self.walls {
            let highlighted = self.highlight.contains(labeled.facing);
            let path = WallPath {
                corners: *labeled.wall().corners(),
                facing: labeled.facing,
                highlighted,
            };
            if highlighted {
                highlight.push(path);
            } else {
                walls.push(path);
            }
        }

        debug!(
            base = walls.paths().len(),
            highlighted = highlight.paths().len(),
            view_box = %viewport.view_box(),
            "rendered wall projection"
        );

        Ok(Drawing {
            viewport,
            walls,
            highlight,
            style: self.style.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::OrientisError;
    use crate::geometry::{Facing, Wall};
    use crate::math::Point2;
    use crate::test_support::init_tracing;

    fn labeled(raw: [(f64, f64); 4], facing: Facing) -> LabeledWall {
        let pts: Vec<Point2> = raw.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        LabeledWall::new(Wall::new(&pts).unwrap(), facing)
    }

    fn sample() -> Vec<LabeledWall> {
        vec![
            labeled([(0.0, 0.0), (10.0, 0.0), (10.0, 1.0), (0.0, 1.0)], Facing::Back),
            labeled([(0.0, 4.0), (10.0, 4.0), (10.0, 5.0), (0.0, 5.0)], Facing::Front),
            labeled([(2.0, 2.0), (8.0, 2.0), (8.0, 3.0), (2.0, 3.0)], Facing::Inner),
            labeled([(0.0, 1.0), (1.0, 1.0), (1.0, 4.0), (0.0, 4.0)], Facing::Left),
        ]
    }

    #[test]
    fn empty_highlight_puts_everything_on_base_layer() {
        init_tracing();
        let walls = sample();
        let drawing = RenderProjection::new(&walls, &HighlightSet::new()).execute().unwrap();
        assert_eq!(drawing.walls().paths().len(), 4);
        assert!(drawing.highlight().paths().is_empty());
    }

    #[test]
    fn all_labels_highlight_every_exterior_wall() {
        let walls = sample();
        let all = HighlightSet::all_exterior();
        let drawing = RenderProjection::new(&walls, &all).execute().unwrap();
        assert_eq!(drawing.highlight().paths().len(), 3);
        assert_eq!(drawing.walls().paths().len(), 1);
        assert_eq!(drawing.walls().paths()[0].facing, Facing::Inner);
        assert!(drawing.highlight().paths().iter().all(|p| p.highlighted));
    }

    #[test]
    fn partition_keeps_input_order() {
        let walls = sample();
        let set = HighlightSet::from_labels(["Left", "Back"]).unwrap();
        let drawing = RenderProjection::new(&walls, &set).execute().unwrap();
        let highlighted: Vec<Facing> = drawing.highlight().paths().iter().map(|p| p.facing).collect();
        assert_eq!(highlighted, vec![Facing::Back, Facing::Left]);
        let base: Vec<Facing> = drawing.walls().paths().iter().map(|p| p.facing).collect();
        assert_eq!(base, vec![Facing::Front, Facing::Inner]);
    }

    #[test]
    fn layers_are_base_then_highlight() {
        let walls = sample();
        let drawing = RenderProjection::new(&walls, &HighlightSet::new()).execute().unwrap();
        let ids: Vec<&str> = drawing.layers().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec![WALLS_LAYER_ID, HIGHLIGHT_LAYER_ID]);
    }

    #[test]
    fn viewport_uses_style_padding() {
        let walls = sample();
        let drawing = RenderProjection::new(&walls, &HighlightSet::new())
            .with_style(ProjectionStyle::new(5.0).unwrap())
            .execute()
            .unwrap();
        assert_eq!(drawing.viewport().view_box(), "-5 -5 20 15");
    }

    #[test]
    fn empty_wall_set_fails() {
        let err = RenderProjection::new(&[], &HighlightSet::new()).execute().unwrap_err();
        assert!(matches!(err, OrientisError::EmptyFloorplan));
    }

    #[test]
    fn svg_document_structure() {
        let walls = vec![
            labeled([(0.0, 0.0), (10.0, 0.0), (10.0, 1.0), (0.0, 1.0)], Facing::Back),
            labeled([(0.0, 4.0), (10.0, 4.0), (10.0, 5.0), (0.0, 5.0)], Facing::Front),
        ];
        let set = HighlightSet::from_labels(["Front"]).unwrap();
        let svg = RenderProjection::new(&walls, &set).execute().unwrap().to_svg();
        assert_eq!(
            svg,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-50 -50 110 105" style="background: transparent;">"#,
                r##"<g id="walls-layer"><path d="M 0 0 L 10 0 L 10 1 L 0 1 Z" fill="#000" stroke="#000" stroke-width="2"/></g>"##,
                r##"<g id="highlight-layer"><path d="M 0 4 L 10 4 L 10 5 L 0 5 Z" fill="#259DC9" stroke="#259DC9" stroke-width="2"/></g>"##,
                "</svg>"
            )
        );
    }

    #[test]
    fn svg_empty_layer_self_closes() {
        let walls = sample();
        let svg = RenderProjection::new(&walls, &HighlightSet::new()).execute().unwrap().to_svg();
        assert!(svg.contains(r#"<g id="highlight-layer"/>"#));
        assert_eq!(svg.matches("<path ").count(), 4);
    }
}
