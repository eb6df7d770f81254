use tracing::debug;

use super::classify::{ClassifyParams, ClassifyWalls};
use super::render::{HighlightSet, ProjectionStyle, RenderProjection, Viewport};
use crate::error::Result;
use crate::geometry::{Floorplan, LabeledWall};

/// A finished wall projection, ready to hand to a page or asset sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Standalone SVG markup.
    pub markup: String,
    /// Coordinate window of the markup.
    pub viewport: Viewport,
    /// Per-wall classification, in floorplan order.
    pub walls: Vec<LabeledWall>,
}

/// Classifies a floorplan and renders it with the selected facings
/// highlighted.
#[derive(Debug)]
pub struct WallProjection<'a> {
    floorplan: &'a Floorplan,
    highlight: HighlightSet,
    params: ClassifyParams,
    style: ProjectionStyle,
}

impl<'a> WallProjection<'a> {
    #[must_use]
    pub fn new(floorplan: &'a Floorplan, highlight: HighlightSet) -> Self {
        Self {
            floorplan,
            highlight,
            params: ClassifyParams::default(),
            style: ProjectionStyle::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: ClassifyParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ProjectionStyle) -> Self {
        self.style = style;
        self
    }

    /// Executes classification, rendering and serialization.
    ///
    /// # Errors
    ///
    /// Propagates classification and render errors; `EmptyFloorplan` if the
    /// floorplan has no walls.
    pub fn execute(&self) -> Result<Projection> {
        let walls = ClassifyWalls::new(self.floorplan)
            .with_params(self.params)
            .execute()?;
        let drawing = RenderProjection::new(&walls, &self.highlight)
            .with_style(self.style.clone())
            .execute()?;
        let markup = drawing.to_svg();
        debug!(bytes = markup.len(), "wall projection ready");
        Ok(Projection {
            markup,
            viewport: *drawing.viewport(),
            walls,
        })
    }
}

impl WallProjection<'_> {
    /// Projects a `{"walls": ...}` document with the given facing labels
    /// highlighted, using default parameters.
    ///
    /// # Errors
    ///
    /// Returns `Document` or `InvalidGeometry` for a bad document,
    /// `InvalidParameter` for an unknown label, and `EmptyFloorplan` if the
    /// document has no walls.
    pub fn from_json<I, S>(document: &str, labels: I) -> Result<Projection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let floorplan = Floorplan::from_json(document)?;
        let highlight = HighlightSet::from_labels(labels)?;
        WallProjection::new(&floorplan, highlight).execute()
    }
}
