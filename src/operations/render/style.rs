use crate::error::{ParameterError, Result};

/// Styling and framing parameters for projection drawings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionStyle {
    padding: f64,
    stroke_width: f64,
    base_color: String,
    accent_color: String,
}

impl ProjectionStyle {
    pub const DEFAULT_PADDING: f64 = 50.0;
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
    pub const DEFAULT_BASE_COLOR: &'static str = "#000";
    pub const DEFAULT_ACCENT_COLOR: &'static str = "#259DC9";

    /// Creates the default style with the given viewport padding.
    ///
    /// # Errors
    ///
    /// Returns an error if `padding` is negative or not finite.
    pub fn new(padding: f64) -> Result<Self> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(ParameterError::OutOfRange {
                parameter: "padding",
                value: padding,
                expected: "finite and non-negative",
            }
            .into());
        }
        Ok(Self {
            padding,
            ..Self::default()
        })
    }

    /// Replaces the stroke width.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn with_stroke_width(mut self, width: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ParameterError::OutOfRange {
                parameter: "stroke width",
                value: width,
                expected: "finite and positive",
            }
            .into());
        }
        self.stroke_width = width;
        Ok(self)
    }

    /// Replaces the fill and stroke colours of base and highlighted walls.
    #[must_use]
    pub fn with_colors(mut self, base: impl Into<String>, accent: impl Into<String>) -> Self {
        self.base_color = base.into();
        self.accent_color = accent.into();
        self
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    #[must_use]
    pub fn base_color(&self) -> &str {
        &self.base_color
    }

    #[must_use]
    pub fn accent_color(&self) -> &str {
        &self.accent_color
    }

    /// Colour for a wall path depending on whether it is highlighted.
    #[must_use]
    pub fn color(&self, highlighted: bool) -> &str {
        if highlighted {
            &self.accent_color
        } else {
            &self.base_color
        }
    }
}

impl Default for ProjectionStyle {
    fn default() -> Self {
        Self {
            padding: Self::DEFAULT_PADDING,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            base_color: Self::DEFAULT_BASE_COLOR.to_owned(),
            accent_color: Self::DEFAULT_ACCENT_COLOR.to_owned(),
        }
    }
}
