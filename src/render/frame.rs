use crate::core::geometry::Vertex;
use crate::core::session::{Color, FillPaint};
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Backend-agnostic scene for one chart draw pass.
///
/// Both the interactive and the static path materialize their passes into
/// this structure, so a backend never observes which path produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    /// Resolved fill under the price line.
    pub fill: FillPaint,
    /// Absolute x extent a gradient fill spans, in device-independent pixels.
    pub fill_span_x: (f64, f64),
    pub fill_polygon: Vec<Vertex>,
    pub line_points: Vec<Vertex>,
    pub line_color: Color,
    pub line_width: f64,
}

impl RenderFrame {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.background.validate()?;
        self.fill.validate()?;
        self.line_color.validate()?;

        if !self.fill_span_x.0.is_finite()
            || !self.fill_span_x.1.is_finite()
            || self.fill_span_x.1 <= self.fill_span_x.0
        {
            return Err(ChartError::InvalidData(
                "fill span must be finite with end > start".to_owned(),
            ));
        }

        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }

        for vertex in self.fill_polygon.iter().chain(self.line_points.iter()) {
            if !vertex.x.is_finite() || !vertex.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "frame vertices must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fill_polygon.is_empty() && self.line_points.is_empty()
    }
}
