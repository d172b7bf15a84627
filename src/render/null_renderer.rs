use crate::core::session::FillPaint;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content and records what the last pass resolved,
/// so tests can assert paint decisions without a raster backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_fill: Option<FillPaint>,
    pub last_line_point_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_fill = Some(frame.fill.clone());
        self.last_line_point_count = frame.line_points.len();
        self.render_count += 1;
        Ok(())
    }
}
