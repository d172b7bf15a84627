use cairo::{Context, Format, ImageSurface, LinearGradient};

use crate::core::session::{Color, FillPaint};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub fills_drawn: usize,
    pub lines_stroked: usize,
}

/// Optional extension trait for renderers that can draw into an external
/// Cairo context (for example a host toolkit's drawing-area callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo raster backend.
///
/// Each rasterizer owns one offscreen ARGB32 image surface sized by the
/// device-pixel ratio; the surface is released when the rasterizer drops,
/// on success and on every error path alike. It supports two modes:
/// - offscreen rendering plus PNG encoding through `into_png_bytes`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRasterizer {
    surface: ImageSurface,
    pixel_ratio: f64,
    last_stats: CairoRenderStats,
}

impl CairoRasterizer {
    pub fn new(width: u32, height: u32, pixel_ratio: f64) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel ratio must be finite and > 0".to_owned(),
            ));
        }

        let device_width = (f64::from(width) * pixel_ratio).round() as i32;
        let device_height = (f64::from(height) * pixel_ratio).round() as i32;
        if device_width <= 0 || device_height <= 0 {
            return Err(ChartError::InvalidData(
                "scaled surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, device_width, device_height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            pixel_ratio,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface content as PNG bytes, consuming self.
    pub fn into_png_bytes(self) -> ChartResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.surface
            .write_to_png(&mut bytes)
            .map_err(|err| ChartError::Render(format!("failed to encode png: {err}")))?;
        Ok(bytes)
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to paint background", err))?;

        let mut stats = CairoRenderStats::default();

        if frame.fill_polygon.len() >= 3 {
            context.new_path();
            context.move_to(frame.fill_polygon[0].x, frame.fill_polygon[0].y);
            for vertex in &frame.fill_polygon[1..] {
                context.line_to(vertex.x, vertex.y);
            }
            context.close_path();

            apply_fill_paint(context, &frame.fill, frame.fill_span_x)?;
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill area", err))?;
            stats.fills_drawn += 1;
        }

        if frame.line_points.len() >= 2 {
            apply_color(context, frame.line_color);
            context.set_line_width(frame.line_width);
            context.new_path();
            context.move_to(frame.line_points[0].x, frame.line_points[0].y);
            for vertex in &frame.line_points[1..] {
                context.line_to(vertex.x, vertex.y);
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke price line", err))?;
            stats.lines_stroked += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRasterizer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.scale(self.pixel_ratio, self.pixel_ratio);
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRasterizer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_fill_paint(context: &Context, fill: &FillPaint, span_x: (f64, f64)) -> ChartResult<()> {
    match fill {
        FillPaint::Solid(color) => {
            apply_color(context, *color);
            Ok(())
        }
        FillPaint::LinearGradientX(spec) => {
            let gradient = LinearGradient::new(span_x.0, 0.0, span_x.1, 0.0);
            for stop in spec.stops() {
                gradient.add_color_stop_rgba(
                    stop.offset,
                    stop.color.red,
                    stop.color.green,
                    stop.color.blue,
                    stop.color.alpha,
                );
            }
            context
                .set_source(&gradient)
                .map_err(|err| map_backend_error("failed to set gradient source", err))
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Render(format!("{prefix}: {err}"))
}
