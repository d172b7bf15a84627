use crate::api::ChartRenderRequest;
use crate::core::geometry::project_area_geometry;
use crate::core::price_scale::PriceScale;
use crate::core::session::{FillPaint, PaintContext, PixelLookup, SessionPaint};
use crate::core::time_scale::TimeScale;
use crate::core::types::{PlotArea, Viewport};
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Pixel-for-value lookup backed by the live time scale.
pub struct ScalePixels {
    pub time_scale: TimeScale,
    pub viewport: Viewport,
}

impl PixelLookup for ScalePixels {
    fn pixel_for_time(&self, time_seconds: f64) -> f64 {
        self.time_scale.pixel_for_time(time_seconds, self.viewport)
    }
}

/// Resolves the fill paint for one pass over the given axis state.
#[must_use]
pub fn resolve_fill_paint(
    request: &ChartRenderRequest,
    time_scale: TimeScale,
    viewport: Viewport,
    plot_area: Option<PlotArea>,
) -> FillPaint {
    let style = request.style();
    let paint = SessionPaint::new(
        request.period(),
        request.market_window(),
        style.out_of_session_fill,
        style.in_session_fill,
    );
    let pixels = ScalePixels {
        time_scale,
        viewport,
    };
    paint.resolve(&PaintContext {
        plot_area,
        visible_domain: time_scale.visible_domain(),
        pixels: &pixels,
    })
}

/// Materializes one draw pass into a backend-agnostic frame.
///
/// This is the single place both render paths assemble geometry and paint,
/// which is what makes their output equivalent for the same request and axis
/// state.
pub fn build_render_frame(
    request: &ChartRenderRequest,
    time_scale: TimeScale,
    price_scale: PriceScale,
    viewport: Viewport,
    plot_area: Option<PlotArea>,
) -> ChartResult<RenderFrame> {
    let geometry = project_area_geometry(request.samples(), time_scale, price_scale, viewport)?;
    let fill = resolve_fill_paint(request, time_scale, viewport, plot_area);
    let style = request.style();

    let fill_span_x = match plot_area {
        Some(area) => (area.left(), area.right()),
        None => (0.0, f64::from(viewport.width)),
    };

    Ok(RenderFrame {
        viewport,
        background: request.background(),
        fill,
        fill_span_x,
        fill_polygon: geometry.fill_polygon,
        line_points: geometry.line_points,
        line_color: style.line_color,
        line_width: style.line_width,
    })
}
