use crate::api::frame_builder::build_render_frame;
use crate::api::request::ChartRenderRequest;
use crate::core::price_scale::PriceScale;
use crate::core::time_scale::TimeScale;
use crate::core::types::{PlotArea, Viewport};
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Assembles the single static paint pass for a request.
///
/// The visible domain is the full dataset span and the plot area is the full
/// viewport width, so a static render shows exactly what an interactive chart
/// shows before any pan or zoom.
pub fn build_static_frame(request: &ChartRenderRequest) -> ChartResult<RenderFrame> {
    let viewport = Viewport::new(request.width_px(), request.height_px());
    let time_scale = TimeScale::from_samples(request.samples())?;
    let price_scale = PriceScale::from_samples(request.samples())?;
    let plot_area = PlotArea::new(0.0, f64::from(request.width_px()))?;

    build_render_frame(request, time_scale, price_scale, viewport, Some(plot_area))
}

/// Rasterizes one request into encoded PNG bytes.
///
/// Allocates an isolated drawing surface per invocation, performs exactly one
/// paint pass and encodes it; no state is shared across calls, so concurrent
/// rasterizations cannot interfere. Encoder failures propagate to the caller
/// and are never retried.
#[cfg(feature = "cairo-backend")]
pub fn rasterize_png(request: ChartRenderRequest) -> ChartResult<Vec<u8>> {
    use crate::render::{CairoRasterizer, Renderer};
    use tracing::debug;

    let started = std::time::Instant::now();

    let frame = build_static_frame(&request)?;
    let pixel_ratio = request.device_pixel_ratio().unwrap_or(1.0);
    let mut rasterizer = CairoRasterizer::new(request.width_px(), request.height_px(), pixel_ratio)?;
    rasterizer.render(&frame)?;
    let bytes = rasterizer.into_png_bytes()?;

    debug!(
        width = request.width_px(),
        height = request.height_px(),
        pixel_ratio,
        bytes = bytes.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "rasterized chart render request to png"
    );
    Ok(bytes)
}
