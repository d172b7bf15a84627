use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::api::frame_builder::{build_render_frame, resolve_fill_paint};
use crate::api::request::ChartRenderRequest;
use crate::core::price_scale::PriceScale;
use crate::core::session::FillPaint;
use crate::core::time_scale::TimeScale;
use crate::core::types::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

/// Deterministic state snapshot useful for regression tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub time_full_range: (f64, f64),
    pub time_visible_range: (f64, f64),
    pub price_domain: (f64, f64),
    pub plot_area: Option<PlotArea>,
    pub point_count: usize,
}

/// Live-viewport consumer of a [`ChartRenderRequest`].
///
/// The chart holds the request for its whole lifetime and re-reads it on
/// every paint pass together with the current viewport, visible range and
/// plot area. Until the first `resize` there is no plot area, and paint
/// resolution degrades to the neutral pre-layout color.
pub struct InteractiveChart<R: Renderer> {
    request: ChartRenderRequest,
    renderer: R,
    viewport: Viewport,
    plot_area: Option<PlotArea>,
    time_scale: TimeScale,
    price_scale: PriceScale,
}

impl<R: Renderer> InteractiveChart<R> {
    /// Creates a chart over the request's full dataset span.
    pub fn new(renderer: R, request: ChartRenderRequest) -> ChartResult<Self> {
        let time_scale = TimeScale::from_samples(request.samples())?;
        let price_scale = PriceScale::from_samples(request.samples())?;
        let viewport = Viewport::new(request.width_px(), request.height_px());

        Ok(Self {
            request,
            renderer,
            viewport,
            plot_area: None,
            time_scale,
            price_scale,
        })
    }

    #[must_use]
    pub fn request(&self) -> &ChartRenderRequest {
        &self.request
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> Option<PlotArea> {
        self.plot_area
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    /// Applies a viewport size change and (re)establishes the plot area.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }

        self.viewport = viewport;
        self.plot_area = Some(PlotArea::new(0.0, f64::from(width))?);
        trace!(width, height, "interactive chart resized");
        Ok(())
    }

    pub fn set_visible_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        self.time_scale.set_visible_range(start, end)
    }

    pub fn reset_visible_range(&mut self) {
        self.time_scale.reset_visible_range_to_full();
    }

    pub fn pan_by(&mut self, delta_seconds: f64) -> ChartResult<()> {
        self.time_scale.pan_visible_by_delta(delta_seconds)
    }

    pub fn zoom_by(&mut self, factor: f64, anchor_seconds: f64) -> ChartResult<()> {
        self.time_scale
            .zoom_visible_by_factor(factor, anchor_seconds, 1e-3)
    }

    /// Resolves the fill paint for the current axis state without drawing.
    ///
    /// This is the per-paint color resolution exposed to embedding chart
    /// engines that drive their own draw loop.
    #[must_use]
    pub fn resolve_fill(&self) -> FillPaint {
        resolve_fill_paint(&self.request, self.time_scale, self.viewport, self.plot_area)
    }

    /// Materializes the current pass without submitting it to the renderer.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        build_render_frame(
            &self.request,
            self.time_scale,
            self.price_scale,
            self.viewport,
            self.plot_area,
        )
    }

    /// Performs one paint pass over the current state.
    ///
    /// Each pass is a fresh, self-contained computation; callers re-invoke
    /// this on every relevant state change (zoom, resize, hover).
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        Ok(ChartSnapshot {
            viewport: self.viewport,
            time_full_range: self.time_scale.full_range(),
            time_visible_range: self.time_scale.visible_range(),
            price_domain: self.price_scale.domain(),
            plot_area: self.plot_area,
            point_count: self.request.points().len(),
        })
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(feature = "cairo-backend")]
impl<R: Renderer + crate::render::CairoContextRenderer> InteractiveChart<R> {
    /// Paints the current pass onto an external Cairo context supplied by a
    /// host toolkit.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
