use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::core::session::Color;
use crate::core::types::{MarketWindow, PricePeriod, PricePoint, SamplePoint};
use crate::error::{ChartError, ChartResult};

/// Visual style of the price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub in_session_fill: Color,
    pub out_of_session_fill: Color,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            line_color: Color::SESSION_GREEN,
            line_width: 2.0,
            in_session_fill: Color::SESSION_GREEN_SOFT,
            out_of_session_fill: Color::TRANSPARENT,
        }
    }
}

/// Immutable bundle of dataset, display options and output dimensions.
///
/// Exactly one request value is the source of truth for both render paths:
/// the interactive chart re-reads the same request across repaints, while the
/// static rasterizer consumes one request per call. Nothing here is mutable
/// after construction, so neither consumer can corrupt state read by the
/// other.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRenderRequest {
    points: Vec<PricePoint>,
    samples: Vec<SamplePoint>,
    period: PricePeriod,
    market_window: Option<MarketWindow>,
    width_px: u32,
    height_px: u32,
    device_pixel_ratio: Option<f64>,
    background: Color,
    style: SeriesStyle,
}

impl ChartRenderRequest {
    /// Builds a request from raw points, canonicalizing the series:
    /// points are sorted by time and duplicate timestamps keep the last
    /// sample, so both render paths always see a strictly increasing series.
    pub fn new(points: Vec<PricePoint>, period: PricePeriod) -> ChartResult<Self> {
        let original_count = points.len();
        let points = canonicalize_points(points);
        debug!(
            original_count,
            canonical_count = points.len(),
            "constructed chart render request"
        );

        let mut samples = Vec::with_capacity(points.len());
        for point in &points {
            samples.push(SamplePoint::from_price_point(*point)?);
        }

        Ok(Self {
            points,
            samples,
            period,
            market_window: None,
            width_px: 800,
            height_px: 600,
            device_pixel_ratio: None,
            background: Color::WHITE,
            style: SeriesStyle::default(),
        })
    }

    #[must_use]
    pub fn with_market_window(mut self, window: MarketWindow) -> Self {
        self.market_window = Some(window);
        self
    }

    pub fn with_dimensions(mut self, width_px: u32, height_px: u32) -> ChartResult<Self> {
        if width_px == 0 || height_px == 0 {
            return Err(ChartError::InvalidViewport {
                width: width_px,
                height: height_px,
            });
        }
        self.width_px = width_px;
        self.height_px = height_px;
        Ok(self)
    }

    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> ChartResult<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "device pixel ratio must be finite and > 0".to_owned(),
            ));
        }
        self.device_pixel_ratio = Some(ratio);
        Ok(self)
    }

    pub fn with_background(mut self, background: Color) -> ChartResult<Self> {
        background.validate()?;
        self.background = background;
        Ok(self)
    }

    pub fn with_style(mut self, style: SeriesStyle) -> ChartResult<Self> {
        style.line_color.validate()?;
        style.in_session_fill.validate()?;
        style.out_of_session_fill.validate()?;
        if !style.line_width.is_finite() || style.line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.style = style;
        Ok(self)
    }

    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    #[must_use]
    pub fn samples(&self) -> &[SamplePoint] {
        &self.samples
    }

    #[must_use]
    pub fn period(&self) -> PricePeriod {
        self.period
    }

    #[must_use]
    pub fn market_window(&self) -> Option<MarketWindow> {
        self.market_window
    }

    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    #[must_use]
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> Option<f64> {
        self.device_pixel_ratio
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn style(&self) -> SeriesStyle {
        self.style
    }
}

fn canonicalize_points(mut points: Vec<PricePoint>) -> Vec<PricePoint> {
    let original_len = points.len();
    points.sort_by(|a, b| a.time.cmp(&b.time));

    let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
    let mut duplicate_count = 0_usize;
    for point in points {
        if let Some(last) = deduped.last_mut() {
            if point.time.cmp(&last.time) == Ordering::Equal {
                *last = point;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(point);
    }

    if duplicate_count > 0 {
        warn!(
            duplicate_count,
            original_count = original_len,
            canonical_count = deduped.len(),
            "dropped duplicate-timestamp points on request construction"
        );
    }
    deduped
}
