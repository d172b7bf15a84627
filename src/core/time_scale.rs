use crate::core::scale::LinearScale;
use crate::core::types::{SamplePoint, Viewport, VisibleDomain};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Time axis model with separate full and visible ranges.
///
/// `full_*` tracks the raw fitted data range.
/// `visible_*` reflects user-driven pan/zoom/range changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    full_start: f64,
    full_end: f64,
    visible_start: f64,
    visible_end: f64,
}

impl TimeScale {
    /// Creates a scale with matching full and visible ranges.
    pub fn new(time_start: f64, time_end: f64) -> ChartResult<Self> {
        let normalized = normalize_range(time_start, time_end, 1.0)?;
        Ok(Self {
            full_start: normalized.0,
            full_end: normalized.1,
            visible_start: normalized.0,
            visible_end: normalized.1,
        })
    }

    /// Fits full and visible ranges to the sample span.
    pub fn from_samples(samples: &[SamplePoint]) -> ChartResult<Self> {
        let (min, max) = sample_time_span(samples)?;
        Self::new(min, max)
    }

    #[must_use]
    pub fn full_range(self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    #[must_use]
    pub fn visible_domain(self) -> VisibleDomain {
        VisibleDomain::new(self.visible_start, self.visible_end)
    }

    /// Overrides the visible range without modifying the full fitted range.
    pub fn set_visible_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        let normalized = normalize_range(start, end, 1e-9)?;
        self.visible_start = normalized.0;
        self.visible_end = normalized.1;
        Ok(())
    }

    pub fn reset_visible_range_to_full(&mut self) {
        self.visible_start = self.full_start;
        self.visible_end = self.full_end;
    }

    /// Pans the visible range by an additive time delta.
    pub fn pan_visible_by_delta(&mut self, delta_time: f64) -> ChartResult<()> {
        if !delta_time.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }

        self.visible_start += delta_time;
        self.visible_end += delta_time;
        Ok(())
    }

    /// Zooms visible range around an anchor time.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out.
    /// The resulting span is clamped by `min_span_absolute`.
    pub fn zoom_visible_by_factor(
        &mut self,
        factor: f64,
        anchor_time: f64,
        min_span_absolute: f64,
    ) -> ChartResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_time.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        if !min_span_absolute.is_finite() || min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom min span must be finite and > 0".to_owned(),
            ));
        }

        let current_span = self.visible_end - self.visible_start;
        let target_span = (current_span / factor).max(min_span_absolute);
        let left_ratio = (anchor_time - self.visible_start) / current_span;

        let new_start = anchor_time - left_ratio * target_span;
        let new_end = new_start + target_span;
        self.set_visible_range(new_start, new_end)
    }

    pub fn time_to_pixel(self, time: f64, viewport: Viewport) -> ChartResult<f64> {
        self.visible_linear()?.domain_to_pixel(time, viewport)
    }

    pub fn pixel_to_time(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        self.visible_linear()?.pixel_to_domain(pixel, viewport)
    }

    /// Infallible pixel-for-value lookup used on the paint path.
    ///
    /// May return a non-finite value before the axis is meaningfully scaled;
    /// the position mapper absorbs that instead of erroring mid-paint.
    #[must_use]
    pub fn pixel_for_time(self, time: f64, viewport: Viewport) -> f64 {
        match self.visible_linear() {
            Ok(linear) => linear.domain_to_pixel_unchecked(time, viewport),
            Err(_) => f64::NAN,
        }
    }

    fn visible_linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.visible_start, self.visible_end)
    }
}

pub(crate) fn sample_time_span(samples: &[SamplePoint]) -> ChartResult<(f64, f64)> {
    if samples.is_empty() {
        return Err(ChartError::InvalidData(
            "time scale cannot be built from empty data".to_owned(),
        ));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        if !sample.time.is_finite() {
            return Err(ChartError::InvalidData(
                "time values must be finite".to_owned(),
            ));
        }
        min = min.min(sample.time);
        max = max.max(sample.time);
    }

    Ok((min, max))
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
