use smallvec::SmallVec;

use crate::core::position::plot_fraction_or;
use crate::core::types::{MarketWindow, PlotArea, PricePeriod, VisibleDomain};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Fully transparent out-of-session default.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Neutral sentinel returned while the drawing surface has no layout yet.
    pub const LAYOUT_PENDING_GRAY: Self =
        Self::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);

    /// Line color of the price series.
    pub const SESSION_GREEN: Self = Self::rgb(105.0 / 255.0, 209.0 / 255.0, 164.0 / 255.0);

    /// Translucent in-session fill under the price line.
    pub const SESSION_GREEN_SOFT: Self =
        Self::rgba(105.0 / 255.0, 209.0 / 255.0, 164.0 / 255.0, 0.2);

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One stop of a horizontal gradient, offset as a fraction of plot width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Ordered horizontal gradient stops.
///
/// The session builder never emits more than six stops, hence the inline
/// capacity. Offsets are kept non-decreasing in `[0, 1]`; a hard color
/// transition is expressed as two stops sharing one offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradientSpec {
    stops: SmallVec<[GradientStop; 6]>,
}

impl GradientSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_stop(&mut self, offset: f64, color: Color) {
        self.stops.push(GradientStop { offset, color });
    }

    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn validate(&self) -> ChartResult<()> {
        let mut previous = 0.0_f64;
        for stop in &self.stops {
            if !stop.offset.is_finite() || !(0.0..=1.0).contains(&stop.offset) {
                return Err(ChartError::InvalidData(
                    "gradient stop offset must be finite and in [0, 1]".to_owned(),
                ));
            }
            if stop.offset < previous {
                return Err(ChartError::InvalidData(
                    "gradient stop offsets must be non-decreasing".to_owned(),
                ));
            }
            previous = stop.offset;
            stop.color.validate()?;
        }
        Ok(())
    }
}

/// Resolved fill paint for one draw pass.
#[derive(Debug, Clone, PartialEq)]
pub enum FillPaint {
    Solid(Color),
    /// Horizontal gradient spanning the plot area left-to-right.
    LinearGradientX(GradientSpec),
}

impl FillPaint {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::LinearGradientX(spec) => spec.validate(),
        }
    }
}

/// Pixel-for-value query supplied by the axis subsystem.
///
/// Read-only; may return non-finite values before the axis is scaled.
pub trait PixelLookup {
    fn pixel_for_time(&self, time_seconds: f64) -> f64;
}

/// Live render-pass state the paint resolution reads.
pub struct PaintContext<'a> {
    pub plot_area: Option<PlotArea>,
    pub visible_domain: VisibleDomain,
    pub pixels: &'a dyn PixelLookup,
}

/// Market-session coloring strategy for the price line fill.
///
/// One value of this type captures the coloring configuration; paint-time
/// state arrives through [`PaintContext`] on every resolve call, so repeated
/// repaints never observe stale captured state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionPaint {
    period: PricePeriod,
    market_window: Option<MarketWindow>,
    out_of_session: Color,
    in_session: Color,
}

impl SessionPaint {
    #[must_use]
    pub fn new(
        period: PricePeriod,
        market_window: Option<MarketWindow>,
        out_of_session: Color,
        in_session: Color,
    ) -> Self {
        Self {
            period,
            market_window,
            out_of_session,
            in_session,
        }
    }

    /// Resolves the fill for the current paint pass.
    ///
    /// Never fails: missing layout degrades to the gray sentinel, a missing
    /// market window to an out-of-session-only gradient, and non-finite
    /// boundary positions to the nearest gradient endpoint.
    #[must_use]
    pub fn resolve(&self, context: &PaintContext<'_>) -> FillPaint {
        let Some(area) = context.plot_area else {
            // Expected transient state before the first layout pass.
            return FillPaint::Solid(Color::LAYOUT_PENDING_GRAY);
        };

        if self.period != PricePeriod::OneDay {
            // Multi-day and aggregate periods do not distinguish intraday
            // session boundaries.
            return FillPaint::Solid(self.in_session);
        }

        let mut gradient = GradientSpec::new();
        match self.market_window {
            None => {
                // Session boundaries unknown: conservatively treat the whole
                // visible range as out-of-session.
                gradient.push_stop(0.0, self.out_of_session);
                gradient.push_stop(1.0, self.out_of_session);
            }
            Some(window) => {
                let mut session_start = 0.0_f64;

                if window.open_seconds() > context.visible_domain.min {
                    let open_px = context.pixels.pixel_for_time(window.open_seconds());
                    let open_fraction = plot_fraction_or(open_px, area, 0.0).clamp(0.0, 1.0);
                    gradient.push_stop(0.0, self.out_of_session);
                    gradient.push_stop(open_fraction, self.out_of_session);
                    gradient.push_stop(open_fraction, self.in_session);
                    session_start = open_fraction;
                } else {
                    // Market already open at the left edge.
                    gradient.push_stop(0.0, self.in_session);
                }

                if window.close_seconds() < context.visible_domain.max {
                    let close_px = context.pixels.pixel_for_time(window.close_seconds());
                    // The lower bound keeps stop offsets non-decreasing even
                    // for an inverted window; it degenerates to a single
                    // boundary instead of an invalid gradient.
                    let close_fraction = plot_fraction_or(close_px, area, 1.0)
                        .clamp(0.0, 1.0)
                        .max(session_start);
                    gradient.push_stop(close_fraction, self.in_session);
                    gradient.push_stop(close_fraction, self.out_of_session);
                    gradient.push_stop(1.0, self.out_of_session);
                } else {
                    // Market still open at the right edge.
                    gradient.push_stop(1.0, self.in_session);
                }
            }
        }

        FillPaint::LinearGradientX(gradient)
    }
}
