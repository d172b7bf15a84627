use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One price observation at the public API edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePoint {
    pub time: DateTime<Utc>,
    pub price: Decimal,
}

impl PricePoint {
    #[must_use]
    pub fn new(time: DateTime<Utc>, price: Decimal) -> Self {
        Self { time, price }
    }
}

/// Internal f64 sample used by scales, projection and paint resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub time: f64,
    pub price: f64,
}

impl SamplePoint {
    #[must_use]
    pub fn new(time: f64, price: f64) -> Self {
        Self { time, price }
    }

    pub fn from_price_point(point: PricePoint) -> ChartResult<Self> {
        Ok(Self {
            time: datetime_to_unix_seconds(point.time),
            price: decimal_to_f64(point.price, "price")?,
        })
    }
}

/// Display granularity of the price series.
///
/// Only `OneDay` charts distinguish in-session from out-of-session time;
/// every other period renders a single flat fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricePeriod {
    #[serde(rename = "1-day")]
    OneDay,
    #[serde(rename = "1-week")]
    OneWeek,
    #[serde(rename = "3-months")]
    ThreeMonths,
    #[serde(rename = "1-year")]
    OneYear,
    #[serde(rename = "5-years")]
    FiveYears,
    #[serde(rename = "all")]
    All,
}

/// Market open/close instants for the displayed trading day.
///
/// Carried as `Option<MarketWindow>` by callers; absence means the session
/// boundaries are unknown, which the paint layer treats conservatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketWindow {
    pub open: DateTime<Utc>,
    pub close: DateTime<Utc>,
}

impl MarketWindow {
    #[must_use]
    pub fn new(open: DateTime<Utc>, close: DateTime<Utc>) -> Self {
        Self { open, close }
    }

    #[must_use]
    pub fn open_seconds(self) -> f64 {
        datetime_to_unix_seconds(self.open)
    }

    #[must_use]
    pub fn close_seconds(self) -> f64 {
        datetime_to_unix_seconds(self.close)
    }
}

/// Currently visible horizontal axis range, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleDomain {
    pub min: f64,
    pub max: f64,
}

impl VisibleDomain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Horizontal pixel extent of the rectangle data is drawn into.
///
/// `width()` is derived from the bounds, so the `right > left` invariant
/// also guarantees a strictly positive width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    left: f64,
    right: f64,
}

impl PlotArea {
    pub fn new(left: f64, right: f64) -> ChartResult<Self> {
        if !left.is_finite() || !right.is_finite() || right <= left {
            return Err(ChartError::InvalidData(
                "plot area bounds must be finite with right > left".to_owned(),
            ));
        }
        Ok(Self { left, right })
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }
}
