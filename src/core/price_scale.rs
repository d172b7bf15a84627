use crate::core::types::{SamplePoint, Viewport};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Price axis model mapped to an inverted Y pixel axis.
///
/// The highest price maps to pixel row 0, the lowest to the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    domain_min: f64,
    domain_max: f64,
}

impl PriceScale {
    pub fn new(price_min: f64, price_max: f64) -> ChartResult<Self> {
        if !price_min.is_finite() || !price_max.is_finite() || price_min == price_max {
            return Err(ChartError::InvalidData(
                "price domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_min: price_min.min(price_max),
            domain_max: price_min.max(price_max),
        })
    }

    /// Fits the domain to the sample price extent.
    ///
    /// A single flat price still yields a usable scale by opening a minimal
    /// span around it.
    pub fn from_samples(samples: &[SamplePoint]) -> ChartResult<Self> {
        if samples.is_empty() {
            return Err(ChartError::InvalidData(
                "price scale cannot be built from empty data".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for sample in samples {
            if !sample.price.is_finite() {
                return Err(ChartError::InvalidData(
                    "price values must be finite".to_owned(),
                ));
            }
            min = min.min(sample.price);
            max = max.max(sample.price);
        }

        if min == max {
            let half = 0.5_f64.max(min.abs() * 0.005);
            min -= half;
            max += half;
        }

        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    pub fn price_to_pixel(self, price: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !price.is_finite() {
            return Err(ChartError::InvalidData("price must be finite".to_owned()));
        }

        let span = self.domain_max - self.domain_min;
        let normalized = (price - self.domain_min) / span;
        Ok((f64::from(viewport.height) - 1.0) * (1.0 - normalized))
    }

    pub fn pixel_to_price(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_max - self.domain_min;
        let normalized = 1.0 - pixel / (f64::from(viewport.height) - 1.0);
        Ok(self.domain_min + normalized * span)
    }
}
