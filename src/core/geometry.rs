use crate::core::price_scale::PriceScale;
use crate::core::time_scale::TimeScale;
use crate::core::types::{SamplePoint, Viewport};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Vertex in pixel coordinates used by deterministic geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

/// Deterministic geometry for the filled price line.
///
/// `line_points` follows the mapped samples.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<Vertex>,
    pub fill_polygon: Vec<Vertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects price samples into deterministic area geometry.
///
/// Baseline is anchored at the viewport bottom so the fill always closes
/// against the lower chart edge, matching the filled-line presentation.
pub fn project_area_geometry(
    samples: &[SamplePoint],
    time_scale: TimeScale,
    price_scale: PriceScale,
    viewport: Viewport,
) -> ChartResult<AreaGeometry> {
    if samples.is_empty() {
        return Ok(AreaGeometry::empty());
    }

    let mut line_points = Vec::with_capacity(samples.len());
    for sample in samples {
        let x = time_scale.time_to_pixel(sample.time, viewport)?;
        let y = price_scale.price_to_pixel(sample.price, viewport)?;
        line_points.push(Vertex { x, y });
    }

    let baseline_y = f64::from(viewport.height);
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(Vertex {
        x: first_x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(Vertex {
        x: last_x,
        y: baseline_y,
    });
    // Explicitly repeat the first baseline vertex so backends can render this
    // as a closed polygon without implicit closure rules.
    fill_polygon.push(Vertex {
        x: first_x,
        y: baseline_y,
    });

    Ok(AreaGeometry {
        line_points,
        fill_polygon,
    })
}
