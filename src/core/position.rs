use crate::core::types::PlotArea;

/// Normalizes an absolute pixel offset into a fraction of the plot width.
///
/// Total function: a `NaN` pixel (for example from an axis that has not been
/// scaled yet) maps to `0.0`, never to `NaN`.
#[must_use]
pub fn plot_fraction(pixel: f64, area: PlotArea) -> f64 {
    plot_fraction_or(pixel, area, 0.0)
}

/// Like [`plot_fraction`] but with a caller-chosen `NaN` substitute.
///
/// The session paint builder fails toward "assume fully in visible range":
/// `0.0` for the open boundary, `1.0` for the close boundary.
#[must_use]
pub fn plot_fraction_or(pixel: f64, area: PlotArea, nan_fallback: f64) -> f64 {
    let fraction = (pixel - area.left()) / area.width();
    if fraction.is_nan() { nan_fallback } else { fraction }
}
