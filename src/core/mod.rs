pub mod geometry;
pub mod position;
pub mod price_scale;
pub mod scale;
pub mod session;
pub mod time_scale;
pub mod types;

pub use geometry::{AreaGeometry, Vertex, project_area_geometry};
pub use position::{plot_fraction, plot_fraction_or};
pub use price_scale::PriceScale;
pub use scale::LinearScale;
pub use session::{
    Color, FillPaint, GradientSpec, GradientStop, PaintContext, PixelLookup, SessionPaint,
};
pub use time_scale::TimeScale;
pub use types::{
    MarketWindow, PlotArea, PricePeriod, PricePoint, SamplePoint, Viewport, VisibleDomain,
    datetime_to_unix_seconds, decimal_to_f64,
};
