mod frame_builder;
mod interactive;
mod rasterize;
mod request;

pub use frame_builder::{ScalePixels, build_render_frame, resolve_fill_paint};
pub use interactive::{ChartSnapshot, InteractiveChart};
#[cfg(feature = "cairo-backend")]
pub use rasterize::rasterize_png;
pub use rasterize::build_static_frame;
pub use request::{ChartRenderRequest, SeriesStyle};
