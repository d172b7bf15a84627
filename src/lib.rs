//! session-chart: market-session-aware price chart core.
//!
//! This crate implements the coloring and geometry logic behind a price line
//! chart that must look identical whether it is drawn interactively into a
//! live viewport or rasterized once on a server into a static PNG. The
//! non-trivial part is the session gradient: on one-day charts the line fill
//! switches color at the pixel positions of market open and close, with hard
//! transitions rather than blends.
//!
//! Both render paths consume the same immutable [`api::ChartRenderRequest`]
//! and build frames through the same projection and paint code, so they agree
//! on gradient stops and fallback colors by construction.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartRenderRequest, InteractiveChart, SeriesStyle};
pub use error::{ChartError, ChartResult};
