use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeZone, Utc};
use session_chart::api::ScalePixels;
use session_chart::core::{
    Color, FillPaint, MarketWindow, PaintContext, PixelLookup, PlotArea, PricePeriod,
    SessionPaint, TimeScale, Viewport, VisibleDomain, datetime_to_unix_seconds,
};

const IN_COLOR: Color = Color::SESSION_GREEN_SOFT;
const OUT_COLOR: Color = Color::TRANSPARENT;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 6, 15, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}

fn day_scale(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeScale {
    TimeScale::new(
        datetime_to_unix_seconds(start),
        datetime_to_unix_seconds(end),
    )
    .expect("time scale")
}

struct NanPixels;

impl PixelLookup for NanPixels {
    fn pixel_for_time(&self, _time_seconds: f64) -> f64 {
        f64::NAN
    }
}

fn resolve_one_day(
    window: Option<MarketWindow>,
    domain_start: DateTime<Utc>,
    domain_end: DateTime<Utc>,
) -> FillPaint {
    let time_scale = day_scale(domain_start, domain_end);
    let viewport = Viewport::new(1000, 500);
    let pixels = ScalePixels {
        time_scale,
        viewport,
    };
    let paint = SessionPaint::new(PricePeriod::OneDay, window, OUT_COLOR, IN_COLOR);
    paint.resolve(&PaintContext {
        plot_area: Some(PlotArea::new(0.0, 1000.0).expect("plot area")),
        visible_domain: time_scale.visible_domain(),
        pixels: &pixels,
    })
}

#[test]
fn window_inside_domain_yields_six_hard_transition_stops() {
    let window = MarketWindow::new(at(9, 30), at(16, 0));
    let paint = resolve_one_day(Some(window), at(8, 0), at(18, 0));

    let FillPaint::LinearGradientX(spec) = paint else {
        panic!("expected gradient, got {paint:?}");
    };
    spec.validate().expect("ordered stops");

    let stops = spec.stops();
    assert_eq!(stops.len(), 6);

    // 09:30 is 1.5h into a 10h domain, 16:00 is 8h in.
    let open_fraction = 1.5 / 10.0;
    let close_fraction = 8.0 / 10.0;

    assert_abs_diff_eq!(stops[0].offset, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(stops[1].offset, open_fraction, epsilon = 1e-9);
    assert_abs_diff_eq!(stops[2].offset, open_fraction, epsilon = 1e-9);
    assert_abs_diff_eq!(stops[3].offset, close_fraction, epsilon = 1e-9);
    assert_abs_diff_eq!(stops[4].offset, close_fraction, epsilon = 1e-9);
    assert_abs_diff_eq!(stops[5].offset, 1.0, epsilon = 1e-9);

    assert_eq!(stops[0].color, OUT_COLOR);
    assert_eq!(stops[1].color, OUT_COLOR);
    assert_eq!(stops[2].color, IN_COLOR);
    assert_eq!(stops[3].color, IN_COLOR);
    assert_eq!(stops[4].color, OUT_COLOR);
    assert_eq!(stops[5].color, OUT_COLOR);

    assert!(0.0 < stops[1].offset && stops[1].offset < stops[3].offset && stops[3].offset < 1.0);
}

#[test]
fn absent_window_yields_two_out_of_session_stops() {
    let paint = resolve_one_day(None, at(8, 0), at(18, 0));

    let FillPaint::LinearGradientX(spec) = paint else {
        panic!("expected gradient, got {paint:?}");
    };
    let stops = spec.stops();
    assert_eq!(stops.len(), 2);
    assert_abs_diff_eq!(stops[0].offset, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(stops[1].offset, 1.0, epsilon = 1e-12);
    assert_eq!(stops[0].color, OUT_COLOR);
    assert_eq!(stops[1].color, OUT_COLOR);
}

#[test]
fn market_already_open_at_left_edge_starts_in_session_at_zero() {
    // Domain starts at 10:00, after the 09:30 open.
    let window = MarketWindow::new(at(9, 30), at(16, 0));
    let paint = resolve_one_day(Some(window), at(10, 0), at(18, 0));

    let FillPaint::LinearGradientX(spec) = paint else {
        panic!("expected gradient, got {paint:?}");
    };
    let stops = spec.stops();
    assert_eq!(stops.len(), 4);
    assert_abs_diff_eq!(stops[0].offset, 0.0, epsilon = 1e-12);
    assert_eq!(stops[0].color, IN_COLOR);
    // 16:00 is 6h into an 8h domain.
    assert_abs_diff_eq!(stops[1].offset, 0.75, epsilon = 1e-9);
    assert_eq!(stops[1].color, IN_COLOR);
    assert_eq!(stops[2].color, OUT_COLOR);
    assert_eq!(stops[3].color, OUT_COLOR);
}

#[test]
fn market_still_open_at_right_edge_ends_in_session_at_one() {
    // Domain ends at 15:00, before the 16:00 close.
    let window = MarketWindow::new(at(9, 30), at(16, 0));
    let paint = resolve_one_day(Some(window), at(8, 0), at(15, 0));

    let FillPaint::LinearGradientX(spec) = paint else {
        panic!("expected gradient, got {paint:?}");
    };
    let stops = spec.stops();
    assert_eq!(stops.len(), 4);
    assert_eq!(stops[3].color, IN_COLOR);
    assert_abs_diff_eq!(stops[3].offset, 1.0, epsilon = 1e-12);
}

#[test]
fn fully_in_session_domain_is_a_two_stop_in_session_gradient() {
    let window = MarketWindow::new(at(9, 30), at(16, 0));
    let paint = resolve_one_day(Some(window), at(10, 0), at(15, 0));

    let FillPaint::LinearGradientX(spec) = paint else {
        panic!("expected gradient, got {paint:?}");
    };
    let stops = spec.stops();
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].color, IN_COLOR);
    assert_eq!(stops[1].color, IN_COLOR);
}

#[test]
fn missing_plot_area_returns_gray_sentinel_for_every_configuration() {
    let pixels = NanPixels;
    let context = PaintContext {
        plot_area: None,
        visible_domain: VisibleDomain::new(0.0, 1.0),
        pixels: &pixels,
    };

    for period in [
        PricePeriod::OneDay,
        PricePeriod::OneWeek,
        PricePeriod::ThreeMonths,
        PricePeriod::OneYear,
        PricePeriod::FiveYears,
        PricePeriod::All,
    ] {
        let window = MarketWindow::new(at(9, 30), at(16, 0));
        let paint = SessionPaint::new(period, Some(window), OUT_COLOR, IN_COLOR);
        assert_eq!(
            paint.resolve(&context),
            FillPaint::Solid(Color::LAYOUT_PENDING_GRAY)
        );
    }
}

#[test]
fn non_one_day_periods_always_resolve_flat_in_session_color() {
    let time_scale = day_scale(at(8, 0), at(18, 0));
    let viewport = Viewport::new(1000, 500);
    let pixels = ScalePixels {
        time_scale,
        viewport,
    };
    let context = PaintContext {
        plot_area: Some(PlotArea::new(0.0, 1000.0).expect("plot area")),
        visible_domain: time_scale.visible_domain(),
        pixels: &pixels,
    };

    for period in [
        PricePeriod::OneWeek,
        PricePeriod::ThreeMonths,
        PricePeriod::OneYear,
        PricePeriod::FiveYears,
        PricePeriod::All,
    ] {
        let window = MarketWindow::new(at(9, 30), at(16, 0));
        let paint = SessionPaint::new(period, Some(window), OUT_COLOR, IN_COLOR);
        assert_eq!(paint.resolve(&context), FillPaint::Solid(IN_COLOR));
    }
}

#[test]
fn nan_pixel_lookup_falls_back_to_gradient_endpoints() {
    let pixels = NanPixels;
    let window = MarketWindow::new(at(9, 30), at(16, 0));
    let paint = SessionPaint::new(PricePeriod::OneDay, Some(window), OUT_COLOR, IN_COLOR);

    let resolved = paint.resolve(&PaintContext {
        plot_area: Some(PlotArea::new(0.0, 1000.0).expect("plot area")),
        visible_domain: VisibleDomain::new(
            datetime_to_unix_seconds(at(8, 0)),
            datetime_to_unix_seconds(at(18, 0)),
        ),
        pixels: &pixels,
    });

    let FillPaint::LinearGradientX(spec) = resolved else {
        panic!("expected gradient, got {resolved:?}");
    };
    spec.validate().expect("ordered stops");

    let stops = spec.stops();
    assert_eq!(stops.len(), 6);
    // Open boundary fails toward 0, close boundary toward 1.
    assert_abs_diff_eq!(stops[1].offset, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(stops[3].offset, 1.0, epsilon = 1e-12);
}

#[test]
fn inverted_window_degenerates_to_ordered_single_boundary() {
    // Close before open: the builder must still emit non-decreasing offsets.
    let window = MarketWindow::new(at(16, 0), at(9, 30));
    let paint = resolve_one_day(Some(window), at(8, 0), at(18, 0));

    let FillPaint::LinearGradientX(spec) = paint else {
        panic!("expected gradient, got {paint:?}");
    };
    spec.validate().expect("ordered stops despite inverted window");

    let stops = spec.stops();
    assert_eq!(stops.len(), 6);
    // The close boundary collapses onto the open boundary at 16:00 (0.8).
    assert_abs_diff_eq!(stops[2].offset, 0.8, epsilon = 1e-9);
    assert_abs_diff_eq!(stops[3].offset, 0.8, epsilon = 1e-9);
}

#[test]
fn unbounded_visible_domain_clamps_boundaries_into_unit_range() {
    let time_scale = day_scale(at(8, 0), at(18, 0));
    let viewport = Viewport::new(1000, 500);
    let pixels = ScalePixels {
        time_scale,
        viewport,
    };
    let window = MarketWindow::new(at(9, 30), at(16, 0));
    let paint = SessionPaint::new(PricePeriod::OneDay, Some(window), OUT_COLOR, IN_COLOR);

    let resolved = paint.resolve(&PaintContext {
        plot_area: Some(PlotArea::new(0.0, 1000.0).expect("plot area")),
        visible_domain: VisibleDomain::new(f64::NEG_INFINITY, f64::INFINITY),
        pixels: &pixels,
    });

    let FillPaint::LinearGradientX(spec) = resolved else {
        panic!("expected gradient, got {resolved:?}");
    };
    spec.validate().expect("clamped stops");
}
