use session_chart::core::{
    AreaGeometry, PriceScale, SamplePoint, TimeScale, Viewport, project_area_geometry,
};

#[test]
fn projection_returns_empty_for_empty_series() {
    let viewport = Viewport::new(800, 600);
    let time_scale = TimeScale::new(0.0, 10.0).expect("time scale");
    let price_scale = PriceScale::new(0.0, 100.0).expect("price scale");

    let geometry = project_area_geometry(&[], time_scale, price_scale, viewport).expect("project");
    assert!(geometry.line_points.is_empty());
    assert!(geometry.fill_polygon.is_empty());
}

#[test]
fn projection_is_deterministic() {
    let viewport = Viewport::new(1000, 500);
    let time_scale = TimeScale::new(0.0, 10.0).expect("time scale");
    let price_scale = PriceScale::new(0.0, 100.0).expect("price scale");
    let samples = vec![
        SamplePoint::new(0.0, 0.0),
        SamplePoint::new(5.0, 50.0),
        SamplePoint::new(10.0, 100.0),
    ];

    let geometry =
        project_area_geometry(&samples, time_scale, price_scale, viewport).expect("project");
    assert_eq!(geometry.line_points.len(), 3);
    assert_eq!(geometry.fill_polygon.len(), 6);

    assert!((geometry.line_points[0].x - 0.0).abs() <= 1e-9);
    assert!((geometry.line_points[0].y - 499.0).abs() <= 1e-9);
    assert!((geometry.line_points[1].x - 500.0).abs() <= 1e-9);
    assert!((geometry.line_points[1].y - 249.5).abs() <= 1e-9);
    assert!((geometry.line_points[2].x - 1000.0).abs() <= 1e-9);
    assert!((geometry.line_points[2].y - 0.0).abs() <= 1e-9);

    // Explicitly closed baseline polygon:
    // [baseline-start, line points..., baseline-end, baseline-start]
    assert!((geometry.fill_polygon[0].x - 0.0).abs() <= 1e-9);
    assert!((geometry.fill_polygon[0].y - 500.0).abs() <= 1e-9);
    assert!((geometry.fill_polygon[4].x - 1000.0).abs() <= 1e-9);
    assert!((geometry.fill_polygon[4].y - 500.0).abs() <= 1e-9);
    assert!((geometry.fill_polygon[5].x - 0.0).abs() <= 1e-9);
    assert!((geometry.fill_polygon[5].y - 500.0).abs() <= 1e-9);
}

#[test]
fn projection_respects_overridden_visible_range() {
    let viewport = Viewport::new(1000, 500);
    let mut time_scale = TimeScale::new(0.0, 100.0).expect("time scale");
    time_scale.set_visible_range(25.0, 75.0).expect("visible range");
    let price_scale = PriceScale::new(0.0, 100.0).expect("price scale");
    let samples = vec![
        SamplePoint::new(25.0, 25.0),
        SamplePoint::new(50.0, 50.0),
        SamplePoint::new(75.0, 75.0),
    ];

    let geometry =
        project_area_geometry(&samples, time_scale, price_scale, viewport).expect("project");
    assert!((geometry.line_points[0].x - 0.0).abs() <= 1e-9);
    assert!((geometry.line_points[1].x - 500.0).abs() <= 1e-9);
    assert!((geometry.line_points[2].x - 1000.0).abs() <= 1e-9);
}

#[test]
fn geometry_round_trips_through_json() {
    let viewport = Viewport::new(400, 300);
    let time_scale = TimeScale::new(0.0, 4.0).expect("time scale");
    let price_scale = PriceScale::new(0.0, 10.0).expect("price scale");
    let samples = vec![SamplePoint::new(1.0, 2.0), SamplePoint::new(3.0, 8.0)];

    let geometry =
        project_area_geometry(&samples, time_scale, price_scale, viewport).expect("project");
    let json = serde_json::to_string(&geometry).expect("serialize");
    let restored: AreaGeometry = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, geometry);
}
