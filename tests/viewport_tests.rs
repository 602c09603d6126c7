use std::rc::Rc;

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use graphview_rs::core::{
    GraphViewport, OhlcBar, OhlcProvider, TimeWindowViewport, VecOhlcProvider,
};
use rust_decimal::Decimal;

fn bar(time: f64, low: f64, high: f64) -> OhlcBar {
    OhlcBar::new(time, low, high, low, high).expect("valid bar")
}

fn source() -> Rc<VecOhlcProvider> {
    Rc::new(
        VecOhlcProvider::new(vec![
            bar(0.0, 10.0, 20.0),
            bar(100.0, 15.0, 30.0),
            bar(200.0, 5.0, 12.0),
            bar(300.0, 40.0, 50.0),
        ])
        .expect("sorted bars"),
    )
}

#[test]
fn fit_to_source_pads_time_and_price() {
    let viewport = TimeWindowViewport::fit_to_source(source(), 0.1).expect("fit");

    assert_relative_eq!(viewport.view_begin(), -30.0, epsilon = 1e-9);
    assert_relative_eq!(viewport.view_end(), 330.0, epsilon = 1e-9);
    let (min, max) = viewport.ranges().price_window();
    assert_relative_eq!(min, 0.5, epsilon = 1e-9);
    assert_relative_eq!(max, 54.5, epsilon = 1e-9);
}

#[test]
fn fit_to_empty_source_fails() {
    let empty = Rc::new(VecOhlcProvider::default());
    assert!(TimeWindowViewport::fit_to_source(empty, 0.0).is_err());
}

#[test]
fn projection_contains_only_visible_bars() {
    let viewport =
        TimeWindowViewport::new(source(), (50.0, 250.0), (0.0, 100.0)).expect("viewport");
    let projection = viewport.source_projection();

    let times: Vec<f64> = projection.bars().iter().map(|bar| bar.time).collect();
    assert_eq!(times, [100.0, 200.0]);
}

#[test]
fn wheel_notch_zooms_in_around_anchor() {
    let viewport =
        TimeWindowViewport::new(source(), (0.0, 1_200.0), (0.0, 100.0)).expect("viewport");
    viewport.zoom_at(600.0, 120).expect("zoom");

    assert_relative_eq!(viewport.view_begin(), 100.0, epsilon = 1e-9);
    assert_relative_eq!(viewport.view_end(), 1_100.0, epsilon = 1e-9);
}

#[test]
fn negative_wheel_delta_zooms_out() {
    let viewport =
        TimeWindowViewport::new(source(), (0.0, 1_000.0), (0.0, 100.0)).expect("viewport");
    viewport.zoom_at(0.0, -120).expect("zoom");

    assert_relative_eq!(viewport.view_begin(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(viewport.view_end(), 1_200.0, epsilon = 1e-9);
}

#[test]
fn zoom_span_is_clamped_to_minimum() {
    let viewport = TimeWindowViewport::new(source(), (0.0, 100.0), (0.0, 100.0))
        .expect("viewport")
        .with_min_span_seconds(60.0)
        .expect("min span");
    viewport.zoom_at(50.0, 1_200).expect("zoom");

    assert_relative_eq!(viewport.view_begin(), 20.0, epsilon = 1e-9);
    assert_relative_eq!(viewport.view_end(), 80.0, epsilon = 1e-9);
}

#[test]
fn zoom_in_never_widens_window_below_minimum_span() {
    let viewport =
        TimeWindowViewport::new(source(), (0.0, 10.0), (0.0, 100.0)).expect("viewport");
    viewport.zoom_at(5.0, 120).expect("zoom in");
    assert_eq!(viewport.ranges().time_window(), (0.0, 10.0));

    let viewport =
        TimeWindowViewport::new(source(), (0.0, 70.0), (0.0, 100.0)).expect("viewport");
    viewport.zoom_at(35.0, 1_200).expect("zoom in");
    let (begin, end) = viewport.ranges().time_window();
    assert_relative_eq!(end - begin, 60.0, epsilon = 1e-9);

    let viewport =
        TimeWindowViewport::new(source(), (0.0, 10.0), (0.0, 100.0)).expect("viewport");
    viewport.zoom_at(5.0, -120).expect("zoom out");
    let (begin, end) = viewport.ranges().time_window();
    assert_relative_eq!(end - begin, 12.0, epsilon = 1e-9);
}

#[test]
fn pan_shifts_window_and_rejects_non_finite() {
    let viewport =
        TimeWindowViewport::new(source(), (0.0, 100.0), (0.0, 100.0)).expect("viewport");
    viewport.pan_by(25.0).expect("pan");
    assert_eq!(viewport.ranges().time_window(), (25.0, 125.0));
    assert!(viewport.pan_by(f64::INFINITY).is_err());
    assert_eq!(viewport.ranges().time_window(), (25.0, 125.0));
}

#[test]
fn autoscale_uses_visible_bars_only() {
    let viewport =
        TimeWindowViewport::new(source(), (50.0, 250.0), (0.0, 1_000.0)).expect("viewport");
    viewport.autoscale_price(0.0).expect("autoscale");
    assert_eq!(viewport.ranges().price_window(), (5.0, 30.0));

    viewport.set_view_range(1_000.0, 2_000.0).expect("empty window");
    viewport.autoscale_price(0.0).expect("autoscale without bars");
    assert_eq!(viewport.ranges().price_window(), (5.0, 30.0));
}

#[test]
fn unsorted_bars_are_rejected() {
    let result = VecOhlcProvider::new(vec![bar(10.0, 1.0, 2.0), bar(5.0, 1.0, 2.0)]);
    assert!(result.is_err());

    let mut provider = VecOhlcProvider::default();
    provider.push(bar(10.0, 1.0, 2.0)).expect("first");
    assert!(provider.push(bar(5.0, 1.0, 2.0)).is_err());
    assert_eq!(provider.len(), 1);
}

#[test]
fn decimal_bars_convert_to_unix_seconds() {
    let time = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).single().expect("time");
    let bar = OhlcBar::from_decimal_time(
        time,
        Decimal::new(1005, 1),
        Decimal::new(1100, 1),
        Decimal::new(990, 1),
        Decimal::new(1050, 1),
    )
    .expect("decimal bar");

    assert_eq!(bar.time, 1_609_459_200.0);
    assert_relative_eq!(bar.close, 105.0, epsilon = 1e-9);
    assert!(bar.is_bullish());
}

#[test]
fn invalid_bars_are_rejected() {
    assert!(OhlcBar::new(0.0, 5.0, 4.0, 6.0, 5.0).is_err());
    assert!(OhlcBar::new(0.0, 7.0, 6.0, 4.0, 5.0).is_err());
    assert!(OhlcBar::new(f64::NAN, 5.0, 6.0, 4.0, 5.0).is_err());
}
