use approx::assert_relative_eq;
use chrono::{DateTime, Utc};
use graphview_rs::GraphError;
use graphview_rs::core::{GraphRanges, ViewSize};
use proptest::prelude::*;

const JAN_2021: f64 = 1_609_459_200.0;

fn ranges() -> GraphRanges {
    GraphRanges::new((0.0, 1_000.0), (10.0, 110.0), ViewSize::new(1_000, 500)).expect("ranges")
}

#[test]
fn x_maps_linearly_to_time() {
    let ranges = ranges();
    assert_eq!(ranges.x_seconds(0.0).expect("left"), 0.0);
    assert_eq!(ranges.x_seconds(250.0).expect("quarter"), 250.0);
    assert_eq!(ranges.seconds_x(1_000.0).expect("right"), 1_000.0);
}

#[test]
fn y_axis_is_inverted() {
    let ranges = ranges();
    assert_eq!(ranges.y_price(0.0).expect("top"), 110.0);
    assert_eq!(ranges.y_price(500.0).expect("bottom"), 10.0);
    assert_eq!(ranges.price_y(60.0).expect("middle"), 250.0);
}

#[test]
fn x_time_returns_utc_datetime() {
    let ranges = GraphRanges::new(
        (JAN_2021, JAN_2021 + 100.0),
        (0.0, 1.0),
        ViewSize::new(100, 100),
    )
    .expect("ranges");

    let time = ranges.x_time(10.0).expect("time");
    let expected = DateTime::<Utc>::from_timestamp(1_609_459_210, 0).expect("expected");
    assert_eq!(time, expected);
    assert_eq!(ranges.time_x(expected).expect("x"), 10.0);
}

#[test]
fn zero_size_is_rejected_on_mapping() {
    let ranges = ranges().with_size(ViewSize::new(0, 500));
    assert_eq!(
        ranges.x_seconds(1.0),
        Err(GraphError::InvalidViewSize {
            width: 0,
            height: 500
        })
    );
    assert_eq!(ranges.seconds_per_pixel(), None);
}

#[test]
fn degenerate_windows_are_rejected() {
    let size = ViewSize::new(10, 10);
    assert!(GraphRanges::new((5.0, 5.0), (0.0, 1.0), size).is_err());
    assert!(GraphRanges::new((6.0, 5.0), (0.0, 1.0), size).is_err());
    assert!(GraphRanges::new((0.0, 1.0), (2.0, 2.0), size).is_err());
    assert!(GraphRanges::new((0.0, f64::NAN), (0.0, 1.0), size).is_err());
}

#[test]
fn with_size_keeps_windows() {
    let resized = ranges().with_size(ViewSize::new(40, 30));
    assert_eq!(resized.size(), ViewSize::new(40, 30));
    assert_eq!(resized.time_window(), (0.0, 1_000.0));
    assert_eq!(resized.price_window(), (10.0, 110.0));
    assert_relative_eq!(resized.seconds_per_pixel().expect("spp"), 25.0);
}

proptest! {
    #[test]
    fn pixel_round_trip_within_tolerance(
        time_start in -1.0e9f64..1.0e9,
        time_span in 1.0f64..1.0e8,
        price_min in -1.0e4f64..1.0e4,
        price_span in 0.01f64..1.0e4,
        width in 1u32..4_000,
        height in 1u32..4_000,
        x_ratio in 0.0f64..1.0,
        y_ratio in 0.0f64..1.0
    ) {
        let ranges = GraphRanges::new(
            (time_start, time_start + time_span),
            (price_min, price_min + price_span),
            ViewSize::new(width, height),
        )
        .expect("ranges");

        let x = x_ratio * f64::from(width);
        let y = y_ratio * f64::from(height);
        let x_back = ranges.seconds_x(ranges.x_seconds(x).expect("x")).expect("x back");
        let y_back = ranges.price_y(ranges.y_price(y).expect("y")).expect("y back");

        prop_assert!((x_back - x).abs() <= 1e-3);
        prop_assert!((y_back - y).abs() <= 1e-3);
    }
}
