use chrono::{DateTime, Datelike, Utc};
use graphview_rs::axis::MonthLabeler;
use proptest::prelude::*;

fn from_seconds(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).expect("timestamp in range")
}

proptest! {
    #[test]
    fn labels_stay_within_end_date_and_ascend(
        step in 1u32..=36,
        start in 0i64..2_000_000_000,
        span in 0i64..400_000_000
    ) {
        let start = from_seconds(start);
        let end = from_seconds(start.timestamp() + span);
        let labels = MonthLabeler::new(step).expect("valid step").make_labels(start, end);

        prop_assert!(!labels.is_empty());
        for label in &labels {
            prop_assert!(label.time.date_naive() <= end.date_naive());
            prop_assert_eq!(label.time.day(), 1);
        }
        for pair in labels.windows(2) {
            prop_assert!(pair[0].time < pair[1].time);
        }
    }

    #[test]
    fn new_year_labels_are_january(
        step in 1u32..=36,
        start in 0i64..2_000_000_000,
        span in 0i64..400_000_000
    ) {
        let start = from_seconds(start);
        let end = from_seconds(start.timestamp() + span);
        let labels = MonthLabeler::new(step).expect("valid step").make_labels(start, end);

        for pair in labels.windows(2) {
            if pair[1].time.year() > pair[0].time.year() {
                prop_assert_eq!(pair[1].time.month(), 1);
                prop_assert!(pair[1].text.starts_with("01/"));
            }
        }
    }

    #[test]
    fn reversed_bounds_yield_nothing(
        step in 1u32..=36,
        end in 0i64..2_000_000_000,
        gap in 1i64..400_000_000
    ) {
        let end = from_seconds(end);
        let start = from_seconds(end.timestamp() + gap);
        let labels = MonthLabeler::new(step).expect("valid step").make_labels(start, end);
        prop_assert!(labels.is_empty());
    }
}
