use chrono::{DateTime, TimeZone, Utc};
use graphview_rs::GraphError;
use graphview_rs::axis::MonthLabeler;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn texts(labeler: MonthLabeler, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<String> {
    labeler
        .make_labels(start, end)
        .into_iter()
        .map(|label| label.text)
        .collect()
}

#[test]
fn step_two_includes_month_start_equal_to_end_date() {
    let labeler = MonthLabeler::new(2).expect("valid step");
    let labels = texts(labeler, at(2020, 3, 15), at(2020, 9, 1));
    assert_eq!(labels, ["03/2020", "05/2020", "07/2020", "09/2020"]);
}

#[test]
fn step_two_stops_before_month_start_after_end_date() {
    let labeler = MonthLabeler::new(2).expect("valid step");
    let labels = texts(labeler, at(2020, 3, 15), at(2020, 8, 31));
    assert_eq!(labels, ["03/2020", "05/2020", "07/2020"]);
}

#[test]
fn monthly_labels_cross_year_boundary() {
    let labeler = MonthLabeler::new(1).expect("valid step");
    let labels = texts(labeler, at(2020, 11, 1), at(2021, 2, 1));
    assert_eq!(labels, ["11/2020", "12/2020", "01/2021", "02/2021"]);
}

#[test]
fn year_rollover_snaps_to_january_and_skips_scheduled_month() {
    let labeler = MonthLabeler::new(5).expect("valid step");
    let labels = texts(labeler, at(2020, 11, 10), at(2022, 3, 1));
    // 11/2020 + 5 months lands on 04/2021, which is pulled back to 01/2021;
    // 11/2021 + 5 months lands on 04/2022, past the end date.
    assert_eq!(labels, ["11/2020", "01/2021", "06/2021", "11/2021"]);
}

#[test]
fn yearly_step_always_emits_january() {
    let labeler = MonthLabeler::new(12).expect("valid step");
    let labels = texts(labeler, at(2019, 7, 4), at(2022, 12, 31));
    assert_eq!(labels, ["07/2019", "01/2020", "01/2021", "01/2022"]);
}

#[test]
fn label_times_are_month_starts_at_midnight_utc() {
    let labeler = MonthLabeler::default();
    let labels = labeler.make_labels(at(2021, 5, 20), at(2021, 6, 3));

    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].time, at(2021, 5, 1));
    assert_eq!(labels[1].time, at(2021, 6, 1));
}

#[test]
fn end_time_of_day_is_ignored() {
    let labeler = MonthLabeler::default();
    let end = Utc
        .with_ymd_and_hms(2020, 3, 31, 23, 59, 59)
        .single()
        .expect("valid end");
    let labels = texts(labeler, at(2020, 1, 1), end);
    assert_eq!(labels, ["01/2020", "02/2020", "03/2020"]);
}

#[test]
fn start_equal_to_end_yields_its_month() {
    let labeler = MonthLabeler::default();
    let labels = texts(labeler, at(2020, 5, 20), at(2020, 5, 20));
    assert_eq!(labels, ["05/2020"]);
}

#[test]
fn start_after_end_yields_no_labels() {
    let labeler = MonthLabeler::default();
    assert!(labeler.make_labels(at(2021, 1, 1), at(2020, 1, 1)).is_empty());
    assert!(labeler.make_labels(at(2020, 5, 20), at(2020, 5, 10)).is_empty());
}

#[test]
fn zero_step_is_rejected() {
    assert!(matches!(
        MonthLabeler::new(0),
        Err(GraphError::InvalidData(_))
    ));
    assert_eq!(MonthLabeler::default().every(), MonthLabeler::DEFAULT_STEP);
}
