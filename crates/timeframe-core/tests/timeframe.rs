// File: crates/timeframe-core/tests/timeframe.rs
// Purpose: Trailing-window filter: boundaries, ordering, empty input and idempotence.

use chrono::{DateTime, TimeDelta, Utc};
use timeframe_core::{filter, DataPoint, Timeframe};

fn pt(ts: &str, v: f64) -> DataPoint {
    let t = DateTime::parse_from_rfc3339(ts).expect("valid timestamp").with_timezone(&Utc);
    DataPoint::new(t, v)
}

/// Hourly samples over `days` days, deliberately out of chronological order at the end.
fn hourly(days: i64) -> Vec<DataPoint> {
    let start = DateTime::parse_from_rfc3339("2024-03-01T00:00:00Z").unwrap().with_timezone(&Utc);
    let mut v: Vec<DataPoint> = (0..days * 24)
        .map(|h| DataPoint::new(start + TimeDelta::hours(h), (h % 17) as f64))
        .collect();
    v.swap(3, 40);
    v
}

fn is_subsequence(sub: &[DataPoint], full: &[DataPoint]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

#[test]
fn weekly_window_is_measured_from_latest_point() {
    let series = vec![
        pt("2024-01-01T00:00:00Z", 10.0),
        pt("2024-01-02T00:00:00Z", 20.0),
        pt("2024-02-01T00:00:00Z", 5.0),
    ];
    // Latest is Feb 1, so the cutoff is Jan 25: both January points fall outside.
    let out = filter(&series, Timeframe::Weekly);
    assert_eq!(out, vec![pt("2024-02-01T00:00:00Z", 5.0)]);

    let out = filter(&series, Timeframe::Monthly);
    assert_eq!(out, vec![pt("2024-01-02T00:00:00Z", 20.0), pt("2024-02-01T00:00:00Z", 5.0)]);
}

#[test]
fn empty_series_yields_empty_for_every_timeframe() {
    for tf in Timeframe::ALL {
        assert!(filter(&[], tf).is_empty(), "{tf}");
    }
}

#[test]
fn boundary_is_inclusive() {
    let series = vec![
        pt("2024-05-01T11:59:59.999Z", 1.0),
        pt("2024-05-01T12:00:00Z", 2.0),
        pt("2024-05-02T12:00:00Z", 3.0),
    ];
    let out = filter(&series, Timeframe::Daily);
    assert_eq!(out.iter().map(|p| p.value).collect::<Vec<_>>(), vec![2.0, 3.0]);
}

#[test]
fn monthly_is_thirty_days_not_a_calendar_month() {
    // Mar 31 - 30 days = Mar 1; a calendar month back would be Feb 29 (leap year).
    let series = vec![
        pt("2024-02-29T12:00:00Z", 1.0),
        pt("2024-03-01T00:00:00Z", 2.0),
        pt("2024-03-31T00:00:00Z", 3.0),
    ];
    let out = filter(&series, Timeframe::Monthly);
    assert_eq!(out.iter().map(|p| p.value).collect::<Vec<_>>(), vec![2.0, 3.0]);
}

#[test]
fn all_keeps_everything_in_order() {
    let series = hourly(45);
    assert_eq!(filter(&series, Timeframe::All), series);
}

#[test]
fn output_is_a_windowed_subsequence() {
    let series = hourly(45);
    let latest = series.iter().map(|p| p.timestamp).max().unwrap();
    for tf in Timeframe::ALL {
        let out = filter(&series, tf);
        assert!(is_subsequence(&out, &series), "{tf}: not a subsequence");
        if let Some(w) = tf.window() {
            assert!(out.iter().all(|p| p.timestamp >= latest - w), "{tf}: point outside window");
            let expected = series.iter().filter(|p| p.timestamp >= latest - w).count();
            assert_eq!(out.len(), expected, "{tf}: dropped in-window points");
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let series = hourly(10);
    for tf in Timeframe::ALL {
        let once = filter(&series, tf);
        assert_eq!(filter(&once, tf), once, "{tf}");
    }
}

#[test]
fn input_is_not_modified() {
    let series = hourly(3);
    let before = series.clone();
    let _ = filter(&series, Timeframe::Daily);
    assert_eq!(series, before);
}

#[test]
fn parses_and_displays_names() {
    assert_eq!("weekly".parse::<Timeframe>(), Ok(Timeframe::Weekly));
    assert_eq!(" Monthly ".parse::<Timeframe>(), Ok(Timeframe::Monthly));
    assert!("quarterly".parse::<Timeframe>().is_err());
    assert_eq!(Timeframe::Daily.to_string(), "daily");
    assert_eq!(Timeframe::default(), Timeframe::Daily);
}
