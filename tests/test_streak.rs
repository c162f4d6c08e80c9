use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use needledrop_be::db::profile::streak::compute_streak;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

fn at_noon(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
}

/// Newest-first timestamps, one per day offset back from today.
fn history(day_offsets: &[i64]) -> Vec<DateTime<Utc>> {
    day_offsets
        .iter()
        .map(|&offset| at_noon(today() - Duration::days(offset)))
        .collect()
}

#[test]
fn test_no_ratings_no_streak() {
    assert_eq!(compute_streak(&[], today()), 0);
}

#[test]
fn test_stale_history_breaks_streak() {
    // Most recent rating two days ago: a full day was skipped
    assert_eq!(compute_streak(&history(&[2, 3, 4]), today()), 0);
    assert_eq!(compute_streak(&history(&[10]), today()), 0);
}

#[test]
fn test_single_day() {
    assert_eq!(compute_streak(&history(&[0]), today()), 1);
    // Rating yesterday still counts as an unbroken streak
    assert_eq!(compute_streak(&history(&[1]), today()), 1);
}

#[test]
fn test_two_consecutive_days() {
    assert_eq!(compute_streak(&history(&[0, 1]), today()), 2);
}

#[test]
fn test_three_consecutive_days() {
    // Ratings on D, D-1, D-2 and none on D-3
    assert_eq!(compute_streak(&history(&[0, 1, 2]), today()), 3);
}

#[test]
fn test_multiple_ratings_same_day_count_once() {
    let mut timestamps = vec![
        at_noon(today()),
        at_noon(today()) - Duration::hours(3),
        at_noon(today()) - Duration::hours(6),
    ];
    timestamps.extend(history(&[1]));

    assert_eq!(compute_streak(&timestamps, today()), 2);
}

#[test]
fn test_two_day_gaps_keep_streak_alive() {
    // Every-other-day raters stay on streak under the 2-day tolerance
    assert_eq!(compute_streak(&history(&[0, 2, 4]), today()), 3);
}

#[test]
fn test_wide_gap_stops_the_walk() {
    // D and D-1 are consecutive, then a 3-day hole before D-4
    assert_eq!(compute_streak(&history(&[0, 1, 4, 5]), today()), 2);
}

#[test]
fn test_long_run() {
    assert_eq!(compute_streak(&history(&[0, 1, 2, 3, 4, 5, 6]), today()), 7);
}
