use chrono::{Duration, TimeZone, Utc};
use needledrop_be::scoring::{
    ALBUM_COUNT_WEIGHT, ARTIST_COUNT_WEIGHT, RECENCY_DIVISOR, engagement, score,
};

#[test]
fn test_score_formula() {
    // avg 8.0 over 10 ratings at album weight: 8.0 + 0.3 * ln(10)
    let expected = 8.0 + 0.3 * 10f64.ln();
    assert!((score(8.0, 10, ALBUM_COUNT_WEIGHT) - expected).abs() < 1e-9);
    assert!((score(8.0, 10, ALBUM_COUNT_WEIGHT) - 8.69).abs() < 0.01);
}

#[test]
fn test_score_rounds_average_to_one_decimal() {
    // ln(1) = 0, so only the rounded average remains
    assert_eq!(score(8.26, 1, 0.5), 8.3);
    assert_eq!(score(8.24, 1, 0.5), 8.2);
    assert_eq!(score(8.0, 1, 0.5), 8.0);
}

#[test]
fn test_score_single_rating_keeps_average() {
    assert_eq!(score(7.0, 1, ARTIST_COUNT_WEIGHT), 7.0);
}

#[test]
fn test_artist_weight_gives_count_more_influence() {
    let album_gain = score(8.0, 50, ALBUM_COUNT_WEIGHT) - score(8.0, 10, ALBUM_COUNT_WEIGHT);
    let artist_gain = score(8.0, 50, ARTIST_COUNT_WEIGHT) - score(8.0, 10, ARTIST_COUNT_WEIGHT);
    assert!(artist_gain > album_gain);
}

#[test]
fn test_engagement_one_like_matches_recency_window() {
    // One like is worth RECENCY_DIVISOR seconds of age
    let older = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
    let newer = older + Duration::seconds(RECENCY_DIVISOR as i64);

    assert!((engagement(1, 0, older) - engagement(0, 0, newer)).abs() < 1e-9);
}

#[test]
fn test_engagement_counts_likes_and_comments_equally() {
    let created = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
    assert_eq!(engagement(2, 1, created), engagement(1, 2, created));
    assert_eq!(engagement(3, 0, created), engagement(0, 3, created));
}

#[test]
fn test_engagement_prefers_recent_items() {
    let older = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
    let newer = older + Duration::hours(1);

    assert!(engagement(0, 0, newer) > engagement(0, 0, older));
}
