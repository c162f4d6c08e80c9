use chrono::{DateTime, Utc};

/// Count weight for album charts. Smaller than the artist weight because albums
/// collect enough ratings that the average carries most of the signal.
pub const ALBUM_COUNT_WEIGHT: f64 = 0.3;

/// Count weight for artist charts. Artist aggregates have fewer ratings per group,
/// so volume gets more influence to compensate for small-sample bias.
pub const ARTIST_COUNT_WEIGHT: f64 = 0.8;

/// Scored charts only admit groups with strictly more ratings than this.
pub const MIN_CHART_RATINGS: i64 = 5;

/// Every chart truncates to this many entries.
pub const CHART_SIZE: usize = 20;

/// Seconds of recency worth one like/comment in the feed's trending order.
/// One engagement event ~= 5.8 days of age. Hand-tuned; do not change.
pub const RECENCY_DIVISOR: f64 = 500_000.0;

/// Composite chart score: `round(average, 1) + count_weight * ln(count)`.
///
/// Callers filter on [`MIN_CHART_RATINGS`] first; a zero count would put
/// `ln(0)` in the sort key and is a caller bug, not a recoverable state.
pub fn score(average: f64, count: i64, count_weight: f64) -> f64 {
    debug_assert!(count > 0, "score requires at least one rating");
    round_tenth(average) + count_weight * (count as f64).ln()
}

/// Trending sort key for the feed: engagement count plus a linear recency term.
/// The SQL ordering expression in the feed query computes the same value.
pub fn engagement(like_count: i64, comment_count: i64, created_at: DateTime<Utc>) -> f64 {
    (like_count + comment_count) as f64 + created_at.timestamp() as f64 / RECENCY_DIVISOR
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
