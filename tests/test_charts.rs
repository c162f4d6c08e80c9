use needledrop_be::db::charts::rank_by_score;
use needledrop_be::models::charts::ResourceAggregate;
use needledrop_be::scoring::{ALBUM_COUNT_WEIGHT, ARTIST_COUNT_WEIGHT, CHART_SIZE};

fn aggregate(resource_id: &str, total: i64, average: f64) -> ResourceAggregate {
    ResourceAggregate {
        resource_id: resource_id.to_string(),
        total,
        average,
    }
}

#[test]
fn test_minimum_count_threshold() {
    let rows = vec![
        aggregate("album-few", 5, 10.0),
        aggregate("album-enough", 6, 6.0),
        aggregate("album-one", 1, 10.0),
    ];

    let ranked = rank_by_score(rows, ALBUM_COUNT_WEIGHT);

    // A perfect average cannot buy an entry in below the threshold
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].resource_id, "album-enough");
    assert!(ranked.iter().all(|entry| entry.total > 5));
}

#[test]
fn test_orders_by_composite_score() {
    let rows = vec![
        aggregate("album-middling", 10, 7.5),
        aggregate("album-great", 10, 9.0),
        aggregate("album-voluminous", 400, 7.5),
    ];

    let ranked = rank_by_score(rows, ALBUM_COUNT_WEIGHT);

    // 9.0 + 0.3*ln(10) ~= 9.69 beats 7.5 + 0.3*ln(400) ~= 9.30, and volume
    // alone lifts the second copy of the 7.5 average over the first
    assert_eq!(ranked[0].resource_id, "album-great");
    assert_eq!(ranked[1].resource_id, "album-voluminous");
    assert_eq!(ranked[2].resource_id, "album-middling");
}

#[test]
fn test_score_value_matches_formula() {
    let ranked = rank_by_score(vec![aggregate("album", 10, 8.0)], ALBUM_COUNT_WEIGHT);

    let expected = 8.0 + 0.3 * 10f64.ln();
    assert!((ranked[0].sort_value - expected).abs() < 1e-9);
}

#[test]
fn test_ties_break_on_resource_id() {
    let rows = vec![
        aggregate("album-c", 8, 7.0),
        aggregate("album-a", 8, 7.0),
        aggregate("album-b", 8, 7.0),
    ];

    let ranked = rank_by_score(rows, ARTIST_COUNT_WEIGHT);

    let ids: Vec<&str> = ranked.iter().map(|entry| entry.resource_id.as_str()).collect();
    assert_eq!(ids, ["album-a", "album-b", "album-c"]);
}

#[test]
fn test_truncates_to_chart_size() {
    let rows: Vec<ResourceAggregate> = (0..30)
        .map(|n| aggregate(&format!("album-{n:02}"), 10, 7.0))
        .collect();

    let ranked = rank_by_score(rows, ALBUM_COUNT_WEIGHT);

    assert_eq!(ranked.len(), CHART_SIZE);
    // All scores tie, so the kept entries are the 20 smallest ids
    assert_eq!(ranked[0].resource_id, "album-00");
    assert_eq!(ranked[19].resource_id, "album-19");
}

#[test]
fn test_empty_input_yields_empty_chart() {
    assert!(rank_by_score(Vec::new(), ALBUM_COUNT_WEIGHT).is_empty());
}
