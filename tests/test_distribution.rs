use needledrop_be::db::distribution::fold_distribution;

#[test]
fn test_empty_fold_is_all_zeros() {
    assert_eq!(fold_distribution(&[]), [0; 10]);
}

#[test]
fn test_single_bucket() {
    // One active 8-rating on a resource, e.g. after the same (user, resource)
    // pair was upserted twice
    assert_eq!(
        fold_distribution(&[(8, 1)]),
        [0, 0, 0, 0, 0, 0, 0, 1, 0, 0]
    );
}

#[test]
fn test_buckets_land_on_rating_minus_one() {
    let folded = fold_distribution(&[(1, 4), (5, 2), (10, 7)]);

    assert_eq!(folded[0], 4);
    assert_eq!(folded[4], 2);
    assert_eq!(folded[9], 7);
}

#[test]
fn test_sum_matches_row_counts() {
    let rows = [(1, 3), (2, 1), (4, 10), (7, 2), (9, 5)];
    let folded = fold_distribution(&rows);

    let row_total: i64 = rows.iter().map(|&(_, count)| count).sum();
    assert_eq!(folded.iter().sum::<i64>(), row_total);
    assert_eq!(folded.len(), 10);
}

#[test]
fn test_out_of_range_rows_are_ignored() {
    assert_eq!(fold_distribution(&[(0, 9), (11, 9)]), [0; 10]);
}
