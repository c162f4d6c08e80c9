use sqlx::PgPool;
use std::cmp::Ordering;

use crate::{
    errors::AppError,
    models::charts::{AlbumCharts, ArtistCharts, Charts, LeaderboardEntry, ResourceAggregate, ScoredResource},
    scoring,
};

/// Builds the five home-page lists. Each list is computed independently: a
/// failing query degrades that list to empty instead of failing the whole
/// response.
pub async fn get_charts(postgres: &PgPool) -> Charts {
    let trending = fetch_albums_by_count(postgres)
        .await
        .unwrap_or_else(|e| log_empty("trending albums", e));

    let top = rank_by_score(
        fetch_album_aggregates(postgres)
            .await
            .unwrap_or_else(|e| log_empty("top albums", e)),
        scoring::ALBUM_COUNT_WEIGHT,
    );

    // Same query as trending. Kept separate so the two lists can be tuned
    // independently later.
    let popular = fetch_albums_by_count(postgres)
        .await
        .unwrap_or_else(|e| log_empty("popular albums", e));

    let top_artists = rank_by_score(
        fetch_artist_aggregates(postgres)
            .await
            .unwrap_or_else(|e| log_empty("top artists", e)),
        scoring::ARTIST_COUNT_WEIGHT,
    );

    let leaderboard = fetch_leaderboard(postgres)
        .await
        .unwrap_or_else(|e| log_empty("leaderboard", e));

    Charts {
        albums: AlbumCharts {
            trending: trending.into_iter().map(|row| row.resource_id).collect(),
            top: top.into_iter().map(|row| row.resource_id).collect(),
            popular: popular.into_iter().map(|row| row.resource_id).collect(),
        },
        artists: ArtistCharts {
            top: top_artists.into_iter().map(|row| row.resource_id).collect(),
        },
        leaderboard,
    }
}

/// Scores, orders, and truncates grouped aggregates. Groups at or below
/// [`scoring::MIN_CHART_RATINGS`] are dropped before scoring, which keeps
/// `score`'s nonzero-count precondition. Ties in the composite score fall back
/// to `resource_id` so chart output is stable across calls.
pub fn rank_by_score(rows: Vec<ResourceAggregate>, count_weight: f64) -> Vec<ScoredResource> {
    let mut scored: Vec<ScoredResource> = rows
        .into_iter()
        .filter(|row| row.total > scoring::MIN_CHART_RATINGS)
        .map(|row| ScoredResource {
            sort_value: scoring::score(row.average, row.total, count_weight),
            resource_id: row.resource_id,
            total: row.total,
            average: row.average,
        })
        .collect();

    scored.sort_by(|a, b| {
        b.sort_value
            .partial_cmp(&a.sort_value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.resource_id.cmp(&b.resource_id))
    });
    scored.truncate(scoring::CHART_SIZE);

    scored
}

fn log_empty<T>(chart: &str, e: AppError) -> Vec<T> {
    tracing::error!("Failed to build {} chart: {}", chart, e);
    Vec::new()
}

/// Albums by raw rating count, no minimum threshold.
async fn fetch_albums_by_count(postgres: &PgPool) -> Result<Vec<ResourceAggregate>, AppError> {
    sqlx::query_as::<_, ResourceAggregate>(
        "SELECT r.resource_id, COUNT(r.rating) AS total, AVG(r.rating)::float8 AS average
         FROM ratings r
         INNER JOIN profiles p ON p.user_id = r.user_id AND p.deactivated = FALSE
         WHERE r.category = 'ALBUM' AND r.deactivated = FALSE
         GROUP BY r.resource_id
         ORDER BY total DESC, r.resource_id ASC
         LIMIT $1",
    )
    .bind(scoring::CHART_SIZE as i64)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch albums by count: {}", e)))
}

/// Album aggregates above the chart threshold, for composite scoring in Rust.
async fn fetch_album_aggregates(postgres: &PgPool) -> Result<Vec<ResourceAggregate>, AppError> {
    sqlx::query_as::<_, ResourceAggregate>(
        "SELECT r.resource_id, COUNT(r.rating) AS total, AVG(r.rating)::float8 AS average
         FROM ratings r
         INNER JOIN profiles p ON p.user_id = r.user_id AND p.deactivated = FALSE
         WHERE r.category = 'ALBUM' AND r.deactivated = FALSE
         GROUP BY r.resource_id
         HAVING COUNT(r.rating) > $1",
    )
    .bind(scoring::MIN_CHART_RATINGS)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch album aggregates: {}", e)))
}

/// Artist aggregates: album ratings grouped by the artist they hang off.
async fn fetch_artist_aggregates(postgres: &PgPool) -> Result<Vec<ResourceAggregate>, AppError> {
    sqlx::query_as::<_, ResourceAggregate>(
        "SELECT r.parent_id AS resource_id, COUNT(r.rating) AS total, AVG(r.rating)::float8 AS average
         FROM ratings r
         INNER JOIN profiles p ON p.user_id = r.user_id AND p.deactivated = FALSE
         WHERE r.category = 'ALBUM' AND r.deactivated = FALSE AND r.parent_id IS NOT NULL
         GROUP BY r.parent_id
         HAVING COUNT(r.rating) > $1",
    )
    .bind(scoring::MIN_CHART_RATINGS)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch artist aggregates: {}", e)))
}

/// Profiles by count of their active ratings, any category.
async fn fetch_leaderboard(postgres: &PgPool) -> Result<Vec<LeaderboardEntry>, AppError> {
    sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT p.user_id, p.handle, p.name, p.image_url, p.bio, p.deactivated,
                p.created_at, p.updated_at, COUNT(r.rating) AS total
         FROM ratings r
         INNER JOIN profiles p ON p.user_id = r.user_id AND p.deactivated = FALSE
         WHERE r.deactivated = FALSE
         GROUP BY p.user_id
         ORDER BY total DESC, p.user_id ASC
         LIMIT $1",
    )
    .bind(scoring::CHART_SIZE as i64)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch leaderboard: {}", e)))
}
