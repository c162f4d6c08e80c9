use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::rating::{Category, Rating, ResourceRating, ResourceRatingRow},
};

/// Average and total of a resource's active ratings. An artist has no ratings of
/// its own; its aggregate rolls up the album ratings carrying it as `parent_id`.
/// Returns `None` when no qualifying rows exist.
pub async fn get_resource_rating(
    resource_id: &str,
    category: Category,
    postgres: &PgPool,
) -> Result<Option<ResourceRating>, AppError> {
    let (sql, bound_category) = if category == Category::Artist {
        (
            "SELECT AVG(r.rating)::float8, COUNT(r.rating)
             FROM ratings r
             WHERE r.parent_id = $1 AND r.category = $2 AND r.deactivated = FALSE",
            Category::Album,
        )
    } else {
        (
            "SELECT AVG(r.rating)::float8, COUNT(r.rating)
             FROM ratings r
             WHERE r.resource_id = $1 AND r.category = $2 AND r.deactivated = FALSE",
            category,
        )
    };

    let (average, total): (Option<f64>, i64) = sqlx::query_as(sql)
        .bind(resource_id)
        .bind(bound_category)
        .fetch_one(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch resource rating: {}", e)))?;

    Ok(average.map(|average| ResourceRating { average, total }))
}

/// Batch aggregate for a list of resources of one category. Resources with no
/// active ratings simply have no row in the result.
pub async fn get_resource_rating_list(
    resource_ids: &[String],
    category: Category,
    postgres: &PgPool,
) -> Result<Vec<ResourceRatingRow>, AppError> {
    sqlx::query_as::<_, ResourceRatingRow>(
        "SELECT r.resource_id, AVG(r.rating)::float8 AS average, COUNT(r.rating) AS total
         FROM ratings r
         WHERE r.resource_id = ANY($1) AND r.category = $2 AND r.deactivated = FALSE
         GROUP BY r.resource_id",
    )
    .bind(resource_ids)
    .bind(category)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch resource rating list: {}", e)))
}

/// One user's own active rating of a resource, if any.
pub async fn get_user_rating(
    resource_id: &str,
    user_id: &str,
    postgres: &PgPool,
) -> Result<Option<Rating>, AppError> {
    sqlx::query_as::<_, Rating>(
        "SELECT user_id, resource_id, parent_id, category, rating, content, deactivated,
                created_at, updated_at
         FROM ratings
         WHERE resource_id = $1 AND user_id = $2 AND deactivated = FALSE",
    )
    .bind(resource_id)
    .bind(user_id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user rating: {}", e)))
}
