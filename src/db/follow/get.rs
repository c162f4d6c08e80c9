use sqlx::PgPool;

use crate::errors::AppError;

/// Everyone `user_id` follows. Feeds and distributions turn this into a
/// membership predicate; an empty result short-circuits those queries entirely.
pub async fn get_following_ids(user_id: &str, postgres: &PgPool) -> Result<Vec<String>, AppError> {
    sqlx::query_scalar("SELECT following_id FROM followers WHERE user_id = $1")
        .bind(user_id)
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch following ids: {}", e)))
}

/// Follower count, counting only followers whose own profile is still active.
pub async fn get_total_followers(user_id: &str, postgres: &PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM followers f
         INNER JOIN profiles p ON p.user_id = f.user_id AND p.deactivated = FALSE
         WHERE f.following_id = $1",
    )
    .bind(user_id)
    .fetch_one(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to count followers: {}", e)))
}

/// Following count, counting only followed users whose profile is still active.
pub async fn get_total_following(user_id: &str, postgres: &PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM followers f
         INNER JOIN profiles p ON p.user_id = f.following_id AND p.deactivated = FALSE
         WHERE f.user_id = $1",
    )
    .bind(user_id)
    .fetch_one(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to count following: {}", e)))
}
