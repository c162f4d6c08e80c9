use sqlx::PgPool;

use crate::{errors::AppError, models::profile::Profile};

pub async fn get_profile_by_handle(
    handle: &str,
    postgres: &PgPool,
) -> Result<Option<Profile>, AppError> {
    sqlx::query_as::<_, Profile>(
        "SELECT user_id, handle, name, image_url, bio, deactivated, created_at, updated_at
         FROM profiles
         WHERE handle = $1",
    )
    .bind(handle)
    .fetch_optional(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch profile: {}", e)))
}

/// Likes received across all of a user's ratings.
pub async fn get_total_likes(user_id: &str, postgres: &PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE author_id = $1")
        .bind(user_id)
        .fetch_one(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count likes: {}", e)))
}

pub async fn get_total_ratings(user_id: &str, postgres: &PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar("SELECT COUNT(*) FROM ratings WHERE user_id = $1 AND deactivated = FALSE")
        .bind(user_id)
        .fetch_one(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count ratings: {}", e)))
}
