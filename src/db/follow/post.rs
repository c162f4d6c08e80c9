use sqlx::PgPool;

use crate::errors::AppError;

/// Adds a follow edge. Re-following is a no-op rather than an error.
pub async fn follow(user_id: &str, following_id: &str, postgres: &PgPool) -> Result<(), AppError> {
    if user_id == following_id {
        return Err(AppError::Precondition("Cannot follow yourself".into()));
    }

    sqlx::query(
        "INSERT INTO followers (user_id, following_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
    )
    .bind(user_id)
    .bind(following_id)
    .execute(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to follow: {}", e)))?;

    tracing::info!("{} now follows {}", user_id, following_id);

    Ok(())
}
