use sqlx::PgPool;

use crate::errors::AppError;

/// Moderation soft-delete: the row stays but drops out of every read-side
/// aggregation. Re-rating by the owner reactivates it.
pub async fn deactivate_rating(
    resource_id: &str,
    user_id: &str,
    postgres: &PgPool,
) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE ratings SET deactivated = TRUE, updated_at = NOW()
         WHERE resource_id = $1 AND user_id = $2",
    )
    .bind(resource_id)
    .bind(user_id)
    .execute(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to deactivate rating: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Rating not found".into()));
    }

    tracing::info!("Deactivated rating by {} on {}", user_id, resource_id);

    Ok(())
}
