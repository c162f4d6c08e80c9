use sqlx::PgPool;

use crate::errors::AppError;

/// Removes a follow edge. Unfollowing someone never followed is rejected so the
/// client can tell a stale button from a successful action.
pub async fn unfollow(user_id: &str, following_id: &str, postgres: &PgPool) -> Result<(), AppError> {
    if user_id == following_id {
        return Err(AppError::Precondition("Cannot unfollow yourself".into()));
    }

    let result = sqlx::query("DELETE FROM followers WHERE user_id = $1 AND following_id = $2")
        .bind(user_id)
        .bind(following_id)
        .execute(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to unfollow: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::Precondition("Not following this user".into()));
    }

    Ok(())
}
