use sqlx::PgPool;

use crate::{errors::AppError, models::rating::RateForm};

/// Upsert the caller's rating of a resource, or clear it when `form.rating` is
/// absent. The `ON CONFLICT` target (resource_id, user_id) is what guarantees at
/// most one active rating per pair under concurrent writers; re-rating a
/// moderated row also lifts its deactivation flag.
pub async fn rate(user_id: &str, form: &RateForm, postgres: &PgPool) -> Result<(), AppError> {
    let Some(rating) = form.rating else {
        sqlx::query("DELETE FROM ratings WHERE user_id = $1 AND resource_id = $2 AND category = $3")
            .bind(user_id)
            .bind(&form.resource_id)
            .bind(form.category)
            .execute(postgres)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to clear rating: {}", e)))?;

        tracing::info!("Cleared rating for {} on {}", user_id, form.resource_id);
        return Ok(());
    };

    if !(1..=10).contains(&rating) {
        return Err(AppError::BadRequest("Rating must be between 1 and 10".into()));
    }

    sqlx::query(
        "INSERT INTO ratings (user_id, resource_id, parent_id, category, rating, content)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (resource_id, user_id) DO UPDATE
         SET parent_id = EXCLUDED.parent_id,
             category = EXCLUDED.category,
             rating = EXCLUDED.rating,
             content = EXCLUDED.content,
             deactivated = FALSE,
             updated_at = NOW()",
    )
    .bind(user_id)
    .bind(&form.resource_id)
    .bind(&form.parent_id)
    .bind(form.category)
    .bind(rating)
    .bind(&form.content)
    .execute(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to upsert rating: {}", e)))?;

    Ok(())
}
