use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::errors::AppError;

/// Consecutive-day rating streak for a user, measured against today.
pub async fn get_streak(user_id: &str, postgres: &PgPool) -> Result<u32, AppError> {
    let timestamps: Vec<DateTime<Utc>> = sqlx::query_scalar(
        "SELECT created_at FROM ratings
         WHERE user_id = $1 AND deactivated = FALSE AND created_at IS NOT NULL
         ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating history: {}", e)))?;

    Ok(compute_streak(&timestamps, Utc::now().date_naive()))
}

/// Walks a newest-first rating history. 0 when the history is empty or the most
/// recent rating day is more than one calendar day before `today`. Otherwise the
/// history collapses to distinct calendar days and adjacent day-pairs extend the
/// streak while their gap is at most 2 days; the final pair extends it
/// unconditionally. The 2-day tolerance is deliberate leniency, not a strict
/// daily streak.
pub fn compute_streak(timestamps: &[DateTime<Utc>], today: NaiveDate) -> u32 {
    let Some(most_recent) = timestamps.first() else {
        return 0;
    };

    if (today - most_recent.date_naive()).num_days() > 1 {
        return 0;
    }

    // Newest-first order keeps same-day rows adjacent.
    let mut days: Vec<NaiveDate> = Vec::new();
    for ts in timestamps {
        let day = ts.date_naive();
        if days.last() != Some(&day) {
            days.push(day);
        }
    }

    let pair_count = days.len() - 1;
    let mut streak: u32 = 1;

    for i in 0..pair_count {
        if i == pair_count - 1 {
            streak += 1;
            break;
        }

        let gap = (days[i] - days[i + 1]).num_days();
        if gap <= 2 {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}
