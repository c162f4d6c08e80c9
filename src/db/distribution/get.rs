use serde::Deserialize;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    db::follow::get::get_following_ids,
    errors::AppError,
    models::rating::{Category, RatingType},
};

/// Whose histogram: everything a user rated, or everything rated on a resource.
#[derive(Debug, Clone)]
pub enum DistributionTarget {
    Resource(String),
    User(String),
}

/// Optional histogram restrictions, AND semantics like the feed filters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionFilters {
    pub rating_type: Option<RatingType>,
    /// Restrict to raters the requester follows. Needs a user context.
    pub following: Option<bool>,
    pub category: Option<Category>,
}

/// Ten-bucket histogram of active rating values: index `i` counts ratings of
/// value `i + 1`. Always fully populated, never sparse.
pub async fn get_distribution(
    target: DistributionTarget,
    filters: &DistributionFilters,
    user_id: Option<&str>,
    postgres: &PgPool,
) -> Result<[i64; 10], AppError> {
    let mut following_ids: Option<Vec<String>> = None;
    if filters.following == Some(true) {
        if let Some(user_id) = user_id {
            let ids = get_following_ids(user_id, postgres).await?;
            if ids.is_empty() {
                return Ok([0; 10]);
            }
            following_ids = Some(ids);
        }
    }

    let mut query = QueryBuilder::<Postgres>::new(
        "SELECT r.rating, COUNT(r.rating) AS total \
         FROM ratings r \
         INNER JOIN profiles p ON p.user_id = r.user_id AND p.deactivated = FALSE \
         WHERE r.deactivated = FALSE",
    );

    match target {
        DistributionTarget::Resource(resource_id) => {
            query.push(" AND r.resource_id = ");
            query.push_bind(resource_id);
        }
        DistributionTarget::User(target_user_id) => {
            query.push(" AND r.user_id = ");
            query.push_bind(target_user_id);
        }
    }

    if let Some(ids) = following_ids {
        query.push(" AND r.user_id = ANY(");
        query.push_bind(ids);
        query.push(")");
    }
    if let Some(category) = filters.category {
        query.push(" AND r.category = ");
        query.push_bind(category);
    }
    match filters.rating_type {
        Some(RatingType::Review) => {
            query.push(" AND r.content IS NOT NULL");
        }
        Some(RatingType::Rating) => {
            query.push(" AND r.content IS NULL");
        }
        None => {}
    }

    query.push(" GROUP BY r.rating ORDER BY r.rating");

    let rows: Vec<(i32, i64)> = query
        .build_query_as()
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch distribution: {}", e)))?;

    Ok(fold_distribution(&rows))
}

/// Places each (rating, count) group into its fixed bucket. Values outside
/// 1..=10 cannot come from the store's constraint but are ignored rather than
/// allowed to panic the fold.
pub fn fold_distribution(rows: &[(i32, i64)]) -> [i64; 10] {
    let mut buckets = [0i64; 10];
    for &(rating, total) in rows {
        if (1..=10).contains(&rating) {
            buckets[(rating - 1) as usize] = total;
        }
    }

    buckets
}
