use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::{
    db::follow::get::get_following_ids,
    errors::AppError,
    models::{
        feed::{FeedFilters, FeedPage},
        profile::Profile,
        rating::{Category, Rating, RatingType, RatingWithProfile},
    },
    scoring,
};

#[derive(FromRow)]
struct FeedRow {
    user_id: String,
    resource_id: String,
    parent_id: Option<String>,
    category: Category,
    rating: i32,
    content: Option<String>,
    deactivated: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    profile_user_id: String,
    profile_handle: String,
    profile_name: String,
    profile_image_url: Option<String>,
    profile_bio: Option<String>,
    profile_deactivated: bool,
    profile_created_at: DateTime<Utc>,
    profile_updated_at: DateTime<Utc>,
}

impl From<FeedRow> for RatingWithProfile {
    fn from(row: FeedRow) -> Self {
        Self {
            rating: Rating {
                user_id: row.user_id,
                resource_id: row.resource_id,
                parent_id: row.parent_id,
                category: row.category,
                rating: row.rating,
                content: row.content,
                deactivated: row.deactivated,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            profile: Profile {
                user_id: row.profile_user_id,
                handle: row.profile_handle,
                name: row.profile_name,
                image_url: row.profile_image_url,
                bio: row.profile_bio,
                deactivated: row.profile_deactivated,
                created_at: row.profile_created_at,
                updated_at: row.profile_updated_at,
            },
        }
    }
}

/// The activity feed: active ratings joined to active profiles, filtered by the
/// present fields of `filters` (AND semantics), newest first unless the trending
/// ordering is requested.
///
/// Pagination is a plain row offset. A row inserted ahead of the cursor between
/// pages shifts every later offset, so a paginating client can see an item twice
/// or miss one. Known limitation, accepted for simplicity; a keyset cursor on
/// (created_at, resource_id) is the alternative if that ever stops being
/// acceptable.
pub async fn get_feed(
    limit: i64,
    cursor: i64,
    filters: &FeedFilters,
    user_id: Option<&str>,
    postgres: &PgPool,
) -> Result<FeedPage, AppError> {
    let mut following_ids: Option<Vec<String>> = None;
    if filters.following == Some(true) {
        if let Some(user_id) = user_id {
            let ids = get_following_ids(user_id, postgres).await?;
            if ids.is_empty() {
                // Nothing can match a follower-of-nobody; skip the query.
                return Ok(FeedPage {
                    items: Vec::new(),
                    next_cursor: None,
                });
            }
            following_ids = Some(ids);
        }
    }

    let mut query = QueryBuilder::<Postgres>::new(
        "SELECT r.user_id, r.resource_id, r.parent_id, r.category, r.rating, r.content, \
         r.deactivated, r.created_at, r.updated_at, \
         p.user_id AS profile_user_id, p.handle AS profile_handle, p.name AS profile_name, \
         p.image_url AS profile_image_url, p.bio AS profile_bio, \
         p.deactivated AS profile_deactivated, p.created_at AS profile_created_at, \
         p.updated_at AS profile_updated_at \
         FROM ratings r \
         INNER JOIN profiles p ON p.user_id = r.user_id AND p.deactivated = FALSE \
         WHERE r.deactivated = FALSE",
    );

    if let Some(ids) = following_ids {
        query.push(" AND r.user_id = ANY(");
        query.push_bind(ids);
        query.push(")");
    }
    if let Some(profile_id) = &filters.profile_id {
        query.push(" AND r.user_id = ");
        query.push_bind(profile_id.clone());
    }
    if let Some(resource_id) = &filters.resource_id {
        query.push(" AND r.resource_id = ");
        query.push_bind(resource_id.clone());
    }
    if let Some(category) = filters.category {
        query.push(" AND r.category = ");
        query.push_bind(category);
    }
    if let Some(rating) = filters.rating {
        query.push(" AND r.rating = ");
        query.push_bind(rating);
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

    if filters.trending == Some(true) {
        // Engagement score per scoring::engagement, computed store-side so the
        // offset window applies to the ordered set.
        query.push(format!(
            " ORDER BY ((SELECT COUNT(*) FROM likes l \
                         WHERE l.author_id = r.user_id AND l.resource_id = r.resource_id) \
                      + (SELECT COUNT(*) FROM comments c \
                         WHERE c.author_id = r.user_id AND c.resource_id = r.resource_id \
                           AND c.deactivated = FALSE) \
                      + EXTRACT(EPOCH FROM r.created_at) / {})::float8 DESC, \
              r.created_at DESC, r.resource_id ASC",
            scoring::RECENCY_DIVISOR
        ));
    } else {
        query.push(" ORDER BY r.created_at DESC, r.resource_id ASC");
    }

    // One row past the page tells us whether another page exists.
    query.push(" LIMIT ");
    query.push_bind(limit + 1);
    query.push(" OFFSET ");
    query.push_bind(cursor);

    let rows: Vec<FeedRow> = query
        .build_query_as()
        .fetch_all(postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch feed: {}", e)))?;

    Ok(paginate(
        rows.into_iter().map(RatingWithProfile::from).collect(),
        limit,
        cursor,
    ))
}

/// Folds a `limit + 1` fetch into a page: the extra row is dropped and its
/// presence sets the next offset.
pub fn paginate(mut items: Vec<RatingWithProfile>, limit: i64, cursor: i64) -> FeedPage {
    let mut next_cursor = None;
    if items.len() as i64 > limit {
        items.pop();
        next_cursor = Some(cursor + items.len() as i64);
    }

    FeedPage { items, next_cursor }
}
