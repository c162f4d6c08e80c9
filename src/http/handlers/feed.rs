use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    auth::MaybeUser,
    db::feed::get_feed,
    models::{
        feed::{FeedFilters, FeedPage},
        rating::{Category, RatingType},
    },
    state::AppState,
};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub limit: Option<i64>,
    pub cursor: Option<i64>,
    pub following: Option<bool>,
    pub profile_id: Option<String>,
    pub resource_id: Option<String>,
    pub category: Option<Category>,
    pub rating: Option<i32>,
    pub rating_type: Option<RatingType>,
    pub trending: Option<bool>,
}

pub async fn get_feed_handler(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedPage>, (StatusCode, String)> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let cursor = query.cursor.unwrap_or(0).max(0);
    let filters = FeedFilters {
        following: query.following,
        profile_id: query.profile_id,
        resource_id: query.resource_id,
        category: query.category,
        rating: query.rating,
        rating_type: query.rating_type,
        trending: query.trending,
    };

    if let Some(user) = &user {
        if !filters.is_empty() {
            state.analytics.capture(
                "feed",
                &user.sub,
                serde_json::to_value(&filters).unwrap_or_default(),
            );
        }
    }

    let page = get_feed(
        limit,
        cursor,
        &filters,
        user.as_ref().map(|claims| claims.sub.as_str()),
        &state.postgres,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to get feed: {}", e);
        e.to_response()
    })?;

    Ok(Json(page))
}
