use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::Query;
use serde::Deserialize;

use crate::{
    auth::{AuthClaims, ModeratorClaims},
    db::rating::{
        deactivate_rating, get_resource_rating, get_resource_rating_list, get_user_rating, rate,
    },
    models::rating::{Category, DeactivateRating, RateForm, Rating, ResourceRating, ResourceRatingRow},
    state::AppState,
};

pub async fn get_resource_rating_handler(
    State(state): State<AppState>,
    Path((category, resource_id)): Path<(Category, String)>,
) -> Result<Json<Option<ResourceRating>>, (StatusCode, String)> {
    let rating = get_resource_rating(&resource_id, category, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get resource rating: {}", e);
            e.to_response()
        })?;

    Ok(Json(rating))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingListQuery {
    pub resource_ids: Vec<String>,
    pub category: Category,
}

pub async fn get_resource_rating_list_handler(
    State(state): State<AppState>,
    Query(query): Query<RatingListQuery>,
) -> Result<Json<Vec<ResourceRatingRow>>, (StatusCode, String)> {
    let ratings = get_resource_rating_list(&query.resource_ids, query.category, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get resource rating list: {}", e);
            e.to_response()
        })?;

    Ok(Json(ratings))
}

pub async fn get_user_rating_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(resource_id): Path<String>,
) -> Result<Json<Option<Rating>>, (StatusCode, String)> {
    let rating = get_user_rating(&resource_id, &claims.sub, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user rating: {}", e);
            e.to_response()
        })?;

    Ok(Json(rating))
}

pub async fn rate_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(form): Json<RateForm>,
) -> Result<StatusCode, (StatusCode, String)> {
    rate(&claims.sub, &form, &state.postgres).await.map_err(|e| {
        tracing::error!("Failed to rate {}: {}", form.resource_id, e);
        e.to_response()
    })?;

    state.analytics.capture(
        "rate",
        &claims.sub,
        serde_json::to_value(&form).unwrap_or_default(),
    );

    Ok(StatusCode::NO_CONTENT)
}

pub async fn deactivate_rating_handler(
    State(state): State<AppState>,
    ModeratorClaims(_claims): ModeratorClaims,
    Json(payload): Json<DeactivateRating>,
) -> Result<StatusCode, (StatusCode, String)> {
    deactivate_rating(&payload.resource_id, &payload.user_id, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Failed to deactivate rating: {}", e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}
