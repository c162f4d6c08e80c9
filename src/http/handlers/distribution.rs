use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    auth::MaybeUser,
    db::distribution::{DistributionFilters, DistributionTarget, get_distribution},
    state::AppState,
};

pub async fn get_resource_distribution_handler(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(resource_id): Path<String>,
    Query(filters): Query<DistributionFilters>,
) -> Result<Json<[i64; 10]>, (StatusCode, String)> {
    let distribution = get_distribution(
        DistributionTarget::Resource(resource_id),
        &filters,
        user.as_ref().map(|claims| claims.sub.as_str()),
        &state.postgres,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to get resource distribution: {}", e);
        e.to_response()
    })?;

    Ok(Json(distribution))
}

pub async fn get_user_distribution_handler(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(user_id): Path<String>,
    Query(filters): Query<DistributionFilters>,
) -> Result<Json<[i64; 10]>, (StatusCode, String)> {
    let distribution = get_distribution(
        DistributionTarget::User(user_id),
        &filters,
        user.as_ref().map(|claims| claims.sub.as_str()),
        &state.postgres,
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to get user distribution: {}", e);
        e.to_response()
    })?;

    Ok(Json(distribution))
}
