use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    auth::AuthClaims,
    db::follow::{follow, unfollow},
    state::AppState,
};

pub async fn follow_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(user_id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    follow(&claims.sub, &user_id, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Failed to follow {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn unfollow_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(user_id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    unfollow(&claims.sub, &user_id, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Failed to unfollow {}: {}", user_id, e);
            e.to_response()
        })?;

    Ok(StatusCode::NO_CONTENT)
}
