use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    db::{
        follow::{get_total_followers, get_total_following},
        profile::{get_profile_by_handle, get_streak, get_total_likes, get_total_ratings},
    },
    models::profile::{ProfileMeta, ProfileWithMeta},
    state::AppState,
};

/// Public profile read: the profile row plus its derived statistics. An unknown
/// handle is null, not an error.
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<Option<ProfileWithMeta>>, (StatusCode, String)> {
    let profile = get_profile_by_handle(&handle, &state.postgres)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get profile {}: {}", handle, e);
            e.to_response()
        })?;

    let Some(profile) = profile else {
        return Ok(Json(None));
    };

    let (streak, total_likes, total_followers, total_following, total_ratings) = tokio::try_join!(
        get_streak(&profile.user_id, &state.postgres),
        get_total_likes(&profile.user_id, &state.postgres),
        get_total_followers(&profile.user_id, &state.postgres),
        get_total_following(&profile.user_id, &state.postgres),
        get_total_ratings(&profile.user_id, &state.postgres),
    )
    .map_err(|e| {
        tracing::error!("Failed to get profile meta for {}: {}", handle, e);
        e.to_response()
    })?;

    Ok(Json(Some(ProfileWithMeta {
        profile,
        meta: ProfileMeta {
            streak,
            total_likes,
            total_followers,
            total_following,
            total_ratings,
        },
    })))
}
