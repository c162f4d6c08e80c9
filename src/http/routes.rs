use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::{
    http::handlers::{
        deactivate_rating_handler, follow_handler, get_charts_handler, get_feed_handler,
        get_profile_handler, get_resource_distribution_handler, get_resource_rating_handler,
        get_resource_rating_list_handler, get_user_distribution_handler, get_user_rating_handler,
        rate_handler, unfollow_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/charts", get(get_charts_handler))
        .route("/feed", get(get_feed_handler))
        .route("/ratings", post(rate_handler))
        .route("/ratings/list", get(get_resource_rating_list_handler))
        .route("/ratings/me/{resource_id}", get(get_user_rating_handler))
        .route("/ratings/deactivate", patch(deactivate_rating_handler))
        .route(
            "/ratings/{category}/{resource_id}",
            get(get_resource_rating_handler),
        )
        .route(
            "/distribution/resource/{resource_id}",
            get(get_resource_distribution_handler),
        )
        .route(
            "/distribution/user/{user_id}",
            get(get_user_distribution_handler),
        )
        .route("/profiles/{handle}", get(get_profile_handler))
        .route(
            "/profiles/{user_id}/follow",
            post(follow_handler).delete(unfollow_handler),
        )
        .with_state(state)
}
