use axum::{Json, extract::State};

use crate::{db::charts::get_charts, models::charts::Charts, state::AppState};

/// Charts never fail outright; an unavailable list arrives empty.
pub async fn get_charts_handler(State(state): State<AppState>) -> Json<Charts> {
    Json(get_charts(&state.postgres).await)
}
