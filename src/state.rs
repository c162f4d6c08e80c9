use sqlx::PgPool;

use crate::analytics::Analytics;

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    pub analytics: Analytics,
}
