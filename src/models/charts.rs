use serde::Serialize;
use sqlx::FromRow;

use crate::models::profile::Profile;

/// One GROUP BY row: a resource (or artist) with its active rating count and average.
#[derive(Debug, Clone, FromRow)]
pub struct ResourceAggregate {
    pub resource_id: String,
    pub total: i64,
    pub average: f64,
}

/// A ranked chart entry. Never persisted; recomputed per request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResource {
    pub resource_id: String,
    pub total: i64,
    pub average: f64,
    pub sort_value: f64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[sqlx(flatten)]
    pub profile: Profile,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlbumCharts {
    pub trending: Vec<String>,
    pub top: Vec<String>,
    pub popular: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistCharts {
    pub top: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Charts {
    pub albums: AlbumCharts,
    pub artists: ArtistCharts,
    pub leaderboard: Vec<LeaderboardEntry>,
}
