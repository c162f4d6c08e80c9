use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub handle: String,
    pub name: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub deactivated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Derived per-user statistics attached to a public profile read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMeta {
    pub streak: u32,
    pub total_likes: i64,
    pub total_followers: i64,
    pub total_following: i64,
    pub total_ratings: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileWithMeta {
    #[serde(flatten)]
    pub profile: Profile,
    pub meta: ProfileMeta,
}
