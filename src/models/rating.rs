use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::profile::Profile;

/// What kind of resource a rating points at. Stored as uppercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "text", rename_all = "UPPERCASE")]
pub enum Category {
    Album,
    Song,
    Artist,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: String,
    pub resource_id: String,
    /// Album for a song, artist for an album.
    pub parent_id: Option<String>,
    pub category: Category,
    pub rating: i32,
    /// Present for reviews, absent for bare ratings.
    pub content: Option<String>,
    pub deactivated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingWithProfile {
    #[serde(flatten)]
    pub rating: Rating,
    pub profile: Profile,
}

/// Aggregate over all active ratings of one resource.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRating {
    pub average: f64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRatingRow {
    pub resource_id: String,
    pub average: f64,
    pub total: i64,
}

/// Review vs bare-rating restriction on feed and distribution reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingType {
    Review,
    Rating,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateForm {
    pub resource_id: String,
    pub parent_id: Option<String>,
    pub category: Category,
    /// `None` clears the caller's rating (physical delete).
    pub rating: Option<i32>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeactivateRating {
    pub resource_id: String,
    pub user_id: String,
}
