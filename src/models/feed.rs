use serde::{Deserialize, Serialize};

use crate::models::rating::{Category, RatingType, RatingWithProfile};

/// Optional feed restrictions, combined with AND semantics. Absent fields add no
/// predicate; the query layer folds present ones into the WHERE conjunction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedFilters {
    /// Restrict to ratings by users the requester follows. Needs a user context.
    pub following: Option<bool>,
    pub profile_id: Option<String>,
    pub resource_id: Option<String>,
    pub category: Option<Category>,
    pub rating: Option<i32>,
    pub rating_type: Option<RatingType>,
    /// `true` orders by engagement score, default is newest first.
    pub trending: Option<bool>,
}

impl FeedFilters {
    pub fn is_empty(&self) -> bool {
        self.following.is_none()
            && self.profile_id.is_none()
            && self.resource_id.is_none()
            && self.category.is_none()
            && self.rating.is_none()
            && self.rating_type.is_none()
            && self.trending.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub items: Vec<RatingWithProfile>,
    /// Offset of the next page, absent once the result set is exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<i64>,
}
