pub mod get;
pub mod streak;

pub use get::{get_profile_by_handle, get_total_likes, get_total_ratings};
pub use streak::get_streak;
