pub mod delete;
pub mod get;
pub mod post;

pub use delete::unfollow;
pub use get::{get_following_ids, get_total_followers, get_total_following};
pub use post::follow;
