pub mod charts;
pub mod distribution;
pub mod feed;
pub mod follow;
pub mod profile;
pub mod rating;

pub use charts::get_charts_handler;
pub use distribution::{get_resource_distribution_handler, get_user_distribution_handler};
pub use feed::get_feed_handler;
pub use follow::{follow_handler, unfollow_handler};
pub use profile::get_profile_handler;
pub use rating::{
    deactivate_rating_handler, get_resource_rating_handler, get_resource_rating_list_handler,
    get_user_rating_handler, rate_handler,
};
