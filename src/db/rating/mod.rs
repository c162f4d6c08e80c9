pub mod get;
pub mod patch;
pub mod put;

pub use get::{get_resource_rating, get_resource_rating_list, get_user_rating};
pub use patch::deactivate_rating;
pub use put::rate;
