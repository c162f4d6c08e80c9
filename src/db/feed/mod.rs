pub mod get;

pub use get::{get_feed, paginate};
