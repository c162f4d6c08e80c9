pub mod get;

pub use get::{get_charts, rank_by_score};
