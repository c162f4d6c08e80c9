pub mod get;

pub use get::{DistributionFilters, DistributionTarget, fold_distribution, get_distribution};
