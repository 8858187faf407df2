pub mod links;
pub mod providers;
pub mod recommender;

pub use links::resolve_links;
pub use recommender::{Recommender, RECOMMENDATION_COUNT};
