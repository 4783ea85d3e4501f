pub mod loader;
pub mod models;

pub use loader::{load_table, load_table_from};
pub use models::{FlatRating, MovieId, MovieRecord, RatingRecord, RatingTable, RatingValue, UserId};
