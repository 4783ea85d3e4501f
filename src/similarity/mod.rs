pub mod engine;
pub mod matrix;
pub mod pearson;

pub use engine::{SimilarMovie, correlations_with, find_similar};
pub use matrix::UserMovieMatrix;
pub use pearson::pairwise_complete_pearson;
