pub mod aggregate;
pub mod types;

pub use aggregate::{dataset_summary, most_rated_movies, movie_stats, rating_distribution, top_rated_movies};
pub use types::{DatasetSummary, MovieStats, RatingBucket, RatingDistribution, TitleCount};
