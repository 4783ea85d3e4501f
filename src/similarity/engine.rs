use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

use super::matrix::UserMovieMatrix;
use super::pearson::pairwise_complete_pearson;
use crate::dataset::RatingTable;
use crate::errors::NotFoundError;
use crate::stats;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarMovie {
    pub title: String,
    pub correlation: f64,
    pub mean_rating: f64,
    pub rating_count: usize,
}

/// Correlation of `target` against every other title, keyed by title.
///
/// Titles whose correlation is undefined are left out, as is `target` itself.
pub fn correlations_with(
    matrix: &UserMovieMatrix,
    target: &str,
) -> Result<Vec<(String, f64)>, NotFoundError> {
    let target_idx = matrix
        .column_index(target)
        .ok_or_else(|| NotFoundError::new(target))?;
    let target_column = matrix.column(target_idx);

    let correlations = matrix
        .titles()
        .iter()
        .enumerate()
        .filter(|&(idx, _)| idx != target_idx)
        .filter_map(|(idx, title)| {
            pairwise_complete_pearson(target_column, matrix.column(idx))
                .map(|r| (title.clone(), r))
        })
        .collect();

    Ok(correlations)
}

/// Titles most correlated with `target`, restricted to titles with more than
/// `min_count` ratings.
///
/// Sorted by correlation descending, then title ascending; at most `limit` rows.
pub fn find_similar(
    table: &RatingTable,
    target: &str,
    min_count: usize,
    limit: usize,
) -> Result<Vec<SimilarMovie>, NotFoundError> {
    let matrix = UserMovieMatrix::from_table(table);
    let correlations = correlations_with(&matrix, target)?;
    debug!("{} titles correlate with {:?}", correlations.len(), target);

    let movie_stats = stats::movie_stats(table);

    let mut similar: Vec<SimilarMovie> = correlations
        .into_iter()
        .filter_map(|(title, correlation)| {
            let stats = movie_stats.get(&title)?;
            Some(SimilarMovie {
                correlation,
                mean_rating: stats.mean_rating,
                rating_count: stats.rating_count,
                title,
            })
        })
        .filter(|movie| movie.rating_count > min_count)
        .collect();

    similar.sort_by(|a, b| {
        b.correlation
            .partial_cmp(&a.correlation)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.title.cmp(&b.title))
    });
    similar.truncate(limit);
    Ok(similar)
}
