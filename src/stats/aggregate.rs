use chrono::DateTime;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use super::types::{DatasetSummary, MovieStats, RatingDistribution, TitleCount};
use crate::dataset::RatingTable;

pub fn rating_distribution(table: &RatingTable) -> RatingDistribution {
    let mut distribution = RatingDistribution::default();
    for row in table.rows() {
        distribution.record(row.rating);
    }
    distribution
}

/// Mean rating and rating count per title, keyed by title.
pub fn movie_stats(table: &RatingTable) -> BTreeMap<String, MovieStats> {
    let mut totals: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for row in table.rows() {
        let entry = totals.entry(row.title.as_str()).or_insert((0, 0));
        entry.0 += u64::from(row.rating);
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(title, (sum, count))| {
            let stats = MovieStats {
                title: title.to_string(),
                mean_rating: sum as f64 / count as f64,
                rating_count: count,
            };
            (title.to_string(), stats)
        })
        .collect()
}

/// Titles with at least `min_count` ratings, best mean first.
///
/// Equal means are ordered by title ascending. Returns at most `limit` rows.
pub fn top_rated_movies(table: &RatingTable, min_count: usize, limit: usize) -> Vec<MovieStats> {
    let mut eligible: Vec<MovieStats> = movie_stats(table)
        .into_values()
        .filter(|stats| stats.rating_count >= min_count)
        .collect();

    eligible.sort_by(|a, b| {
        b.mean_rating
            .partial_cmp(&a.mean_rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.title.cmp(&b.title))
    });
    eligible.truncate(limit);
    eligible
}

/// Titles with the most ratings; equal counts ordered by title ascending.
pub fn most_rated_movies(table: &RatingTable, limit: usize) -> Vec<TitleCount> {
    let mut counts: Vec<TitleCount> = movie_stats(table)
        .into_values()
        .map(|stats| TitleCount {
            title: stats.title,
            rating_count: stats.rating_count,
        })
        .collect();

    counts.sort_by(|a, b| {
        b.rating_count
            .cmp(&a.rating_count)
            .then_with(|| a.title.cmp(&b.title))
    });
    counts.truncate(limit);
    counts
}

pub fn dataset_summary(table: &RatingTable) -> DatasetSummary {
    let rows = table.rows();
    let users: HashSet<_> = rows.iter().map(|r| r.user_id).collect();
    let titles: HashSet<_> = rows.iter().map(|r| r.title.as_str()).collect();
    let movie_ids: HashSet<_> = rows.iter().map(|r| r.movie_id).collect();

    let first = rows.iter().map(|r| r.timestamp).min();
    let last = rows.iter().map(|r| r.timestamp).max();

    DatasetSummary {
        total_ratings: rows.len(),
        distinct_users: users.len(),
        distinct_titles: titles.len(),
        distinct_movie_ids: movie_ids.len(),
        first_rating_at: first.and_then(|secs| DateTime::from_timestamp(secs, 0)),
        last_rating_at: last.and_then(|secs| DateTime::from_timestamp(secs, 0)),
    }
}
