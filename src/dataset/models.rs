use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type UserId = i64;
pub type MovieId = i64;
pub type RatingValue = u8;

pub const MIN_RATING: RatingValue = 1;
pub const MAX_RATING: RatingValue = 5;

/// One line of the ratings source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RatingRecord {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: RatingValue,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub movie_id: MovieId,
    pub title: String,
}

/// A rating event with the movie title denormalized onto it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: RatingValue,
    pub timestamp: i64,
    pub title: String,
}

/// Join of ratings and movie titles, one row per rating event.
///
/// Read-only once built; derived statistics are computed from it per request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingTable {
    rows: Vec<FlatRating>,
}

impl RatingTable {
    pub fn new(rows: Vec<FlatRating>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FlatRating] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.rows.iter().any(|row| row.title == title)
    }

    /// Distinct titles in ascending order.
    pub fn titles(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.title.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Build a table from `(user_id, movie_id, rating, title)` tuples with zero timestamps.
    #[cfg(test)]
    pub fn from_tuples(rows: &[(UserId, MovieId, RatingValue, &str)]) -> Self {
        Self::new(
            rows.iter()
                .map(|&(user_id, movie_id, rating, title)| FlatRating {
                    user_id,
                    movie_id,
                    rating,
                    timestamp: 0,
                    title: title.to_string(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_distinct_and_sorted() {
        let table = RatingTable::from_tuples(&[
            (1, 20, 4, "Fargo (1996)"),
            (2, 10, 5, "Alien (1979)"),
            (3, 20, 3, "Fargo (1996)"),
        ]);

        assert_eq!(table.titles(), vec!["Alien (1979)", "Fargo (1996)"]);
        assert!(table.contains_title("Alien (1979)"));
        assert!(!table.contains_title("Aliens (1986)"));
    }
}
