use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dataset::models::{MAX_RATING, MIN_RATING, RatingValue};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieStats {
    pub title: String,
    pub mean_rating: f64,
    pub rating_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingBucket {
    pub rating: RatingValue,
    pub count: usize,
}

/// Number of rating events per discrete value 1..=5.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingDistribution {
    counts: [usize; MAX_RATING as usize],
}

impl RatingDistribution {
    pub fn record(&mut self, rating: RatingValue) {
        if let Some(slot) = rating
            .checked_sub(MIN_RATING)
            .and_then(|idx| self.counts.get_mut(idx as usize))
        {
            *slot += 1;
        }
    }

    pub fn count(&self, rating: RatingValue) -> usize {
        rating
            .checked_sub(MIN_RATING)
            .and_then(|idx| self.counts.get(idx as usize))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn buckets(&self) -> Vec<RatingBucket> {
        (MIN_RATING..=MAX_RATING)
            .map(|rating| RatingBucket {
                rating,
                count: self.count(rating),
            })
            .collect()
    }
}

impl Serialize for RatingDistribution {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.buckets().serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCount {
    pub title: String,
    pub rating_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub total_ratings: usize,
    pub distinct_users: usize,
    pub distinct_titles: usize,
    pub distinct_movie_ids: usize,
    pub first_rating_at: Option<DateTime<Utc>>,
    pub last_rating_at: Option<DateTime<Utc>>,
}
