use serde::Serialize;

use crate::similarity::SimilarMovie;
use crate::stats::{DatasetSummary, MovieStats, RatingDistribution, TitleCount};

/// The pages the dashboard can show.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Overview,
    TopMovies { min_count: usize, limit: usize },
    FindSimilar { title: String, min_count: usize, limit: usize },
    Titles,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub summary: DatasetSummary,
    pub rating_distribution: RatingDistribution,
    pub most_rated: Vec<TitleCount>,
}

/// Data behind a rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum PageView {
    Overview(OverviewView),
    TopMovies {
        #[serde(rename = "minCount")]
        min_count: usize,
        movies: Vec<MovieStats>,
    },
    FindSimilar {
        title: String,
        movies: Vec<SimilarMovie>,
    },
    Titles {
        titles: Vec<String>,
    },
}
