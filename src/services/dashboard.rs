use log::info;
use std::sync::Arc;

use crate::cache::TableCache;
use crate::config::settings::{AppConfig, RankingSettings};
use crate::dashboard::{OverviewView, Page, PageView};
use crate::dataset::RatingTable;
use crate::errors::{DashboardResult, NotFoundError};
use crate::similarity::{self, SimilarMovie};
use crate::stats::{self, MovieStats};

/// Read-only view of the loaded table that answers page requests.
///
/// Every call recomputes its derived statistics from the shared table.
#[derive(Clone)]
pub struct DashboardService {
    table: Arc<RatingTable>,
    ranking: RankingSettings,
}

impl DashboardService {
    pub fn new(table: Arc<RatingTable>, ranking: RankingSettings) -> Self {
        Self { table, ranking }
    }

    /// Service over the table held by `cache`, loading it on first use.
    pub fn load(cache: &TableCache, config: &AppConfig) -> DashboardResult<Self> {
        let table = cache.get_or_load(&config.data)?;
        Ok(Self::new(table, config.ranking.clone()))
    }

    pub fn ranking(&self) -> &RankingSettings {
        &self.ranking
    }

    pub fn render(&self, page: &Page) -> DashboardResult<PageView> {
        match page {
            Page::Overview => Ok(PageView::Overview(self.overview())),
            Page::TopMovies { min_count, limit } => Ok(PageView::TopMovies {
                min_count: *min_count,
                movies: self.top_movies(*min_count, *limit),
            }),
            Page::FindSimilar {
                title,
                min_count,
                limit,
            } => Ok(PageView::FindSimilar {
                title: title.clone(),
                movies: self.similar(title, *min_count, *limit)?,
            }),
            Page::Titles => Ok(PageView::Titles {
                titles: self.titles(),
            }),
        }
    }

    pub fn overview(&self) -> OverviewView {
        OverviewView {
            summary: stats::dataset_summary(&self.table),
            rating_distribution: stats::rating_distribution(&self.table),
            most_rated: stats::most_rated_movies(&self.table, self.ranking.most_rated_k),
        }
    }

    pub fn top_movies(&self, min_count: usize, limit: usize) -> Vec<MovieStats> {
        let movies = stats::top_rated_movies(&self.table, min_count, limit);
        info!("{} movies with {}+ ratings", movies.len(), min_count);
        movies
    }

    pub fn titles(&self) -> Vec<String> {
        self.table.titles()
    }

    pub fn similar(
        &self,
        title: &str,
        min_count: usize,
        limit: usize,
    ) -> Result<Vec<SimilarMovie>, NotFoundError> {
        let movies = similarity::find_similar(&self.table, title, min_count, limit)?;
        info!("{} movies similar to {:?}", movies.len(), title);
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DashboardError, LoadError};

    fn service() -> DashboardService {
        let table = RatingTable::from_tuples(&[
            (1, 10, 5, "A"),
            (1, 20, 3, "B"),
            (2, 10, 4, "A"),
            (2, 20, 2, "B"),
        ]);
        DashboardService::new(Arc::new(table), RankingSettings::default())
    }

    #[test]
    fn test_overview_page() {
        let view = service().render(&Page::Overview).unwrap();
        match view {
            PageView::Overview(overview) => {
                assert_eq!(overview.summary.total_ratings, 4);
                assert_eq!(overview.rating_distribution.total(), 4);
                assert_eq!(overview.most_rated.len(), 2);
            }
            other => panic!("expected overview, got {other:?}"),
        }
    }

    #[test]
    fn test_top_movies_page_with_default_threshold_is_empty() {
        let ranking = RankingSettings::default();
        let view = service()
            .render(&Page::TopMovies {
                min_count: ranking.min_rating_count,
                limit: ranking.top_k,
            })
            .unwrap();

        assert_eq!(
            view,
            PageView::TopMovies {
                min_count: 50,
                movies: vec![]
            }
        );
    }

    #[test]
    fn test_find_similar_page() {
        let view = service()
            .render(&Page::FindSimilar {
                title: "A".to_string(),
                min_count: 0,
                limit: 10,
            })
            .unwrap();

        let PageView::FindSimilar { title, movies } = view else {
            panic!("expected similar page");
        };
        assert_eq!(title, "A");
        assert_eq!(movies.len(), 1);
        assert!((movies[0].correlation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_title_surfaces_not_found() {
        let err = service()
            .render(&Page::FindSimilar {
                title: "Nope".to_string(),
                min_count: 0,
                limit: 10,
            })
            .unwrap_err();

        assert!(matches!(err, DashboardError::NotFound(_)));
    }

    #[test]
    fn test_load_failure_is_a_dashboard_error() {
        let mut config = AppConfig::default();
        config.data.ratings_path = "/missing/movielens/u.data".into();

        let err = DashboardService::load(&TableCache::new(), &config).err().unwrap();
        assert!(matches!(err, DashboardError::Load(LoadError::Missing { .. })));
    }

    #[test]
    fn test_load_reuses_cached_table() {
        let cache = TableCache::new();
        cache
            .get_or_load_with(|| Ok(RatingTable::from_tuples(&[(1, 10, 5, "A")])))
            .unwrap();

        let service = DashboardService::load(&cache, &AppConfig::default()).unwrap();
        assert_eq!(service.titles(), vec!["A".to_string()]);
    }

    #[test]
    fn test_titles_page() {
        let view = service().render(&Page::Titles).unwrap();
        assert_eq!(
            view,
            PageView::Titles {
                titles: vec!["A".to_string(), "B".to_string()]
            }
        );
    }
}
