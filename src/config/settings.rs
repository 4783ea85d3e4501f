use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DataSettings {
    pub ratings_path: PathBuf,
    pub items_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            ratings_path: PathBuf::from("data/u.data"),
            items_path: PathBuf::from("data/u.item"),
        }
    }
}

impl DataSettings {
    /// Defaults, overridden by `MOVIELENS_RATINGS` / `MOVIELENS_ITEMS` when set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ratings_path: std::env::var("MOVIELENS_RATINGS")
                .map(PathBuf::from)
                .unwrap_or(defaults.ratings_path),
            items_path: std::env::var("MOVIELENS_ITEMS")
                .map(PathBuf::from)
                .unwrap_or(defaults.items_path),
        }
    }

    pub fn with_overrides(mut self, ratings: Option<PathBuf>, items: Option<PathBuf>) -> Self {
        if let Some(path) = ratings {
            self.ratings_path = path;
        }
        if let Some(path) = items {
            self.items_path = path;
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct RankingSettings {
    pub min_rating_count: usize,
    pub top_k: usize,
    pub most_rated_k: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            min_rating_count: 50,
            top_k: 10,
            most_rated_k: 10,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub data: DataSettings,
    pub ranking: RankingSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::from_env(),
            ranking: RankingSettings::default(),
        }
    }
}
