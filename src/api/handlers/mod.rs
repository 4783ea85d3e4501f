use serde::Deserialize;

use crate::services::dashboard::DashboardService;

pub mod movies;

pub struct AppState {
    pub dashboard: DashboardService,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingParams {
    pub min_count: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarParams {
    pub title: String,
    pub min_count: Option<usize>,
    pub limit: Option<usize>,
}
