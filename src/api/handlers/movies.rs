use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use super::{AppState, RankingParams, SimilarParams};
use crate::dashboard::{OverviewView, Page, PageView};
use crate::errors::DashboardError;

const MAX_LIMIT: usize = 1000;

pub async fn get_overview(State(state): State<Arc<AppState>>) -> Json<OverviewView> {
    Json(state.dashboard.overview())
}

pub async fn get_top_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> Result<Json<PageView>, DashboardError> {
    let ranking = state.dashboard.ranking();
    let page = Page::TopMovies {
        min_count: params.min_count.unwrap_or(ranking.min_rating_count),
        limit: params.limit.unwrap_or(ranking.top_k).min(MAX_LIMIT),
    };

    state.dashboard.render(&page).map(Json)
}

pub async fn get_titles(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.dashboard.titles())
}

pub async fn get_similar(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SimilarParams>,
) -> Result<Json<PageView>, DashboardError> {
    let ranking = state.dashboard.ranking();
    let page = Page::FindSimilar {
        title: params.title,
        min_count: params.min_count.unwrap_or(ranking.min_rating_count),
        limit: params.limit.unwrap_or(ranking.top_k).min(MAX_LIMIT),
    };

    state.dashboard.render(&page).map(Json)
}
