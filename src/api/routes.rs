use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    movies::{get_overview, get_similar, get_titles, get_top_movies},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/overview", get(get_overview))
        .route("/api/top-movies", get(get_top_movies))
        .route("/api/titles", get(get_titles))
        .route("/api/similar", get(get_similar))
        .with_state(state)
}
