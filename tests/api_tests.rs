use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use movielens_dashboard::api::{AppState, create_router};
use movielens_dashboard::config::RankingSettings;
use movielens_dashboard::dataset::{FlatRating, RatingTable};
use movielens_dashboard::services::DashboardService;

fn build_table(rows: &[(i64, i64, u8, &str)]) -> RatingTable {
    RatingTable::new(
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

fn create_test_app() -> axum::Router {
    let table = build_table(&[
        (1, 10, 5, "A"),
        (1, 20, 3, "B"),
        (2, 10, 4, "A"),
        (2, 20, 2, "B"),
        (3, 30, 1, "C"),
    ]);
    let state = Arc::new(AppState {
        dashboard: DashboardService::new(Arc::new(table), RankingSettings::default()),
    });
    create_router(state)
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn test_overview() {
    let (status, body) = get_json("/api/overview").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["totalRatings"], 5);
    assert_eq!(body["ratingDistribution"].as_array().unwrap().len(), 5);
    assert_eq!(body["ratingDistribution"][0]["count"], 1);
    assert_eq!(body["mostRated"][0]["title"], "A");
}

#[tokio::test]
async fn test_top_movies_uses_threshold() {
    let (status, body) = get_json("/api/top-movies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], "topMovies");
    assert_eq!(body["movies"].as_array().unwrap().len(), 0);

    let (_, body) = get_json("/api/top-movies?minCount=2&limit=1").await;
    let movies = body["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "A");
    assert_eq!(movies[0]["ratingCount"], 2);
}

#[tokio::test]
async fn test_zero_limit_returns_no_rows() {
    let (status, body) = get_json("/api/top-movies?minCount=0&limit=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"].as_array().unwrap().len(), 0);

    let (_, body) = get_json("/api/similar?title=A&minCount=0&limit=0").await;
    assert_eq!(body["movies"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_titles() {
    let (status, body) = get_json("/api/titles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(["A", "B", "C"]));
}

#[tokio::test]
async fn test_similar() {
    let (status, body) = get_json("/api/similar?title=A&minCount=0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "A");
    let movies = body["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "B");
    assert!((movies[0]["correlation"].as_f64().unwrap() - 1.0).abs() < 1e-12);
}

#[tokio::test]
async fn test_similar_unknown_title_is_404() {
    let (status, body) = get_json("/api/similar?title=Missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Movie not found: Missing");
}

#[tokio::test]
async fn test_similar_requires_title() {
    let (status, _) = get_json("/api/similar").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
