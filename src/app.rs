use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/ingest",
            post(handlers::ingest).fallback(handlers::method_not_allowed),
        )
        .route(
            "/query",
            get(handlers::query).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/overview",
            get(handlers::get_overview).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/hourly",
            get(handlers::get_hourly).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/detail",
            get(handlers::get_detail).fallback(handlers::method_not_allowed),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
