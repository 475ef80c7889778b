use crate::handlers::{assessment, question};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/questions", get(question::list_questions))
        .route("/assessments", post(assessment::create_assessment))
        .route("/assessments/{id}", get(assessment::get_assessment))
        .route("/references/{reference}", get(assessment::list_by_reference));

    Router::new()
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
