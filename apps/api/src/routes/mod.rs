pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/questions", get(handlers::handle_list_questions))
        .route(
            "/api/v1/assessments",
            post(handlers::handle_submit_assessment),
        )
        .route(
            "/api/v1/recommendations",
            get(handlers::handle_get_recommendations),
        )
        .with_state(state)
}
