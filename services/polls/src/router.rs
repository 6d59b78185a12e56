use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use locallib_core::health::{healthz, readyz};
use locallib_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    question::{get_latest_questions, get_question, get_results},
    vote::vote,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Polls
        .route("/polls", get(get_latest_questions))
        .route("/polls/{id}", get(get_question))
        .route("/polls/{id}/results", get(get_results))
        .route("/polls/{id}/vote", post(vote))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
