use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Redirect,
};
use serde::Deserialize;

use crate::error::PollsServiceError;
use crate::state::AppState;
use crate::usecase::vote::VoteUseCase;

// ── POST /polls/{id}/vote ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VoteRequest {
    pub choice: Option<i32>,
}

pub async fn vote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Redirect, PollsServiceError> {
    // A missing or unreadable form counts as no selection.
    let choice = body.ok().and_then(|Json(body)| body.choice);
    let usecase = VoteUseCase {
        questions: state.question_repo(),
        votes: state.vote_repo(),
    };
    usecase.execute(id, choice).await?;
    Ok(Redirect::to(&format!("/polls/{id}/results")))
}
