use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::types::{Choice, Question, QuestionDetail};
use crate::error::PollsServiceError;
use crate::state::AppState;
use crate::usecase::question::{GetLatestQuestionsUseCase, GetQuestionUseCase, GetResultsUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub question_text: String,
    #[serde(serialize_with = "locallib_core::serde::to_rfc3339_ms")]
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl QuestionResponse {
    fn from_question(question: Question, now: DateTime<Utc>) -> Self {
        Self {
            was_published_recently: question.was_published_recently(now),
            id: question.id,
            question_text: question.question_text,
            pub_date: question.pub_date,
        }
    }
}

#[derive(Serialize)]
pub struct ChoiceResponse {
    pub id: i32,
    pub choice_text: String,
}

#[derive(Serialize)]
pub struct ChoiceResultResponse {
    pub id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Serialize)]
pub struct QuestionDetailResponse<C> {
    #[serde(flatten)]
    pub question: QuestionResponse,
    pub choices: Vec<C>,
}

fn detail_response<C>(
    detail: QuestionDetail,
    now: DateTime<Utc>,
    choice: impl FnMut(Choice) -> C,
) -> QuestionDetailResponse<C> {
    QuestionDetailResponse {
        question: QuestionResponse::from_question(detail.question, now),
        choices: detail.choices.into_iter().map(choice).collect(),
    }
}

// ── GET /polls ───────────────────────────────────────────────────────────────

pub async fn get_latest_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, PollsServiceError> {
    let now = state.clock.now();
    let usecase = GetLatestQuestionsUseCase {
        repo: state.question_repo(),
    };
    let questions = usecase.execute(now).await?;
    Ok(Json(
        questions
            .into_iter()
            .map(|q| QuestionResponse::from_question(q, now))
            .collect(),
    ))
}

// ── GET /polls/{id} ──────────────────────────────────────────────────────────

pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<QuestionDetailResponse<ChoiceResponse>>, PollsServiceError> {
    let now = state.clock.now();
    let usecase = GetQuestionUseCase {
        repo: state.question_repo(),
    };
    let detail = usecase.execute(id, now).await?;
    Ok(Json(detail_response(detail, now, |c| ChoiceResponse {
        id: c.id,
        choice_text: c.choice_text,
    })))
}

// ── GET /polls/{id}/results ──────────────────────────────────────────────────

pub async fn get_results(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<QuestionDetailResponse<ChoiceResultResponse>>, PollsServiceError> {
    let usecase = GetResultsUseCase {
        repo: state.question_repo(),
    };
    let detail = usecase.execute(id).await?;
    Ok(Json(detail_response(detail, state.clock.now(), |c| {
        ChoiceResultResponse {
            id: c.id,
            choice_text: c.choice_text,
            votes: c.votes,
        }
    })))
}
