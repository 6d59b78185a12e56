use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Polls service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum PollsServiceError {
    #[error("question not found")]
    QuestionNotFound,
    #[error("You didn't select a choice.")]
    MissingSelection,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl PollsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::QuestionNotFound => "QUESTION_NOT_FOUND",
            Self::MissingSelection => "MISSING_SELECTION",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for PollsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::QuestionNotFound => StatusCode::NOT_FOUND,
            Self::MissingSelection => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if matches!(self, Self::MissingSelection) {
            body["field"] = serde_json::Value::from("choice");
        }
        (status, axum::Json(body)).into_response()
    }
}
