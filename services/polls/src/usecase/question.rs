use chrono::{DateTime, Utc};

use crate::domain::repository::QuestionRepository;
use crate::domain::types::{LATEST_QUESTIONS, Question, QuestionDetail};
use crate::error::PollsServiceError;

// ── GetLatestQuestions ───────────────────────────────────────────────────────

pub struct GetLatestQuestionsUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> GetLatestQuestionsUseCase<R> {
    pub async fn execute(&self, now: DateTime<Utc>) -> Result<Vec<Question>, PollsServiceError> {
        self.repo.latest_published(now, LATEST_QUESTIONS).await
    }
}

// ── GetQuestion ──────────────────────────────────────────────────────────────

/// Voting page. Questions scheduled for the future are reported as missing.
pub struct GetQuestionUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> GetQuestionUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<QuestionDetail, PollsServiceError> {
        let question = self
            .repo
            .find_by_id(id)
            .await?
            .filter(|q| q.is_published(now))
            .ok_or(PollsServiceError::QuestionNotFound)?;
        let choices = self.repo.list_choices(id).await?;
        Ok(QuestionDetail { question, choices })
    }
}

// ── GetResults ───────────────────────────────────────────────────────────────

pub struct GetResultsUseCase<R: QuestionRepository> {
    pub repo: R,
}

impl<R: QuestionRepository> GetResultsUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<QuestionDetail, PollsServiceError> {
        let question = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(PollsServiceError::QuestionNotFound)?;
        let choices = self.repo.list_choices(id).await?;
        Ok(QuestionDetail { question, choices })
    }
}
