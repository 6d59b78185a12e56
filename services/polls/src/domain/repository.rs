#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use crate::domain::types::{Choice, Question};
use crate::error::PollsServiceError;

/// Repository for questions and their choices.
pub trait QuestionRepository: Send + Sync {
    /// Up to `limit` questions with `pub_date <= now`, newest first.
    async fn latest_published(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Question>, PollsServiceError>;

    /// Any question, published or not.
    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, PollsServiceError>;

    async fn list_choices(&self, question_id: i32) -> Result<Vec<Choice>, PollsServiceError>;
}

/// Vote counter writes.
pub trait VoteRepository: Send + Sync {
    /// Atomically add one vote to `choice_id`, provided it belongs to
    /// `question_id`. Returns `false` when no such choice exists on the question.
    async fn increment_vote(
        &self,
        question_id: i32,
        choice_id: i32,
    ) -> Result<bool, PollsServiceError>;
}
