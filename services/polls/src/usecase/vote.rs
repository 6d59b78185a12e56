use crate::domain::repository::{QuestionRepository, VoteRepository};
use crate::error::PollsServiceError;

// ── Vote ─────────────────────────────────────────────────────────────────────

/// Count one vote. A missing or foreign choice changes no counter.
pub struct VoteUseCase<Q: QuestionRepository, V: VoteRepository> {
    pub questions: Q,
    pub votes: V,
}

impl<Q: QuestionRepository, V: VoteRepository> VoteUseCase<Q, V> {
    pub async fn execute(
        &self,
        question_id: i32,
        choice_id: Option<i32>,
    ) -> Result<(), PollsServiceError> {
        if self.questions.find_by_id(question_id).await?.is_none() {
            return Err(PollsServiceError::QuestionNotFound);
        }
        let choice_id = choice_id.ok_or(PollsServiceError::MissingSelection)?;
        if !self.votes.increment_vote(question_id, choice_id).await? {
            return Err(PollsServiceError::MissingSelection);
        }
        tracing::info!(question_id, choice_id, "vote counted");
        Ok(())
    }
}
