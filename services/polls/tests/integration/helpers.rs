use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use locallib_polls::domain::repository::{QuestionRepository, VoteRepository};
use locallib_polls::domain::types::{Choice, Question};
use locallib_polls::error::PollsServiceError;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
}

// ── MockPolls ────────────────────────────────────────────────────────────────

/// In-memory questions and choices. Clones share the same store, so one handle
/// can serve as both repositories and stay around for assertions.
#[derive(Clone)]
pub struct MockPolls {
    pub questions: Arc<Mutex<Vec<Question>>>,
    pub choices: Arc<Mutex<Vec<Choice>>>,
}

impl MockPolls {
    /// Question 1 with choices 11, 12, 13; question 2 with choice 21.
    pub fn seeded() -> Self {
        let question = |id, text: &str| Question {
            id,
            question_text: text.into(),
            pub_date: now(),
        };
        let choice = |id, question_id, text: &str, votes| Choice {
            id,
            question_id,
            choice_text: text.into(),
            votes,
        };
        Self {
            questions: Arc::new(Mutex::new(vec![
                question(1, "What's new?"),
                question(2, "Favourite colour?"),
            ])),
            choices: Arc::new(Mutex::new(vec![
                choice(11, 1, "Not much", 0),
                choice(12, 1, "The sky", 4),
                choice(13, 1, "Just hacking again", 1),
                choice(21, 2, "Blue", 7),
            ])),
        }
    }

    pub fn votes(&self) -> Vec<(i32, i32)> {
        self.choices
            .lock()
            .unwrap()
            .iter()
            .map(|c| (c.id, c.votes))
            .collect()
    }
}

impl QuestionRepository for MockPolls {
    async fn latest_published(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Question>, PollsServiceError> {
        let mut published: Vec<_> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.pub_date <= now)
            .cloned()
            .collect();
        published.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
        published.truncate(limit as usize);
        Ok(published)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, PollsServiceError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn list_choices(&self, question_id: i32) -> Result<Vec<Choice>, PollsServiceError> {
        Ok(self
            .choices
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect())
    }
}

impl VoteRepository for MockPolls {
    async fn increment_vote(
        &self,
        question_id: i32,
        choice_id: i32,
    ) -> Result<bool, PollsServiceError> {
        let mut choices = self.choices.lock().unwrap();
        match choices
            .iter_mut()
            .find(|c| c.id == choice_id && c.question_id == question_id)
        {
            Some(choice) => {
                choice.votes += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
