use chrono::{DateTime, Duration, Utc};

/// How many questions the index lists.
pub const LATEST_QUESTIONS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// Published within the last day, and not in the future.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

/// A question with its choices, in id order.
#[derive(Debug, Clone)]
pub struct QuestionDetail {
    pub question: Question,
    pub choices: Vec<Choice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn question_at(pub_date: DateTime<Utc>) -> Question {
        Question {
            id: 1,
            question_text: "What's up?".into(),
            pub_date,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn future_question_is_not_recent() {
        let q = question_at(now() + Duration::days(30));
        assert!(!q.was_published_recently(now()));
        assert!(!q.is_published(now()));
    }

    #[test]
    fn old_question_is_not_recent() {
        let q = question_at(now() - Duration::days(1) - Duration::seconds(1));
        assert!(!q.was_published_recently(now()));
        assert!(q.is_published(now()));
    }

    #[test]
    fn question_from_the_last_day_is_recent() {
        let q = question_at(now() - Duration::hours(23) - Duration::minutes(59));
        assert!(q.was_published_recently(now()));
    }
}
