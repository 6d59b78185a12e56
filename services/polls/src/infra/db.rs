use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::Expr,
};

use locallib_polls_schema::{choices, questions};

use crate::domain::repository::{QuestionRepository, VoteRepository};
use crate::domain::types::{Choice, Question};
use crate::error::PollsServiceError;

// ── Question repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbQuestionRepository {
    pub db: DatabaseConnection,
}

impl QuestionRepository for DbQuestionRepository {
    async fn latest_published(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Question>, PollsServiceError> {
        let models = questions::Entity::find()
            .filter(questions::Column::PubDate.lte(now))
            .order_by_desc(questions::Column::PubDate)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list latest questions")?;
        Ok(models.into_iter().map(question_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, PollsServiceError> {
        let model = questions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find question by id")?;
        Ok(model.map(question_from_model))
    }

    async fn list_choices(&self, question_id: i32) -> Result<Vec<Choice>, PollsServiceError> {
        let models = choices::Entity::find()
            .filter(choices::Column::QuestionId.eq(question_id))
            .order_by_asc(choices::Column::Id)
            .all(&self.db)
            .await
            .context("list choices")?;
        Ok(models
            .into_iter()
            .map(|m| Choice {
                id: m.id,
                question_id: m.question_id,
                choice_text: m.choice_text,
                votes: m.votes,
            })
            .collect())
    }
}

fn question_from_model(model: questions::Model) -> Question {
    Question {
        id: model.id,
        question_text: model.question_text,
        pub_date: model.pub_date,
    }
}

// ── Vote repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVoteRepository {
    pub db: DatabaseConnection,
}

impl VoteRepository for DbVoteRepository {
    async fn increment_vote(
        &self,
        question_id: i32,
        choice_id: i32,
    ) -> Result<bool, PollsServiceError> {
        // votes = votes + 1 in one statement; concurrent voters never overwrite each other.
        let result = choices::Entity::update_many()
            .col_expr(
                choices::Column::Votes,
                Expr::col(choices::Column::Votes).add(1),
            )
            .filter(choices::Column::Id.eq(choice_id))
            .filter(choices::Column::QuestionId.eq(question_id))
            .exec(&self.db)
            .await
            .context("increment vote")?;
        Ok(result.rows_affected > 0)
    }
}
