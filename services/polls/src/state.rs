use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use locallib_domain::clock::Clock;

use crate::infra::db::{DbQuestionRepository, DbVoteRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn question_repo(&self) -> DbQuestionRepository {
        DbQuestionRepository {
            db: self.db.clone(),
        }
    }

    pub fn vote_repo(&self) -> DbVoteRepository {
        DbVoteRepository {
            db: self.db.clone(),
        }
    }
}
