use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use locallib_domain::clock::Clock;

use crate::infra::db::{
    DbAuthorRepository, DbBookInstanceRepository, DbBookRepository, DbCatalogCountsRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn author_repo(&self) -> DbAuthorRepository {
        DbAuthorRepository {
            db: self.db.clone(),
        }
    }

    pub fn book_repo(&self) -> DbBookRepository {
        DbBookRepository {
            db: self.db.clone(),
        }
    }

    pub fn book_instance_repo(&self) -> DbBookInstanceRepository {
        DbBookInstanceRepository {
            db: self.db.clone(),
        }
    }

    pub fn counts_repo(&self) -> DbCatalogCountsRepository {
        DbCatalogCountsRepository {
            db: self.db.clone(),
        }
    }
}
