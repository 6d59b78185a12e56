use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::summary::GetCatalogSummaryUseCase;

#[derive(Serialize)]
pub struct CatalogSummaryResponse {
    pub num_books: u64,
    pub num_instances: u64,
    pub num_instances_available: u64,
    pub num_authors: u64,
}

// ── GET /catalog ─────────────────────────────────────────────────────────────

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<CatalogSummaryResponse>, CatalogServiceError> {
    let usecase = GetCatalogSummaryUseCase {
        repo: state.counts_repo(),
    };
    let counts = usecase.execute().await?;
    Ok(Json(CatalogSummaryResponse {
        num_books: counts.books,
        num_instances: counts.instances,
        num_instances_available: counts.available_instances,
        num_authors: counts.authors,
    }))
}
