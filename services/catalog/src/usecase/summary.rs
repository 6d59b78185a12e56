use crate::domain::repository::CatalogCountsRepository;
use crate::domain::types::CatalogCounts;
use crate::error::CatalogServiceError;

// ── GetCatalogSummary ────────────────────────────────────────────────────────

pub struct GetCatalogSummaryUseCase<R: CatalogCountsRepository> {
    pub repo: R,
}

impl<R: CatalogCountsRepository> GetCatalogSummaryUseCase<R> {
    pub async fn execute(&self) -> Result<CatalogCounts, CatalogServiceError> {
        self.repo.counts().await
    }
}
