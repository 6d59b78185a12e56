use chrono::NaiveDate;

use locallib_domain::id::BookInstanceId;
use locallib_domain::renewal::{default_renewal_date, validate_renewal_date};

use crate::domain::repository::BookInstanceRepository;
use crate::domain::types::BookInstance;
use crate::error::CatalogServiceError;

// ── GetRenewalForm ───────────────────────────────────────────────────────────

/// Context for a first render of the renewal form.
#[derive(Debug, Clone)]
pub struct RenewalForm {
    pub instance: BookInstance,
    pub proposed_renewal_date: NaiveDate,
}

pub struct GetRenewalFormUseCase<R: BookInstanceRepository> {
    pub repo: R,
}

impl<R: BookInstanceRepository> GetRenewalFormUseCase<R> {
    pub async fn execute(
        &self,
        id: BookInstanceId,
        today: NaiveDate,
    ) -> Result<RenewalForm, CatalogServiceError> {
        let instance = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::BookInstanceNotFound)?;
        Ok(RenewalForm {
            instance,
            proposed_renewal_date: default_renewal_date(today),
        })
    }
}

// ── RenewBookInstance ────────────────────────────────────────────────────────

/// Move a copy's due date. The caller's capability must already be checked.
///
/// Lookup, then validation, then exactly one write. Any failure leaves the
/// stored due date untouched; `status` is never changed.
pub struct RenewBookInstanceUseCase<R: BookInstanceRepository> {
    pub repo: R,
}

impl<R: BookInstanceRepository> RenewBookInstanceUseCase<R> {
    pub async fn execute(
        &self,
        id: BookInstanceId,
        proposed: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<BookInstance, CatalogServiceError> {
        let mut instance = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::BookInstanceNotFound)?;

        let proposed = proposed.ok_or(CatalogServiceError::RenewalDateRequired)?;
        let due_back = validate_renewal_date(proposed, today)?;

        if !self.repo.update_due_back(id, due_back).await? {
            return Err(CatalogServiceError::BookInstanceNotFound);
        }
        tracing::info!(book_instance_id = %id, %due_back, "loan renewed");

        instance.due_back = Some(due_back);
        Ok(instance)
    }
}
