use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Redirect,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use locallib_auth_types::guard::require_capability;
use locallib_auth_types::identity::IdentityHeaders;
use locallib_domain::capability::Capability;
use locallib_domain::id::BookInstanceId;

use crate::error::CatalogServiceError;
use crate::handlers::book_instance::BookInstanceResponse;
use crate::state::AppState;
use crate::usecase::renewal::{GetRenewalFormUseCase, RenewBookInstanceUseCase};

/// Where a successful renewal sends the librarian.
pub const RENEWED_REDIRECT: &str = "/catalog/borrowed";

#[derive(Serialize)]
pub struct RenewalFormResponse {
    pub book_instance: BookInstanceResponse,
    pub proposed_renewal_date: NaiveDate,
}

// ── GET /catalog/book/{id}/renew ─────────────────────────────────────────────

pub async fn get_renewal_form(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RenewalFormResponse>, CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    let today = state.clock.today();
    let usecase = GetRenewalFormUseCase {
        repo: state.book_instance_repo(),
    };
    let form = usecase.execute(BookInstanceId(id), today).await?;
    Ok(Json(RenewalFormResponse {
        book_instance: BookInstanceResponse::from_instance(form.instance, today),
        proposed_renewal_date: form.proposed_renewal_date,
    }))
}

// ── POST /catalog/book/{id}/renew ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RenewBookInstanceRequest {
    pub renewal_date: Option<NaiveDate>,
}

pub async fn renew_book_instance(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<RenewBookInstanceRequest>, JsonRejection>,
) -> Result<Redirect, CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    // Decoded only after the guard: an unprivileged caller is refused whatever the body.
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable renewal form");
        CatalogServiceError::InvalidField("renewal_date")
    })?;
    let usecase = RenewBookInstanceUseCase {
        repo: state.book_instance_repo(),
    };
    usecase
        .execute(BookInstanceId(id), body.renewal_date, state.clock.today())
        .await?;
    Ok(Redirect::to(RENEWED_REDIRECT))
}
