use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use locallib_auth_types::guard::require_capability;
use locallib_auth_types::identity::IdentityHeaders;
use locallib_domain::capability::Capability;
use locallib_domain::loan::LoanStatus;
use locallib_domain::pagination::{Page, PageRequest};

use crate::domain::types::{BookInstance, LoanedBookInstance};
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::book_instance::{
    CreateBookInstanceInput, CreateBookInstanceUseCase, GetAllLoanedBooksUseCase,
    GetLoanedBooksByUserUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct BookInstanceResponse {
    pub id: Uuid,
    pub book_id: i32,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub status: LoanStatus,
    pub status_label: &'static str,
    pub borrower_id: Option<Uuid>,
    pub is_overdue: bool,
}

impl BookInstanceResponse {
    pub fn from_instance(instance: BookInstance, today: NaiveDate) -> Self {
        Self {
            is_overdue: instance.is_overdue(today),
            id: instance.id.0,
            book_id: instance.book_id,
            imprint: instance.imprint,
            due_back: instance.due_back,
            status: instance.status,
            status_label: instance.status.label(),
            borrower_id: instance.borrower_id,
        }
    }
}

#[derive(Serialize)]
pub struct LoanedBookResponse {
    pub book_title: String,
    #[serde(flatten)]
    pub instance: BookInstanceResponse,
}

fn loaned_page(page: Page<LoanedBookInstance>, today: NaiveDate) -> Page<LoanedBookResponse> {
    page.map(|loaned| LoanedBookResponse {
        book_title: loaned.book_title,
        instance: BookInstanceResponse::from_instance(loaned.instance, today),
    })
}

// ── GET /catalog/mybooks ─────────────────────────────────────────────────────

pub async fn get_my_loans(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<LoanedBookResponse>>, CatalogServiceError> {
    let usecase = GetLoanedBooksByUserUseCase {
        repo: state.book_instance_repo(),
    };
    let loans = usecase.execute(identity.user_id, page).await?;
    Ok(Json(loaned_page(loans, state.clock.today())))
}

// ── GET /catalog/borrowed ────────────────────────────────────────────────────

pub async fn get_all_loans(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<LoanedBookResponse>>, CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    let usecase = GetAllLoanedBooksUseCase {
        repo: state.book_instance_repo(),
    };
    let loans = usecase.execute(page).await?;
    Ok(Json(loaned_page(loans, state.clock.today())))
}

// ── POST /catalog/bookinstances ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBookInstanceRequest {
    pub book_id: i32,
    pub imprint: String,
}

pub async fn create_book_instance(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateBookInstanceRequest>,
) -> Result<(StatusCode, Json<BookInstanceResponse>), CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    let usecase = CreateBookInstanceUseCase {
        books: state.book_repo(),
        instances: state.book_instance_repo(),
    };
    let instance = usecase
        .execute(CreateBookInstanceInput {
            book_id: body.book_id,
            imprint: body.imprint,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(BookInstanceResponse::from_instance(
            instance,
            state.clock.today(),
        )),
    ))
}
