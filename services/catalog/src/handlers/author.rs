use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use locallib_auth_types::guard::require_capability;
use locallib_auth_types::identity::IdentityHeaders;
use locallib_domain::capability::Capability;
use locallib_domain::pagination::{Page, PageRequest};

use crate::domain::types::{Author, AuthorInput};
use crate::error::CatalogServiceError;
use crate::handlers::book::BookResponse;
use crate::state::AppState;
use crate::usecase::author::{
    CreateAuthorUseCase, DeleteAuthorUseCase, GetAuthorUseCase, GetAuthorsUseCase,
    UpdateAuthorUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AuthorResponse {
    pub id: i32,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            name: author.display_name(),
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
        }
    }
}

#[derive(Serialize)]
pub struct AuthorDetailResponse {
    #[serde(flatten)]
    pub author: AuthorResponse,
    pub books: Vec<BookResponse>,
}

// ── GET /catalog/authors ─────────────────────────────────────────────────────

pub async fn get_authors(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<AuthorResponse>>, CatalogServiceError> {
    let usecase = GetAuthorsUseCase {
        repo: state.author_repo(),
    };
    let authors = usecase.execute(page).await?;
    Ok(Json(authors.map(AuthorResponse::from)))
}

// ── GET /catalog/author/{id} ─────────────────────────────────────────────────

pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AuthorDetailResponse>, CatalogServiceError> {
    let usecase = GetAuthorUseCase {
        authors: state.author_repo(),
        books: state.book_repo(),
    };
    let detail = usecase.execute(id).await?;
    Ok(Json(AuthorDetailResponse {
        author: detail.author.into(),
        books: detail.books.into_iter().map(BookResponse::from).collect(),
    }))
}

// ── POST /catalog/authors, PUT /catalog/author/{id} ──────────────────────────

#[derive(Deserialize)]
pub struct AuthorRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl From<AuthorRequest> for AuthorInput {
    fn from(body: AuthorRequest) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            date_of_birth: body.date_of_birth,
            date_of_death: body.date_of_death,
        }
    }
}

pub async fn create_author(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<AuthorRequest>,
) -> Result<(StatusCode, Json<AuthorResponse>), CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    let usecase = CreateAuthorUseCase {
        repo: state.author_repo(),
    };
    let author = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(author.into())))
}

pub async fn update_author(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<AuthorRequest>,
) -> Result<StatusCode, CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    let usecase = UpdateAuthorUseCase {
        repo: state.author_repo(),
    };
    usecase.execute(id, body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /catalog/author/{id} ──────────────────────────────────────────────

pub async fn delete_author(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    let usecase = DeleteAuthorUseCase {
        repo: state.author_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
