use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use locallib_auth_types::guard::require_capability;
use locallib_auth_types::identity::IdentityHeaders;
use locallib_domain::capability::Capability;
use locallib_domain::pagination::{Page, PageRequest};

use crate::domain::types::{Book, BookInput};
use crate::error::CatalogServiceError;
use crate::handlers::book_instance::BookInstanceResponse;
use crate::state::AppState;
use crate::usecase::book::{
    CreateBookUseCase, DeleteBookUseCase, GetBookUseCase, GetBooksUseCase, UpdateBookUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct BookResponse {
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub summary: String,
    pub isbn: String,
    pub language_id: Option<i32>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author_id: book.author_id,
            summary: book.summary,
            isbn: book.isbn,
            language_id: book.language_id,
        }
    }
}

#[derive(Serialize)]
pub struct BookAuthorResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize)]
pub struct BookDetailResponse {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author: Option<BookAuthorResponse>,
    pub language: Option<String>,
    pub genres: Vec<String>,
    pub display_genre: String,
    pub instances: Vec<BookInstanceResponse>,
}

// ── GET /catalog/books ───────────────────────────────────────────────────────

pub async fn get_books(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<BookResponse>>, CatalogServiceError> {
    let usecase = GetBooksUseCase {
        repo: state.book_repo(),
    };
    let books = usecase.execute(page).await?;
    Ok(Json(books.map(BookResponse::from)))
}

// ── GET /catalog/book/{id} ───────────────────────────────────────────────────

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BookDetailResponse>, CatalogServiceError> {
    let usecase = GetBookUseCase {
        repo: state.book_repo(),
    };
    let detail = usecase.execute(id).await?;
    let today = state.clock.today();
    let display_genre = detail.display_genre();
    Ok(Json(BookDetailResponse {
        id: detail.book.id,
        title: detail.book.title,
        summary: detail.book.summary,
        isbn: detail.book.isbn,
        author: detail.author.map(|a| BookAuthorResponse {
            id: a.id,
            name: a.display_name(),
        }),
        language: detail.language.map(|l| l.name),
        genres: detail.genres.into_iter().map(|g| g.name).collect(),
        display_genre,
        instances: detail
            .instances
            .into_iter()
            .map(|i| BookInstanceResponse::from_instance(i, today))
            .collect(),
    }))
}

// ── POST /catalog/books, PUT /catalog/book/{id} ──────────────────────────────

#[derive(Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub author_id: Option<i32>,
    #[serde(default)]
    pub summary: String,
    pub isbn: String,
    pub language_id: Option<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

impl From<BookRequest> for BookInput {
    fn from(body: BookRequest) -> Self {
        Self {
            title: body.title,
            author_id: body.author_id,
            summary: body.summary,
            isbn: body.isbn,
            language_id: body.language_id,
            genre_ids: body.genre_ids,
        }
    }
}

pub async fn create_book(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    let usecase = CreateBookUseCase {
        repo: state.book_repo(),
    };
    let book = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(book.into())))
}

pub async fn update_book(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<BookRequest>,
) -> Result<StatusCode, CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    let usecase = UpdateBookUseCase {
        repo: state.book_repo(),
    };
    usecase.execute(id, body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /catalog/book/{id} ────────────────────────────────────────────────

pub async fn delete_book(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, CatalogServiceError> {
    require_capability(&identity, Capability::CanMarkReturned)?;
    let usecase = DeleteBookUseCase {
        books: state.book_repo(),
        instances: state.book_instance_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
