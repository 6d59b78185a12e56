use locallib_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{BookInstanceRepository, BookRepository};
use crate::domain::types::{Book, BookDetail, BookInput};
use crate::error::CatalogServiceError;

// ── GetBooks ─────────────────────────────────────────────────────────────────

pub struct GetBooksUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> GetBooksUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Page<Book>, CatalogServiceError> {
        self.repo.list(page).await
    }
}

// ── GetBook ──────────────────────────────────────────────────────────────────

pub struct GetBookUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> GetBookUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<BookDetail, CatalogServiceError> {
        self.repo
            .find_detail(id)
            .await?
            .ok_or(CatalogServiceError::BookNotFound)
    }
}

// ── CreateBook ───────────────────────────────────────────────────────────────

pub struct CreateBookUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> CreateBookUseCase<R> {
    pub async fn execute(&self, mut input: BookInput) -> Result<Book, CatalogServiceError> {
        input.validate().map_err(CatalogServiceError::InvalidField)?;
        input.genre_ids = input.normalized_genre_ids();
        let book = self.repo.create(&input).await?;
        tracing::info!(book_id = book.id, "book created");
        Ok(book)
    }
}

// ── UpdateBook ───────────────────────────────────────────────────────────────

pub struct UpdateBookUseCase<R: BookRepository> {
    pub repo: R,
}

impl<R: BookRepository> UpdateBookUseCase<R> {
    pub async fn execute(&self, id: i32, mut input: BookInput) -> Result<(), CatalogServiceError> {
        input.validate().map_err(CatalogServiceError::InvalidField)?;
        input.genre_ids = input.normalized_genre_ids();
        if !self.repo.update(id, &input).await? {
            return Err(CatalogServiceError::BookNotFound);
        }
        Ok(())
    }
}

// ── DeleteBook ───────────────────────────────────────────────────────────────

/// Deleting a book never removes its copies: while any exist the delete is
/// refused with `BookHasInstances`.
pub struct DeleteBookUseCase<B: BookRepository, I: BookInstanceRepository> {
    pub books: B,
    pub instances: I,
}

impl<B: BookRepository, I: BookInstanceRepository> DeleteBookUseCase<B, I> {
    pub async fn execute(&self, id: i32) -> Result<(), CatalogServiceError> {
        if self.instances.count_by_book(id).await? > 0 {
            return Err(CatalogServiceError::BookHasInstances);
        }
        if !self.books.delete(id).await? {
            return Err(CatalogServiceError::BookNotFound);
        }
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }
}
