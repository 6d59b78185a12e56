use locallib_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{AuthorRepository, BookRepository};
use crate::domain::types::{Author, AuthorInput, Book};
use crate::error::CatalogServiceError;

// ── GetAuthors ───────────────────────────────────────────────────────────────

pub struct GetAuthorsUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> GetAuthorsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Page<Author>, CatalogServiceError> {
        self.repo.list(page).await
    }
}

// ── GetAuthor ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AuthorDetail {
    pub author: Author,
    pub books: Vec<Book>,
}

pub struct GetAuthorUseCase<A: AuthorRepository, B: BookRepository> {
    pub authors: A,
    pub books: B,
}

impl<A: AuthorRepository, B: BookRepository> GetAuthorUseCase<A, B> {
    pub async fn execute(&self, id: i32) -> Result<AuthorDetail, CatalogServiceError> {
        let author = self
            .authors
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::AuthorNotFound)?;
        let books = self.books.list_by_author(id).await?;
        Ok(AuthorDetail { author, books })
    }
}

// ── CreateAuthor ─────────────────────────────────────────────────────────────

pub struct CreateAuthorUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> CreateAuthorUseCase<R> {
    pub async fn execute(&self, input: AuthorInput) -> Result<Author, CatalogServiceError> {
        input.validate().map_err(CatalogServiceError::InvalidField)?;
        let author = self.repo.create(&input).await?;
        tracing::info!(author_id = author.id, "author created");
        Ok(author)
    }
}

// ── UpdateAuthor ─────────────────────────────────────────────────────────────

pub struct UpdateAuthorUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> UpdateAuthorUseCase<R> {
    pub async fn execute(&self, id: i32, input: AuthorInput) -> Result<(), CatalogServiceError> {
        input.validate().map_err(CatalogServiceError::InvalidField)?;
        if !self.repo.update(id, &input).await? {
            return Err(CatalogServiceError::AuthorNotFound);
        }
        Ok(())
    }
}

// ── DeleteAuthor ─────────────────────────────────────────────────────────────

pub struct DeleteAuthorUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> DeleteAuthorUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), CatalogServiceError> {
        if !self.repo.delete(id).await? {
            return Err(CatalogServiceError::AuthorNotFound);
        }
        tracing::info!(author_id = id, "author deleted");
        Ok(())
    }
}
