#![allow(async_fn_in_trait)]

use chrono::NaiveDate;
use uuid::Uuid;

use locallib_domain::id::BookInstanceId;
use locallib_domain::pagination::{Page, PageRequest};

use crate::domain::types::{
    Author, AuthorInput, Book, BookDetail, BookInput, BookInstance, CatalogCounts,
    LoanedBookInstance,
};
use crate::error::CatalogServiceError;

/// Repository for authors.
pub trait AuthorRepository: Send + Sync {
    /// Ordered by last name, then first name.
    async fn list(&self, page: PageRequest) -> Result<Page<Author>, CatalogServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, CatalogServiceError>;

    async fn create(&self, input: &AuthorInput) -> Result<Author, CatalogServiceError>;

    /// Returns `false` if no such author exists.
    async fn update(&self, id: i32, input: &AuthorInput) -> Result<bool, CatalogServiceError>;

    /// Returns `false` if no such author exists. Their books keep existing
    /// with no author.
    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError>;
}

/// Repository for catalog books.
pub trait BookRepository: Send + Sync {
    /// Ordered by title, then author.
    async fn list(&self, page: PageRequest) -> Result<Page<Book>, CatalogServiceError>;

    async fn list_by_author(&self, author_id: i32) -> Result<Vec<Book>, CatalogServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, CatalogServiceError>;

    /// Book with author, language, genres and copies.
    async fn find_detail(&self, id: i32) -> Result<Option<BookDetail>, CatalogServiceError>;

    /// Fails with `UnknownReference` if the author, language or a genre does not exist.
    async fn create(&self, input: &BookInput) -> Result<Book, CatalogServiceError>;

    /// Returns `false` if no such book exists.
    async fn update(&self, id: i32, input: &BookInput) -> Result<bool, CatalogServiceError>;

    /// Returns `false` if no such book exists. Fails with `BookHasInstances`
    /// while copies of the book exist.
    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError>;
}

/// Repository for physical copies.
pub trait BookInstanceRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: BookInstanceId,
    ) -> Result<Option<BookInstance>, CatalogServiceError>;

    /// Copies currently on loan, earliest due first. `borrower` narrows to
    /// one member's loans.
    async fn list_on_loan(
        &self,
        borrower: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Page<LoanedBookInstance>, CatalogServiceError>;

    async fn count_by_book(&self, book_id: i32) -> Result<u64, CatalogServiceError>;

    async fn create(&self, instance: &BookInstance) -> Result<(), CatalogServiceError>;

    /// Single-statement write of the due date. Returns `false` if no such copy exists.
    async fn update_due_back(
        &self,
        id: BookInstanceId,
        due_back: NaiveDate,
    ) -> Result<bool, CatalogServiceError>;
}

/// Aggregate counts for the catalog home page.
pub trait CatalogCountsRepository: Send + Sync {
    async fn counts(&self) -> Result<CatalogCounts, CatalogServiceError>;
}
