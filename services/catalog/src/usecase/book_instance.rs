use uuid::Uuid;

use locallib_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{BookInstanceRepository, BookRepository};
use crate::domain::types::{BookInstance, IMPRINT_MAX_LEN, LoanedBookInstance};
use crate::error::CatalogServiceError;

// ── CreateBookInstance ───────────────────────────────────────────────────────

pub struct CreateBookInstanceInput {
    pub book_id: i32,
    pub imprint: String,
}

/// Register a newly acquired copy. It starts in maintenance with no loan.
pub struct CreateBookInstanceUseCase<B: BookRepository, I: BookInstanceRepository> {
    pub books: B,
    pub instances: I,
}

impl<B: BookRepository, I: BookInstanceRepository> CreateBookInstanceUseCase<B, I> {
    pub async fn execute(
        &self,
        input: CreateBookInstanceInput,
    ) -> Result<BookInstance, CatalogServiceError> {
        let imprint = input.imprint.trim();
        if imprint.is_empty() || imprint.chars().count() > IMPRINT_MAX_LEN {
            return Err(CatalogServiceError::InvalidField("imprint"));
        }
        if self.books.find_by_id(input.book_id).await?.is_none() {
            return Err(CatalogServiceError::BookNotFound);
        }
        let instance = BookInstance::new(input.book_id, imprint.to_owned());
        self.instances.create(&instance).await?;
        tracing::info!(book_instance_id = %instance.id, book_id = instance.book_id, "book instance created");
        Ok(instance)
    }
}

// ── GetLoanedBooksByUser ─────────────────────────────────────────────────────

pub struct GetLoanedBooksByUserUseCase<R: BookInstanceRepository> {
    pub repo: R,
}

impl<R: BookInstanceRepository> GetLoanedBooksByUserUseCase<R> {
    pub async fn execute(
        &self,
        borrower: Uuid,
        page: PageRequest,
    ) -> Result<Page<LoanedBookInstance>, CatalogServiceError> {
        self.repo.list_on_loan(Some(borrower), page).await
    }
}

// ── GetAllLoanedBooks ────────────────────────────────────────────────────────

pub struct GetAllLoanedBooksUseCase<R: BookInstanceRepository> {
    pub repo: R,
}

impl<R: BookInstanceRepository> GetAllLoanedBooksUseCase<R> {
    pub async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<Page<LoanedBookInstance>, CatalogServiceError> {
        self.repo.list_on_loan(None, page).await
    }
}
