use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use uuid::Uuid;

use locallib_catalog::domain::repository::{BookInstanceRepository, BookRepository};
use locallib_catalog::domain::types::{
    Book, BookDetail, BookInput, BookInstance, LoanedBookInstance,
};
use locallib_catalog::error::CatalogServiceError;
use locallib_domain::id::BookInstanceId;
use locallib_domain::loan::LoanStatus;
use locallib_domain::pagination::{Page, PageRequest};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2024-01-10, the reference "today" for these suites.
pub fn today() -> NaiveDate {
    date(2024, 1, 10)
}

pub fn test_book(id: i32, title: &str) -> Book {
    Book {
        id,
        title: title.into(),
        author_id: None,
        summary: String::new(),
        isbn: format!("97800000000{id:02}"),
        language_id: None,
    }
}

pub fn copy_on_loan(book_id: i32, borrower: Uuid, due_back: NaiveDate) -> BookInstance {
    BookInstance {
        status: LoanStatus::OnLoan,
        borrower_id: Some(borrower),
        due_back: Some(due_back),
        ..BookInstance::new(book_id, "First edition".into())
    }
}

// ── MockBookRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockBookRepo {
    pub books: Arc<Mutex<Vec<Book>>>,
}

impl MockBookRepo {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(Mutex::new(books)),
        }
    }
}

impl BookRepository for MockBookRepo {
    async fn list(&self, page: PageRequest) -> Result<Page<Book>, CatalogServiceError> {
        let mut books = self.books.lock().unwrap().clone();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(Page::from_vec(books, page))
    }

    async fn list_by_author(&self, author_id: i32) -> Result<Vec<Book>, CatalogServiceError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.author_id == Some(author_id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, CatalogServiceError> {
        Ok(self.books.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn find_detail(&self, id: i32) -> Result<Option<BookDetail>, CatalogServiceError> {
        Ok(self.find_by_id(id).await?.map(|book| BookDetail {
            book,
            author: None,
            language: None,
            genres: vec![],
            instances: vec![],
        }))
    }

    async fn create(&self, input: &BookInput) -> Result<Book, CatalogServiceError> {
        let mut books = self.books.lock().unwrap();
        let book = Book {
            id: books.iter().map(|b| b.id).max().unwrap_or(0) + 1,
            title: input.title.clone(),
            author_id: input.author_id,
            summary: input.summary.clone(),
            isbn: input.isbn.clone(),
            language_id: input.language_id,
        };
        books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, input: &BookInput) -> Result<bool, CatalogServiceError> {
        let mut books = self.books.lock().unwrap();
        let Some(book) = books.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        book.title = input.title.clone();
        book.summary = input.summary.clone();
        book.isbn = input.isbn.clone();
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|b| b.id != id);
        Ok(books.len() < before)
    }
}

// ── MockInstanceRepo ─────────────────────────────────────────────────────────

/// In-memory copies. Titles for loan listings come from `books`.
#[derive(Clone)]
pub struct MockInstanceRepo {
    pub instances: Arc<Mutex<Vec<BookInstance>>>,
    pub books: MockBookRepo,
    pub due_back_writes: Arc<Mutex<u32>>,
}

impl MockInstanceRepo {
    pub fn new(books: &MockBookRepo, instances: Vec<BookInstance>) -> Self {
        Self {
            instances: Arc::new(Mutex::new(instances)),
            books: books.clone(),
            due_back_writes: Arc::new(Mutex::new(0)),
        }
    }

    pub fn stored(&self, id: BookInstanceId) -> Option<BookInstance> {
        self.instances
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }

    pub fn write_count(&self) -> u32 {
        *self.due_back_writes.lock().unwrap()
    }
}

impl BookInstanceRepository for MockInstanceRepo {
    async fn find_by_id(
        &self,
        id: BookInstanceId,
    ) -> Result<Option<BookInstance>, CatalogServiceError> {
        Ok(self.stored(id))
    }

    async fn list_on_loan(
        &self,
        borrower: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Page<LoanedBookInstance>, CatalogServiceError> {
        let mut on_loan: Vec<BookInstance> = self
            .instances
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.status == LoanStatus::OnLoan)
            .filter(|i| borrower.is_none() || i.borrower_id == borrower)
            .cloned()
            .collect();
        on_loan.sort_by_key(|i| i.due_back);

        let books = self.books.books.lock().unwrap().clone();
        let loaned = on_loan
            .into_iter()
            .map(|instance| LoanedBookInstance {
                book_title: books
                    .iter()
                    .find(|b| b.id == instance.book_id)
                    .map(|b| b.title.clone())
                    .unwrap_or_default(),
                instance,
            })
            .collect();
        Ok(Page::from_vec(loaned, page))
    }

    async fn count_by_book(&self, book_id: i32) -> Result<u64, CatalogServiceError> {
        Ok(self
            .instances
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.book_id == book_id)
            .count() as u64)
    }

    async fn create(&self, instance: &BookInstance) -> Result<(), CatalogServiceError> {
        self.instances.lock().unwrap().push(instance.clone());
        Ok(())
    }

    async fn update_due_back(
        &self,
        id: BookInstanceId,
        due_back: NaiveDate,
    ) -> Result<bool, CatalogServiceError> {
        let mut instances = self.instances.lock().unwrap();
        let Some(instance) = instances.iter_mut().find(|i| i.id == id) else {
            return Ok(false);
        };
        instance.due_back = Some(due_back);
        *self.due_back_writes.lock().unwrap() += 1;
        Ok(true)
    }
}
