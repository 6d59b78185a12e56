use chrono::NaiveDate;
use uuid::Uuid;

use locallib_domain::id::BookInstanceId;
use locallib_domain::loan::{LoanStatus, is_overdue};

pub const NAME_MAX_LEN: usize = 100;
pub const TITLE_MAX_LEN: usize = 200;
pub const SUMMARY_MAX_LEN: usize = 1000;
pub const ISBN_MAX_LEN: usize = 13;
pub const IMPRINT_MAX_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// `"Last, First"`, as shown in listings.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// Fields accepted when creating or editing an author.
#[derive(Debug, Clone)]
pub struct AuthorInput {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorInput {
    /// Returns the name of the first offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !within(&self.first_name, NAME_MAX_LEN) {
            return Err("first_name");
        }
        if !within(&self.last_name, NAME_MAX_LEN) {
            return Err("last_name");
        }
        if let (Some(born), Some(died)) = (self.date_of_birth, self.date_of_death) {
            if died < born {
                return Err("date_of_death");
            }
        }
        Ok(())
    }
}

/// Catalog entry for a title. Physical copies are `BookInstance`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub summary: String,
    pub isbn: String,
    pub language_id: Option<i32>,
}

/// A book with everything its detail page shows.
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: Book,
    pub author: Option<Author>,
    pub language: Option<Language>,
    pub genres: Vec<Genre>,
    pub instances: Vec<BookInstance>,
}

impl BookDetail {
    /// First three genre names, comma separated.
    pub fn display_genre(&self) -> String {
        self.genres
            .iter()
            .take(3)
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Fields accepted when creating or editing a book.
#[derive(Debug, Clone)]
pub struct BookInput {
    pub title: String,
    pub author_id: Option<i32>,
    pub summary: String,
    pub isbn: String,
    pub language_id: Option<i32>,
    pub genre_ids: Vec<i32>,
}

impl BookInput {
    /// Returns the name of the first offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !within(&self.title, TITLE_MAX_LEN) {
            return Err("title");
        }
        if self.summary.chars().count() > SUMMARY_MAX_LEN {
            return Err("summary");
        }
        if !within(&self.isbn, ISBN_MAX_LEN) {
            return Err("isbn");
        }
        Ok(())
    }

    /// Sorted, duplicate-free genre ids.
    pub fn normalized_genre_ids(&self) -> Vec<i32> {
        let mut ids = self.genre_ids.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// One physical, loanable copy of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInstance {
    pub id: BookInstanceId,
    pub book_id: i32,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub borrower_id: Option<Uuid>,
    pub status: LoanStatus,
}

impl BookInstance {
    /// A freshly acquired copy: in maintenance, not lent to anyone.
    pub fn new(book_id: i32, imprint: String) -> Self {
        Self {
            id: BookInstanceId::generate(),
            book_id,
            imprint,
            due_back: None,
            borrower_id: None,
            status: LoanStatus::default(),
        }
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        is_overdue(self.due_back, today)
    }
}

/// A copy on loan, with the title needed to list it.
#[derive(Debug, Clone)]
pub struct LoanedBookInstance {
    pub instance: BookInstance,
    pub book_title: String,
}

/// Record counts shown on the catalog home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogCounts {
    pub books: u64,
    pub instances: u64,
    pub available_instances: u64,
    pub authors: u64,
}

fn within(value: &str, max_len: usize) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= max_len
}
