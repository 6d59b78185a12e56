use uuid::Uuid;

use locallib_catalog::domain::types::BookInput;
use locallib_catalog::error::CatalogServiceError;
use locallib_catalog::usecase::book::{DeleteBookUseCase, GetBooksUseCase, UpdateBookUseCase};
use locallib_domain::pagination::PageRequest;

use crate::helpers::{MockBookRepo, MockInstanceRepo, copy_on_loan, date, test_book};

#[tokio::test]
async fn should_keep_book_and_copies_when_delete_is_refused() {
    let books = MockBookRepo::new(vec![test_book(1, "Kindred")]);
    let instances =
        MockInstanceRepo::new(&books, vec![copy_on_loan(1, Uuid::new_v4(), date(2024, 1, 20))]);
    let uc = DeleteBookUseCase {
        books: books.clone(),
        instances: instances.clone(),
    };

    let result = uc.execute(1).await;
    assert!(matches!(result, Err(CatalogServiceError::BookHasInstances)));
    assert_eq!(books.books.lock().unwrap().len(), 1);
    assert_eq!(instances.instances.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_page_books_by_title() {
    let books = MockBookRepo::new(
        (1..=12)
            .map(|i| test_book(i, &format!("Title {i:02}")))
            .collect(),
    );
    let uc = GetBooksUseCase { repo: books };

    let page = uc
        .execute(PageRequest {
            per_page: 10,
            page: 2,
        })
        .await
        .unwrap();
    assert_eq!(page.total_items, 12);
    assert_eq!(page.total_pages, 2);
    let titles: Vec<_> = page.items.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Title 11", "Title 12"]);
}

#[tokio::test]
async fn should_reject_overlong_isbn_on_update() {
    let books = MockBookRepo::new(vec![test_book(1, "Kindred")]);
    let uc = UpdateBookUseCase {
        repo: books.clone(),
    };
    let result = uc
        .execute(
            1,
            BookInput {
                title: "Kindred".into(),
                author_id: None,
                summary: String::new(),
                isbn: "12345678901234".into(),
                language_id: None,
                genre_ids: vec![],
            },
        )
        .await;
    assert!(matches!(result, Err(CatalogServiceError::InvalidField("isbn"))));
    assert_eq!(books.books.lock().unwrap()[0].isbn, test_book(1, "").isbn);
}
