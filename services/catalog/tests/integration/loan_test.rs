use uuid::Uuid;

use locallib_catalog::domain::types::BookInstance;
use locallib_catalog::error::CatalogServiceError;
use locallib_catalog::usecase::book_instance::{
    CreateBookInstanceInput, CreateBookInstanceUseCase, GetAllLoanedBooksUseCase,
    GetLoanedBooksByUserUseCase,
};
use locallib_domain::loan::LoanStatus;
use locallib_domain::pagination::PageRequest;

use crate::helpers::{MockBookRepo, MockInstanceRepo, copy_on_loan, date, test_book};

fn library(alice: Uuid, bob: Uuid) -> (MockBookRepo, MockInstanceRepo) {
    let books = MockBookRepo::new(vec![test_book(1, "Kindred"), test_book(2, "Dawn")]);
    let mut available = BookInstance::new(2, "Reprint".into());
    available.status = LoanStatus::Available;
    let instances = MockInstanceRepo::new(
        &books,
        vec![
            copy_on_loan(1, alice, date(2024, 1, 20)),
            copy_on_loan(2, bob, date(2024, 1, 5)),
            copy_on_loan(2, alice, date(2024, 1, 11)),
            available,
        ],
    );
    (books, instances)
}

#[tokio::test]
async fn should_list_only_callers_loans_earliest_due_first() {
    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
    let (_, instances) = library(alice, bob);
    let uc = GetLoanedBooksByUserUseCase { repo: instances };

    let page = uc.execute(alice, PageRequest::default()).await.unwrap();
    assert_eq!(page.total_items, 2);
    let titles: Vec<_> = page.items.iter().map(|l| l.book_title.as_str()).collect();
    assert_eq!(titles, vec!["Dawn", "Kindred"]);
    assert!(
        page.items
            .iter()
            .all(|l| l.instance.borrower_id == Some(alice))
    );
}

#[tokio::test]
async fn should_list_every_loan_for_librarians() {
    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
    let (_, instances) = library(alice, bob);
    let uc = GetAllLoanedBooksUseCase { repo: instances };

    let page = uc.execute(PageRequest::default()).await.unwrap();
    assert_eq!(page.total_items, 3);
    assert_eq!(page.items[0].instance.due_back, Some(date(2024, 1, 5)));
    assert!(page.items[0].instance.is_overdue(date(2024, 1, 10)));
    assert!(!page.items[1].instance.is_overdue(date(2024, 1, 10)));
}

#[tokio::test]
async fn should_register_new_copy_in_maintenance() {
    let books = MockBookRepo::new(vec![test_book(1, "Kindred")]);
    let instances = MockInstanceRepo::new(&books, vec![]);
    let uc = CreateBookInstanceUseCase {
        books,
        instances: instances.clone(),
    };

    let created = uc
        .execute(CreateBookInstanceInput {
            book_id: 1,
            imprint: "  Doubleday, 1979 ".into(),
        })
        .await
        .unwrap();

    let stored = instances.stored(created.id).unwrap();
    assert_eq!(stored.status, LoanStatus::Maintenance);
    assert_eq!(stored.imprint, "Doubleday, 1979");
    assert!(stored.due_back.is_none());
    assert!(stored.borrower_id.is_none());
}

#[tokio::test]
async fn should_not_register_copy_of_unknown_book() {
    let books = MockBookRepo::new(vec![]);
    let instances = MockInstanceRepo::new(&books, vec![]);
    let uc = CreateBookInstanceUseCase {
        books,
        instances: instances.clone(),
    };
    let result = uc
        .execute(CreateBookInstanceInput {
            book_id: 42,
            imprint: "Doubleday".into(),
        })
        .await;
    assert!(matches!(result, Err(CatalogServiceError::BookNotFound)));
    assert!(instances.instances.lock().unwrap().is_empty());
}
