use uuid::Uuid;

use locallib_catalog::error::CatalogServiceError;
use locallib_catalog::usecase::renewal::{GetRenewalFormUseCase, RenewBookInstanceUseCase};
use locallib_domain::id::BookInstanceId;
use locallib_domain::loan::LoanStatus;
use locallib_domain::renewal::RenewalDateError;

use crate::helpers::{MockBookRepo, MockInstanceRepo, copy_on_loan, date, test_book, today};

fn setup() -> (MockInstanceRepo, BookInstanceId) {
    let books = MockBookRepo::new(vec![test_book(1, "Kindred")]);
    let copy = copy_on_loan(1, Uuid::new_v4(), date(2024, 1, 12));
    let id = copy.id;
    (MockInstanceRepo::new(&books, vec![copy]), id)
}

#[tokio::test]
async fn should_accept_every_date_inside_the_window() {
    for (proposed, expected_ok) in [
        (date(2024, 1, 10), true),
        (date(2024, 1, 9), false),
        (date(2024, 2, 7), true),
        (date(2024, 2, 8), false),
    ] {
        let (repo, id) = setup();
        let uc = RenewBookInstanceUseCase { repo: repo.clone() };
        let result = uc.execute(id, Some(proposed), today()).await;
        assert_eq!(result.is_ok(), expected_ok, "renewal to {proposed}");

        let stored = repo.stored(id).unwrap();
        if expected_ok {
            assert_eq!(stored.due_back, Some(proposed));
            assert_eq!(repo.write_count(), 1);
        } else {
            assert_eq!(stored.due_back, Some(date(2024, 1, 12)));
            assert_eq!(repo.write_count(), 0);
        }
    }
}

#[tokio::test]
async fn should_keep_status_when_renewing() {
    let (repo, id) = setup();
    let uc = RenewBookInstanceUseCase { repo: repo.clone() };
    uc.execute(id, Some(date(2024, 1, 31)), today())
        .await
        .unwrap();
    let stored = repo.stored(id).unwrap();
    assert_eq!(stored.status, LoanStatus::OnLoan);
    assert_eq!(stored.due_back, Some(date(2024, 1, 31)));
}

#[tokio::test]
async fn should_distinguish_past_and_too_far_errors() {
    let (repo, id) = setup();
    let uc = RenewBookInstanceUseCase { repo };

    let past = uc.execute(id, Some(date(2023, 12, 31)), today()).await;
    assert!(matches!(
        past,
        Err(CatalogServiceError::InvalidRenewalDate(RenewalDateError::InPast))
    ));

    let far = uc.execute(id, Some(date(2024, 3, 1)), today()).await;
    assert!(matches!(
        far,
        Err(CatalogServiceError::InvalidRenewalDate(
            RenewalDateError::TooFarAhead
        ))
    ));
}

#[tokio::test]
async fn should_not_touch_store_for_unknown_copy() {
    let (repo, id) = setup();
    let uc = RenewBookInstanceUseCase { repo: repo.clone() };
    let result = uc
        .execute(BookInstanceId::generate(), Some(date(2024, 1, 20)), today())
        .await;
    assert!(matches!(result, Err(CatalogServiceError::BookInstanceNotFound)));
    assert_eq!(repo.write_count(), 0);
    assert_eq!(repo.stored(id).unwrap().due_back, Some(date(2024, 1, 12)));
}

#[tokio::test]
async fn should_offer_a_default_date_the_validator_accepts() {
    let (repo, id) = setup();
    let form = GetRenewalFormUseCase { repo: repo.clone() }
        .execute(id, today())
        .await
        .unwrap();
    assert_eq!(form.proposed_renewal_date, date(2024, 1, 31));

    RenewBookInstanceUseCase { repo: repo.clone() }
        .execute(id, Some(form.proposed_renewal_date), today())
        .await
        .unwrap();
    assert_eq!(repo.stored(id).unwrap().due_back, Some(date(2024, 1, 31)));
}
