use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use locallib_core::health::{healthz, readyz};
use locallib_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    author::{create_author, delete_author, get_author, get_authors, update_author},
    book::{create_book, delete_book, get_book, get_books, update_book},
    book_instance::{create_book_instance, get_all_loans, get_my_loans},
    renewal::{get_renewal_form, renew_book_instance},
    summary::get_summary,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Home
        .route("/catalog", get(get_summary))
        // Books
        .route("/catalog/books", get(get_books).post(create_book))
        .route(
            "/catalog/book/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        // Authors
        .route("/catalog/authors", get(get_authors).post(create_author))
        .route(
            "/catalog/author/{id}",
            get(get_author).put(update_author).delete(delete_author),
        )
        // Copies and loans
        .route("/catalog/bookinstances", post(create_book_instance))
        .route("/catalog/mybooks", get(get_my_loans))
        .route("/catalog/borrowed", get(get_all_loans))
        .route(
            "/catalog/book/{id}/renew",
            get(get_renewal_form).post(renew_book_instance),
        )
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use chrono::NaiveDate;
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;
    use uuid::Uuid;

    use locallib_auth_types::USER_ID_HEADER;
    use locallib_core::middleware::REQUEST_ID_HEADER;
    use locallib_domain::clock::FixedClock;
    use locallib_testing::auth::MockAuth;

    // Any handler that reaches the database fails, so a 401/403 here proves the
    // request was turned away before persistence.
    fn router() -> Router {
        build_router(AppState {
            db: DatabaseConnection::Disconnected,
            clock: Arc::new(FixedClock::on(
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            )),
        })
    }

    fn renew_request(auth: Option<&MockAuth>, body: &str) -> Request<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(format!("/catalog/book/{}/renew", Uuid::new_v4()))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();
        if let Some(auth) = auth {
            request.headers_mut().extend(auth.headers());
        }
        request
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_reject_renewal_without_identity() {
        let response = router()
            .oneshot(renew_request(None, r#"{"renewal_date":"2024-01-20"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_forbid_renewal_before_validating_date() {
        let member = MockAuth::member();
        let response = router()
            .oneshot(renew_request(
                Some(&member),
                r#"{"renewal_date":"2000-01-01"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(json_body(response).await["kind"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn should_forbid_renewal_before_reading_malformed_date() {
        let member = MockAuth::member();
        let response = router()
            .oneshot(renew_request(
                Some(&member),
                r#"{"renewal_date":"2024-13-45"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(json_body(response).await["kind"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn should_report_malformed_renewal_date_as_field_error() {
        let librarian = MockAuth::librarian();
        let response = router()
            .oneshot(renew_request(
                Some(&librarian),
                r#"{"renewal_date":"2024-13-45"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["kind"], "INVALID_FIELD");
        assert_eq!(json["field"], "renewal_date");
    }

    #[tokio::test]
    async fn should_surface_database_failure_as_internal() {
        let librarian = MockAuth::librarian();
        let response = router()
            .oneshot(renew_request(
                Some(&librarian),
                r#"{"renewal_date":"2024-01-20"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["kind"], "INTERNAL");
        assert_eq!(json["message"], "internal error");
    }

    #[tokio::test]
    async fn should_forbid_borrowed_listing_for_members() {
        let member = MockAuth::member();
        let mut request = Request::builder()
            .uri("/catalog/borrowed")
            .body(Body::empty())
            .unwrap();
        request.headers_mut().extend(member.headers());
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn should_require_login_for_my_books() {
        let request = Request::builder()
            .uri("/catalog/mybooks")
            .header(USER_ID_HEADER, "not-a-uuid")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_forbid_catalog_edits_for_members() {
        let member = MockAuth::member();
        let mut request = Request::builder()
            .method("DELETE")
            .uri("/catalog/book/1")
            .body(Body::empty())
            .unwrap();
        request.headers_mut().extend(member.headers());
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn should_report_not_ready_without_database() {
        let request = Request::builder()
            .uri("/readyz")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn should_tag_responses_with_request_id() {
        let request = Request::builder()
            .uri("/healthz")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(id.to_str().unwrap().parse::<Uuid>().is_ok());
    }
}
