use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use locallib_auth_types::guard::CapabilityMissing;
use locallib_domain::renewal::RenewalDateError;

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("book not found")]
    BookNotFound,
    #[error("author not found")]
    AuthorNotFound,
    #[error("book instance not found")]
    BookInstanceNotFound,
    #[error("{0}")]
    InvalidRenewalDate(#[from] RenewalDateError),
    #[error("This field is required.")]
    RenewalDateRequired,
    #[error("invalid {0}")]
    InvalidField(&'static str),
    #[error("unknown author, language or genre")]
    UnknownReference,
    #[error("book has instances")]
    BookHasInstances,
    #[error("forbidden")]
    Forbidden,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<CapabilityMissing> for CatalogServiceError {
    fn from(_: CapabilityMissing) -> Self {
        Self::Forbidden
    }
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BookNotFound => "BOOK_NOT_FOUND",
            Self::AuthorNotFound => "AUTHOR_NOT_FOUND",
            Self::BookInstanceNotFound => "BOOK_INSTANCE_NOT_FOUND",
            Self::InvalidRenewalDate(RenewalDateError::InPast) => "RENEWAL_DATE_IN_PAST",
            Self::InvalidRenewalDate(RenewalDateError::TooFarAhead) => {
                "RENEWAL_DATE_TOO_FAR_AHEAD"
            }
            Self::RenewalDateRequired => "RENEWAL_DATE_REQUIRED",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::UnknownReference => "UNKNOWN_REFERENCE",
            Self::BookHasInstances => "BOOK_HAS_INSTANCES",
            Self::Forbidden => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Form field the error belongs to, for inline display.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRenewalDate(_) | Self::RenewalDateRequired => Some("renewal_date"),
            Self::InvalidField(field) => Some(*field),
            _ => None,
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BookNotFound | Self::AuthorNotFound | Self::BookInstanceNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidRenewalDate(_)
            | Self::RenewalDateRequired
            | Self::InvalidField(_)
            | Self::UnknownReference => StatusCode::BAD_REQUEST,
            Self::BookHasInstances => StatusCode::CONFLICT,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Some(field) = self.field() {
            body["field"] = serde_json::Value::from(field);
        }
        (status, axum::Json(body)).into_response()
    }
}
