//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use locallib_domain::capability::Capability;

use crate::{CAPABILITIES_HEADER, USER_ID_HEADER};

/// Authenticated caller, as injected by the gateway.
///
/// Extraction fails with 401 if `x-locallib-user-id` is absent or not a UUID,
/// which makes every handler taking this extractor login-required.
/// Capabilities are optional; unknown names are ignored.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub capabilities: Vec<Capability>,
}

impl IdentityHeaders {
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

fn parse_capabilities(raw: &str) -> Vec<Capability> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 declares `fn -> impl Future + Send`; read the headers up front
    // and return a 'static future so no borrow of `parts` is captured.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok());

        let capabilities = parts
            .headers
            .get(CAPABILITIES_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(parse_capabilities)
            .unwrap_or_default();

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id,
                capabilities,
            })
        }
    }
}
