//! Mock identity helpers for router tests.
//!
//! Services behind the gateway receive `x-locallib-user-id` and
//! `x-locallib-capabilities` headers. `MockAuth` produces them directly so no
//! gateway is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use locallib_auth_types::{CAPABILITIES_HEADER, USER_ID_HEADER};
use locallib_domain::capability::Capability;

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub capabilities: Vec<Capability>,
}

impl MockAuth {
    pub fn new(user_id: Uuid, capabilities: Vec<Capability>) -> Self {
        Self {
            user_id,
            capabilities,
        }
    }

    /// A logged-in member with no special permissions.
    pub fn member() -> Self {
        Self::new(Uuid::new_v4(), vec![])
    }

    /// A logged-in librarian.
    pub fn librarian() -> Self {
        Self::new(Uuid::new_v4(), vec![Capability::CanMarkReturned])
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        if !self.capabilities.is_empty() {
            let joined = self
                .capabilities
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(",");
            map.insert(
                HeaderName::from_static(CAPABILITIES_HEADER),
                HeaderValue::from_str(&joined).unwrap(),
            );
        }
        map
    }
}
