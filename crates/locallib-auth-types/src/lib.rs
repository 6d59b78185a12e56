//! Caller identity shared across locallib services.
//!
//! Provides the `IdentityHeaders` extractor and the capability guard that
//! handlers run before touching any data.

pub mod guard;
pub mod identity;

/// Header carrying the authenticated user's UUID.
pub const USER_ID_HEADER: &str = "x-locallib-user-id";

/// Header carrying the caller's comma-separated capability names.
pub const CAPABILITIES_HEADER: &str = "x-locallib-capabilities";
