//! Named permissions checked by the authorization guard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A capability granted to a caller by the gateway.
///
/// The wire name is the `app.codename` form used in the
/// `x-locallib-capabilities` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Librarian permission: see every loan, renew loans, edit the catalog.
    #[serde(rename = "catalog.can_mark_returned")]
    CanMarkReturned,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CanMarkReturned => "catalog.can_mark_returned",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability: {0}")]
pub struct UnknownCapability(pub String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "catalog.can_mark_returned" => Ok(Self::CanMarkReturned),
            other => Err(UnknownCapability(other.to_owned())),
        }
    }
}
