//! Capability pre-condition checks.
//!
//! Handlers call [`require_capability`] first thing after extracting the
//! identity, so a denied caller never reaches lookups or validation.

use locallib_domain::capability::Capability;

use crate::identity::IdentityHeaders;

/// The caller is authenticated but lacks a required capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing capability {0}")]
pub struct CapabilityMissing(pub Capability);

pub fn require_capability(
    identity: &IdentityHeaders,
    capability: Capability,
) -> Result<(), CapabilityMissing> {
    if identity.has_capability(capability) {
        Ok(())
    } else {
        tracing::debug!(
            user_id = %identity.user_id,
            capability = %capability,
            "capability check denied"
        );
        Err(CapabilityMissing(capability))
    }
}
