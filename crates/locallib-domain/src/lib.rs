//! Domain types shared by the locallib services: identifiers, loan status,
//! the renewal window, capabilities, pagination and the injected clock.
//!
//! Pure types only. Nothing here touches HTTP or the database.

pub mod capability;
pub mod clock;
pub mod id;
pub mod loan;
pub mod pagination;
pub mod renewal;
