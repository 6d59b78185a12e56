//! sea-orm entities for the polls service.

pub mod choices;
pub mod questions;
