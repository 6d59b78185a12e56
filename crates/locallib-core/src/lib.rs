//! Service plumbing shared by every locallib binary: start-up config,
//! tracing, health probes, request ids and paginated queries.

pub mod config;
pub mod health;
pub mod middleware;
pub mod pagination;
pub mod serde;
pub mod tracing;
