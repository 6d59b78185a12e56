//! Environment lookups used by per-service config structs.

use std::str::FromStr;

use anyhow::Context as _;

/// Read a variable that must be present.
pub fn required_env(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("missing environment variable {key}"))
}

/// Read and parse a variable, falling back to `default` when it is absent or
/// does not parse.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
