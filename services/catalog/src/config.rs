use locallib_core::config::{env_or, required_env};

/// Catalog service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CatalogConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `CATALOG_PORT`.
    pub catalog_port: u16,
}

impl CatalogConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required_env("DATABASE_URL")?,
            catalog_port: env_or("CATALOG_PORT", 3120),
        })
    }
}
