use locallib_core::config::{env_or, required_env};

/// Polls service configuration loaded from environment variables.
#[derive(Debug)]
pub struct PollsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3121). Env var: `POLLS_PORT`.
    pub polls_port: u16,
}

impl PollsConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required_env("DATABASE_URL")?,
            polls_port: env_or("POLLS_PORT", 3121),
        })
    }
}
