//! Process configuration, read from flags with environment fallbacks.

use std::net::SocketAddr;

use clap::Parser;

/// Address the server listens on unless told otherwise.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Todo CRUD service over PostgreSQL
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(version)]
pub struct Config {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Address to listen on
    #[arg(short, long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Upper bound on pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Create the todos table on startup if it is missing
    #[arg(long, env = "INIT_SCHEMA")]
    pub init_schema: bool,

    /// Enable verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// The connection string, treating an empty value as unset.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        match self.database_url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ConfigError::MissingEnv("DATABASE_URL")),
        }
    }

    /// Default `tracing` filter for the configured verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
