use crate::config::{must_var, var_or};
use crate::error::AppError;

/// Relational store connection settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub max_idle_connections: u32,
    pub max_open_connections: u32,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            host: var_or("DB_HOST", "localhost"),
            port: parse_var("DB_PORT", 5432)?,
            username: must_var("DB_USERNAME")?,
            password: must_var("DB_PASSWORD")?,
            database: must_var("DB_DATABASE")?,
            max_idle_connections: parse_var("DB_MAX_IDLE_CONNECTIONS", 2)?,
            max_open_connections: parse_var("DB_MAX_OPEN_CONNECTIONS", 10)?,
        })
    }

    pub fn url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("'{name}' must be a number, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}
