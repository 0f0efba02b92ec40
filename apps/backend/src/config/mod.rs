//! Process configuration, read once at startup and passed down explicitly.

pub mod auth;
pub mod db;

use std::env;
use std::path::{Path, PathBuf};

pub use auth::{HasherConfig, TokenConfig};
pub use db::DbConfig;

use crate::error::AppError;

/// Name of the variable selecting which env file to load.
pub const ENV_SELECTOR: &str = "ENV";
pub const DEFAULT_ENV: &str = "local";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DbConfig,
    pub tokens: TokenConfig,
    pub hasher: HasherConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database: DbConfig::from_env()?,
            tokens: TokenConfig::from_env()?,
            hasher: HasherConfig::default(),
        })
    }

    /// Loads `path` into the process environment, then reads it like
    /// [`AppConfig::from_env`]. Variables already set take precedence.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|e| {
            AppError::config(format!("error loading {} file: {e}", path.display()))
        })?;
        Self::from_env()
    }
}

/// `etc/config/<env>.env`
pub fn env_file_path(env_name: &str) -> PathBuf {
    PathBuf::from(format!("etc/config/{env_name}.env"))
}

/// Env name from `ENV`, defaulting to `local`.
pub fn current_env() -> String {
    var_or(ENV_SELECTOR, DEFAULT_ENV)
}

pub(crate) fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::config(format!(
            "Required environment variable '{name}' is not set"
        ))),
    }
}
