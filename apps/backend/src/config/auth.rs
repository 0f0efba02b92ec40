use time::Duration;

use crate::config::must_var;
use crate::error::AppError;

const DEFAULT_ACCESS_TTL_SECS: i64 = 15 * 60;
const DEFAULT_REFRESH_TTL_SECS: i64 = 7 * 24 * 60 * 60;
/// Upper bound for either lifetime: one year.
pub const MAX_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// Signing secrets and lifetimes for the two token kinds.
#[derive(Clone)]
pub struct TokenConfig {
    pub access_secret: Vec<u8>,
    pub refresh_secret: Vec<u8>,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl TokenConfig {
    pub fn new(access_secret: impl Into<Vec<u8>>, refresh_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: Duration::seconds(DEFAULT_ACCESS_TTL_SECS),
            refresh_ttl: Duration::seconds(DEFAULT_REFRESH_TTL_SECS),
        }
    }

    pub fn with_lifetimes(mut self, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        self.access_ttl = access_ttl;
        self.refresh_ttl = refresh_ttl;
        self
    }

    pub fn from_env() -> Result<Self, AppError> {
        let access_ttl = ttl_var("JWT_ACCESS_TTL_SECS", DEFAULT_ACCESS_TTL_SECS)?;
        let refresh_ttl = ttl_var("JWT_REFRESH_TTL_SECS", DEFAULT_REFRESH_TTL_SECS)?;
        Ok(Self::new(
            must_var("JWT_SECRET_KEY_AT")?,
            must_var("JWT_SECRET_KEY_RT")?,
        )
        .with_lifetimes(access_ttl, refresh_ttl))
    }

    /// Random secrets, for tests.
    pub fn for_tests() -> Self {
        Self::new(
            format!("access-{}", uuid::Uuid::new_v4()),
            format!("refresh-{}", uuid::Uuid::new_v4()),
        )
    }
}

// Secrets stay out of Debug output.
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

fn ttl_var(name: &str, default_secs: i64) -> Result<Duration, AppError> {
    let secs = match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::config(format!("'{name}' must be whole seconds, got '{raw}'")))?,
        Err(_) => default_secs,
    };
    if secs <= 0 || secs > MAX_TTL_SECS {
        return Err(AppError::config(format!(
            "'{name}' must be between 1 and {MAX_TTL_SECS} seconds"
        )));
    }
    Ok(Duration::seconds(secs))
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

impl HasherConfig {
    /// Cheapest parameters argon2 accepts; tests only.
    pub fn for_tests() -> Self {
        Self {
            memory_kib: argon2::Params::MIN_M_COST,
            iterations: argon2::Params::MIN_T_COST,
            parallelism: argon2::Params::MIN_P_COST,
        }
    }
}
