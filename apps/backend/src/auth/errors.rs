use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError};

/// Failures of registration, login and token handling.
///
/// Every variant is terminal for the request that produced it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("email already registered")]
    DuplicateEmail,
    #[error("storage error: {0}")]
    Storage(DomainError),
    #[error("user not found")]
    UserNotFound,
    #[error("wrong password")]
    WrongPassword,
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("token signing failed: {0}")]
    Signing(String),
    #[error("token expired")]
    ExpiredToken,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("invalid token")]
    InvalidToken,
}

impl From<DomainError> for AuthError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Conflict(ConflictKind::UniqueEmail, _) => AuthError::DuplicateEmail,
            other => AuthError::Storage(other),
        }
    }
}
