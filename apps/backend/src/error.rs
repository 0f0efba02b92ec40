use thiserror::Error;

use crate::auth::AuthError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;

/// Error type handed to the delivery layer.
///
/// Both "no such email" and "wrong password" collapse into
/// [`AppError::InvalidCredentials`]; callers that need the distinction use
/// [`AuthError`] directly.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("UnauthorizedInvalidJwt")]
    UnauthorizedInvalidJwt,
    #[error("UnauthorizedExpiredJwt")]
    UnauthorizedExpiredJwt,
    #[error("Forbidden: {detail}")]
    Forbidden { detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AppError::UnauthorizedInvalidJwt => ErrorCode::UnauthorizedInvalidJwt,
            AppError::UnauthorizedExpiredJwt => ErrorCode::UnauthorizedExpiredJwt,
            AppError::Forbidden { .. } => ErrorCode::Forbidden,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Db { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail } => detail.clone(),
            AppError::InvalidCredentials => "Email or password is incorrect".to_string(),
            AppError::UnauthorizedInvalidJwt => "Invalid JWT".to_string(),
            AppError::UnauthorizedExpiredJwt => "Token expired".to_string(),
            AppError::Forbidden { detail } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Db { detail, .. } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// HTTP status a delivery layer should answer with.
    pub fn status(&self) -> u16 {
        match self {
            AppError::Validation { .. } => 400,
            AppError::InvalidCredentials => 401,
            AppError::UnauthorizedInvalidJwt => 401,
            AppError::UnauthorizedExpiredJwt => 401,
            AppError::Forbidden { .. } => 403,
            AppError::NotFound { .. } => 404,
            AppError::Conflict { .. } => 409,
            AppError::Db { code, .. } => match code {
                ErrorCode::DbUnavailable => 503,
                ErrorCode::DbTimeout => 504,
                _ => 500,
            },
            AppError::Internal { .. } => 500,
            AppError::Config { .. } => 500,
        }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::Validation { detail },
            DomainError::Forbidden(detail) => AppError::Forbidden { detail },
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::UniqueEmail => ErrorCode::UniqueEmail,
                    ConflictKind::Other(_) => ErrorCode::Conflict,
                };
                AppError::Conflict { code, detail }
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::User => ErrorCode::UserNotFound,
                    NotFoundKind::Photo => ErrorCode::PhotoNotFound,
                    NotFoundKind::Comment => ErrorCode::CommentNotFound,
                    NotFoundKind::SocialMedia => ErrorCode::SocialMediaNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::NotFound { code, detail }
            }
            DomainError::Infra(kind, detail) => {
                let code = match kind {
                    InfraErrorKind::Timeout => ErrorCode::DbTimeout,
                    InfraErrorKind::DbUnavailable => ErrorCode::DbUnavailable,
                    InfraErrorKind::Other(_) => ErrorCode::DbError,
                };
                AppError::Db { code, detail }
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(detail) => AppError::Validation { detail },
            AuthError::DuplicateEmail => AppError::Conflict {
                code: ErrorCode::UniqueEmail,
                detail: "Email already registered".to_string(),
            },
            AuthError::Storage(inner) => AppError::from(inner),
            AuthError::UserNotFound | AuthError::WrongPassword => AppError::InvalidCredentials,
            AuthError::ExpiredToken => AppError::UnauthorizedExpiredJwt,
            AuthError::InvalidSignature | AuthError::InvalidToken => {
                AppError::UnauthorizedInvalidJwt
            }
            AuthError::Hashing(detail) | AuthError::Signing(detail) => {
                AppError::Internal { detail }
            }
        }
    }
}
