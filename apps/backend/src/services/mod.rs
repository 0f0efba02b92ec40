//! Use cases. Services never log; they return typed errors for the
//! delivery layer to map.

pub mod auth;
pub mod comments;
pub mod photos;
pub mod social_media;

pub use auth::{AuthService, Profile};
pub use comments::CommentService;
pub use photos::PhotoService;
pub use social_media::SocialMediaService;

use crate::errors::domain::DomainError;

/// Required text field: must contain something besides whitespace.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Optional text field of a partial update: absent is fine, blank is not.
pub(crate) fn reject_blank(field: &str, value: Option<&str>) -> Result<(), DomainError> {
    match value {
        Some(v) => require_non_blank(field, v),
        None => Ok(()),
    }
}

pub(crate) fn ensure_owner(owner_id: i64, caller_id: i64, what: &str) -> Result<(), DomainError> {
    if owner_id != caller_id {
        return Err(DomainError::forbidden(format!(
            "{what} belongs to another user"
        )));
    }
    Ok(())
}
