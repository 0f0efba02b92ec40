use async_trait::async_trait;
use serde::Serialize;

use crate::errors::domain::DomainError;

/// User domain model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

/// Registration input. `password` holds plaintext until the auth service
/// replaces it with the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// The password may still be plaintext.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// A unique-email violation surfaces as `Conflict(UniqueEmail, _)`.
    async fn insert_user(&self, user: NewUser) -> Result<User, DomainError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
