//! Registration, login and session token use cases.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::auth::{AuthError, CredentialHasher, TokenIssuer, TokenKind, TokenPair};
use crate::repos::users::{NewUser, User, UserStore};

/// What `info` reports about the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: i64,
    pub email: String,
    pub session_id: String,
    pub created_at: time::OffsetDateTime,
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: TokenIssuer,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Hashes the password in place and stores the user.
    pub async fn register(&self, mut user: NewUser) -> Result<User, AuthError> {
        user.email = normalize_email(&user.email)?;
        if user.password.is_empty() {
            return Err(AuthError::Validation("password is required".to_string()));
        }

        user.password = self.hasher.hash(&user.password)?;
        Ok(self.users.insert_user(user).await?)
    }

    /// Checks the credentials and opens a new session.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        // No format check here: anything that is not a stored email is UserNotFound.
        let email = email.trim().to_lowercase();
        let user = self
            .users
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(AuthError::WrongPassword);
        }

        let session_id = Uuid::new_v4().to_string();
        self.tokens.issue_pair(&session_id, user.id)
    }

    /// Profile of the user an access token was issued to.
    pub async fn info(&self, access_token: &str) -> Result<Profile, AuthError> {
        let claims = self.tokens.validate_token(access_token, TokenKind::Access)?;
        let user = self
            .users
            .find_user_by_id(claims.subject_id()?)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(Profile {
            id: user.id,
            email: user.email,
            session_id: claims.sid,
            created_at: user.created_at,
        })
    }

    /// New access token for the refresh token's session. The refresh token
    /// itself stays valid until it expires.
    pub async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let claims = self
            .tokens
            .validate_token(refresh_token, TokenKind::Refresh)?;
        let user = self
            .users
            .find_user_by_id(claims.subject_id()?)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.tokens.issue_token(
            &claims.sid,
            user.id,
            TokenKind::Access,
            self.tokens.lifetime(TokenKind::Access),
        )
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }
}

fn normalize_email(raw: &str) -> Result<String, AuthError> {
    let email = raw.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AuthError::Validation(
            "a valid email is required".to_string(),
        )),
    }
}
