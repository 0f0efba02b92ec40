use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use time::Duration;

use crate::auth::{AuthError, Claims, TokenKind, TokenPair};
use crate::clock::Clock;
use crate::config::TokenConfig;

/// Signs and validates HS256 tokens.
///
/// Access and refresh tokens are signed with different secrets, so a token
/// of one kind never validates as the other.
#[derive(Clone)]
pub struct TokenIssuer {
    config: TokenConfig,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn lifetime(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.config.access_ttl,
            TokenKind::Refresh => self.config.refresh_ttl,
        }
    }

    fn secret(&self, kind: TokenKind) -> &[u8] {
        match kind {
            TokenKind::Access => &self.config.access_secret,
            TokenKind::Refresh => &self.config.refresh_secret,
        }
    }

    pub fn issue_token(
        &self,
        session_id: &str,
        subject_id: i64,
        kind: TokenKind,
        lifetime: Duration,
    ) -> Result<String, AuthError> {
        let secret = self.secret(kind);
        if secret.is_empty() {
            return Err(AuthError::Signing(format!(
                "{kind:?} signing secret is not configured"
            )));
        }

        let iat = self.clock.now().unix_timestamp();
        let exp = iat
            .checked_add(lifetime.whole_seconds())
            .ok_or_else(|| AuthError::Signing(format!("{kind:?} token lifetime is out of range")))?;
        let claims = Claims {
            sid: session_id.to_string(),
            sub: subject_id.to_string(),
            kind,
            iat,
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| AuthError::Signing(format!("Failed to encode JWT: {e}")))
    }

    /// Access and refresh token for one session, each with its configured lifetime.
    pub fn issue_pair(&self, session_id: &str, subject_id: i64) -> Result<TokenPair, AuthError> {
        let access_token = self.issue_token(
            session_id,
            subject_id,
            TokenKind::Access,
            self.lifetime(TokenKind::Access),
        )?;
        let refresh_token = self.issue_token(
            session_id,
            subject_id,
            TokenKind::Refresh,
            self.lifetime(TokenKind::Refresh),
        )?;
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verify signature (with the `expected` kind's secret) and expiry.
    ///
    /// Errors:
    /// - bad signature → `InvalidSignature`
    /// - `exp` at or before the clock's now → `ExpiredToken`
    /// - malformed, or signed for a different kind → `InvalidToken`
    pub fn validate_token(&self, token: &str, expected: TokenKind) -> Result<Claims, AuthError> {
        let secret = self.secret(expected);
        if secret.is_empty() {
            return Err(AuthError::Signing(format!(
                "{expected:?} signing secret is not configured"
            )));
        }

        // Expiry is checked below against the injected clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })?;

        if claims.kind != expected {
            return Err(AuthError::InvalidToken);
        }
        if claims.exp <= self.clock.now().unix_timestamp() {
            return Err(AuthError::ExpiredToken);
        }
        Ok(claims)
    }
}
