//! Credentials and session tokens.

pub mod claims;
pub mod errors;
pub mod jwt;
pub mod password;

pub use claims::{Claims, TokenKind, TokenPair};
pub use errors::AuthError;
pub use jwt::TokenIssuer;
pub use password::{Argon2Hasher, CredentialHasher};
