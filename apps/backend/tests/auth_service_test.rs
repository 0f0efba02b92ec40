mod common;
mod support;

use backend::auth::{AuthError, TokenKind};
use backend::error::AppError;
use backend::errors::ErrorCode;
use backend::repos::NewUser;
use backend_test_support::unique_helpers::unique_email;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use support::test_state;

/// Test: the register-then-login example from the auth contract
#[tokio::test]
async fn test_register_then_login_returns_two_distinct_tokens() -> Result<(), AuthError> {
    let env = test_state();
    let auth = &env.state.auth;

    let user = auth.register(NewUser::new("a@x.com", "secret123")).await?;
    assert!(user.id > 0);
    assert_eq!(user.email, "a@x.com");

    let pair = auth.login("a@x.com", "secret123").await?;
    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
    assert_ne!(pair.access_token, pair.refresh_token);

    let err = auth.login("a@x.com", "wrong").await.unwrap_err();
    assert_eq!(err, AuthError::WrongPassword);

    Ok(())
}

/// Test: the stored password is a hash, never the plaintext
#[tokio::test]
async fn test_register_stores_hash_not_plaintext() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("hash");

    env.state
        .auth
        .register(NewUser::new(email.clone(), "hunter2-hunter2"))
        .await?;

    let stored = env.stores.users.all();
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0].password_hash, "hunter2-hunter2");
    assert!(stored[0].password_hash.starts_with("$argon2id$"));
    Ok(())
}

/// Test: register normalizes the email so login is case-insensitive
#[tokio::test]
async fn test_register_normalizes_email() -> Result<(), AuthError> {
    let env = test_state();
    let user = env
        .state
        .auth
        .register(NewUser::new("  Mixed.Case@Example.TEST ", "pw-123456"))
        .await?;
    assert_eq!(user.email, "mixed.case@example.test");

    env.state
        .auth
        .login("MIXED.case@example.test", "pw-123456")
        .await?;
    Ok(())
}

/// Test: blank email or password never reaches the store
#[tokio::test]
async fn test_register_rejects_blank_fields() {
    let env = test_state();
    let auth = &env.state.auth;

    let err = auth.register(NewUser::new("", "pw")).await.unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));

    let err = auth
        .register(NewUser::new(unique_email("blank"), ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));

    assert!(env.stores.users.all().is_empty());
}

/// Test: a second registration with the same email is a duplicate
#[tokio::test]
async fn test_register_duplicate_email() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("dup");

    env.state
        .auth
        .register(NewUser::new(email.clone(), "first-pass"))
        .await?;
    let err = env
        .state
        .auth
        .register(NewUser::new(email.to_uppercase(), "second-pass"))
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::DuplicateEmail);

    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::UniqueEmail);
    assert_eq!(app.status(), 409);
    Ok(())
}

/// Test: unknown email is UserNotFound, not WrongPassword
#[tokio::test]
async fn test_login_unknown_email() {
    let env = test_state();
    let err = env
        .state
        .auth
        .login(&unique_email("ghost"), "whatever")
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::UserNotFound);
}

/// Test: a malformed email at login is just an unknown user
#[tokio::test]
async fn test_login_malformed_email_is_user_not_found() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("shape");
    env.state
        .auth
        .register(NewUser::new(email.clone(), "right-password"))
        .await?;

    let err = env
        .state
        .auth
        .login("not-an-email", "right-password")
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::UserNotFound);

    let wrong_password: AppError = env
        .state
        .auth
        .login(&email, "nope")
        .await
        .unwrap_err()
        .into();
    let malformed: AppError = err.into();
    assert_eq!(malformed.code(), wrong_password.code());
    assert_eq!(malformed.status(), 401);
    Ok(())
}

/// Test: both credential failures look the same at the delivery boundary
#[tokio::test]
async fn test_credential_failures_collapse_at_boundary() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("leak");
    env.state
        .auth
        .register(NewUser::new(email.clone(), "right-password"))
        .await?;

    let wrong_password: AppError = env
        .state
        .auth
        .login(&email, "nope")
        .await
        .unwrap_err()
        .into();
    let no_user: AppError = env
        .state
        .auth
        .login(&unique_email("missing"), "nope")
        .await
        .unwrap_err()
        .into();

    assert_eq!(wrong_password.code(), no_user.code());
    assert_eq!(wrong_password.status(), 401);
    assert_eq!(wrong_password.detail(), no_user.detail());
    Ok(())
}

/// Test: store failures surface as Storage, not as credential errors
#[tokio::test]
async fn test_login_store_failure_is_storage() {
    let env = test_state();
    *env.stores.users.broken.lock() = true;

    let err = env
        .state
        .auth
        .login(&unique_email("down"), "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Storage(_)));
    assert_eq!(AppError::from(err).status(), 503);
}

/// Test: each login mints a fresh session shared by both tokens of the pair
#[tokio::test]
async fn test_logins_produce_distinct_sessions() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("sessions");
    env.state
        .auth
        .register(NewUser::new(email.clone(), "pw-sessions"))
        .await?;

    let first = env.state.auth.login(&email, "pw-sessions").await?;
    let second = env.state.auth.login(&email, "pw-sessions").await?;
    let issuer = env.state.auth.tokens();

    let first_access = issuer.validate_token(&first.access_token, TokenKind::Access)?;
    let first_refresh = issuer.validate_token(&first.refresh_token, TokenKind::Refresh)?;
    let second_access = issuer.validate_token(&second.access_token, TokenKind::Access)?;

    assert_eq!(first_access.sid, first_refresh.sid);
    assert_eq!(first_access.sub, first_refresh.sub);
    assert_ne!(first_access.sid, second_access.sid);
    assert_ne!(first.access_token, second.access_token);
    assert_ne!(first.refresh_token, second.refresh_token);
    Ok(())
}

/// Test: tokens only verify under their own kind's secret
#[tokio::test]
async fn test_tokens_do_not_cross_secrets() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("cross");
    env.state
        .auth
        .register(NewUser::new(email.clone(), "pw-cross"))
        .await?;
    let pair = env.state.auth.login(&email, "pw-cross").await?;
    let issuer = env.state.auth.tokens();

    assert_eq!(
        issuer
            .validate_token(&pair.access_token, TokenKind::Refresh)
            .unwrap_err(),
        AuthError::InvalidSignature
    );
    assert_eq!(
        issuer
            .validate_token(&pair.refresh_token, TokenKind::Access)
            .unwrap_err(),
        AuthError::InvalidSignature
    );

    // Raw decode with the other secret fails the same way
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    let raw = decode::<serde_json::Value>(
        &pair.access_token,
        &DecodingKey::from_secret(&env.tokens.refresh_secret),
        &validation,
    );
    assert!(raw.is_err());
    Ok(())
}

/// Test: info returns the caller's profile and the session from the token
#[tokio::test]
async fn test_info_returns_profile() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("info");
    let user = env
        .state
        .auth
        .register(NewUser::new(email.clone(), "pw-info"))
        .await?;
    let pair = env.state.auth.login(&email, "pw-info").await?;

    let profile = env.state.auth.info(&pair.access_token).await?;
    let claims = env
        .state
        .auth
        .tokens()
        .validate_token(&pair.access_token, TokenKind::Access)?;

    assert_eq!(profile.id, user.id);
    assert_eq!(profile.email, email);
    assert_eq!(profile.session_id, claims.sid);
    assert_eq!(profile.created_at, user.created_at);
    Ok(())
}

/// Test: info rejects refresh tokens and garbage
#[tokio::test]
async fn test_info_rejects_wrong_tokens() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("info-bad");
    env.state
        .auth
        .register(NewUser::new(email.clone(), "pw-info"))
        .await?;
    let pair = env.state.auth.login(&email, "pw-info").await?;

    assert!(env.state.auth.info(&pair.refresh_token).await.is_err());
    assert_eq!(
        env.state.auth.info("not-a-jwt").await.unwrap_err(),
        AuthError::InvalidToken
    );
    Ok(())
}

/// Test: access tokens expire on the injected clock
#[tokio::test]
async fn test_info_after_access_expiry() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("expiry");
    env.state
        .auth
        .register(NewUser::new(email.clone(), "pw-expiry"))
        .await?;
    let pair = env.state.auth.login(&email, "pw-expiry").await?;

    env.clock.advance(env.tokens.access_ttl);
    let err = env.state.auth.info(&pair.access_token).await.unwrap_err();
    assert_eq!(err, AuthError::ExpiredToken);

    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::UnauthorizedExpiredJwt);
    Ok(())
}

/// Test: refresh keeps the session and yields a working access token
#[tokio::test]
async fn test_refresh_keeps_session() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("refresh");
    env.state
        .auth
        .register(NewUser::new(email.clone(), "pw-refresh"))
        .await?;
    let pair = env.state.auth.login(&email, "pw-refresh").await?;

    env.clock.advance(time::Duration::seconds(30));
    let access = env.state.auth.refresh(&pair.refresh_token).await?;
    assert_ne!(access, pair.access_token);

    let issuer = env.state.auth.tokens();
    let original = issuer.validate_token(&pair.refresh_token, TokenKind::Refresh)?;
    let renewed = issuer.validate_token(&access, TokenKind::Access)?;
    assert_eq!(original.sid, renewed.sid);
    assert_eq!(original.sub, renewed.sub);

    let profile = env.state.auth.info(&access).await?;
    assert_eq!(profile.session_id, original.sid);
    Ok(())
}

/// Test: refresh refuses an access token
#[tokio::test]
async fn test_refresh_rejects_access_token() -> Result<(), AuthError> {
    let env = test_state();
    let email = unique_email("refresh-bad");
    env.state
        .auth
        .register(NewUser::new(email.clone(), "pw-refresh"))
        .await?;
    let pair = env.state.auth.login(&email, "pw-refresh").await?;

    assert!(env.state.auth.refresh(&pair.access_token).await.is_err());
    Ok(())
}
