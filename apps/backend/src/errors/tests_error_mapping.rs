// DomainError -> AppError mapping, no database involved
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, AuthError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let app: AppError = DomainError::validation("title is required").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status(), 400);
    assert_eq!(app.detail(), "title is required");
}

#[test]
fn maps_forbidden_to_403() {
    let app: AppError = DomainError::forbidden("Photo belongs to another user").into();
    assert_eq!(app.code(), ErrorCode::Forbidden);
    assert_eq!(app.status(), 403);
}

#[test]
fn maps_conflicts() {
    let unique = DomainError::conflict(ConflictKind::UniqueEmail, "email exists");
    let app: AppError = unique.into();
    assert_eq!(app.code().as_str(), "UNIQUE_EMAIL");
    assert_eq!(app.status(), 409);

    let other = DomainError::conflict(ConflictKind::Other("Unique".into()), "dup");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::Conflict);
    assert_eq!(app.status(), 409);
}

#[test]
fn maps_every_not_found_kind() {
    let cases = [
        (NotFoundKind::User, ErrorCode::UserNotFound),
        (NotFoundKind::Photo, ErrorCode::PhotoNotFound),
        (NotFoundKind::Comment, ErrorCode::CommentNotFound),
        (NotFoundKind::SocialMedia, ErrorCode::SocialMediaNotFound),
        (NotFoundKind::Other("Record".into()), ErrorCode::NotFound),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::not_found(kind, "gone").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status(), 404);
    }
}

#[test]
fn maps_infra_kinds_to_status() {
    let timeout: AppError = DomainError::infra(InfraErrorKind::Timeout, "slow").into();
    assert_eq!(timeout.code(), ErrorCode::DbTimeout);
    assert_eq!(timeout.status(), 504);

    let down: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(down.status(), 503);

    let other: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "boom").into();
    assert_eq!(other.code(), ErrorCode::DbError);
    assert_eq!(other.status(), 500);
}

#[test]
fn auth_storage_unique_email_becomes_duplicate() {
    let err = AuthError::from(DomainError::conflict(ConflictKind::UniqueEmail, "dup"));
    assert_eq!(err, AuthError::DuplicateEmail);

    let err = AuthError::from(DomainError::infra(InfraErrorKind::Timeout, "slow"));
    assert!(matches!(err, AuthError::Storage(_)));
}
