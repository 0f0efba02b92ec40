//! ULID-based fixture values so tests sharing a store never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique, already-normalized (lowercase) email address.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let a = unique_email("alice");
/// assert_ne!(a, unique_email("alice"));
/// assert!(a.ends_with("@example.test"));
/// assert_eq!(a, a.to_lowercase());
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new()).to_lowercase()
}

/// A unique https URL under `example.test`, for photo and profile links.
pub fn unique_url(path: &str) -> String {
    format!("https://example.test/{}/{}", path, Ulid::new().to_string().to_lowercase())
}
