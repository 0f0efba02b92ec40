#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod clock;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod logging;
pub mod repos;
pub mod services;
pub mod state;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::{AuthError, Claims, TokenIssuer, TokenKind, TokenPair};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, DbConfig, HasherConfig, TokenConfig};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use infra::db::connect_db;
pub use infra::state::{bootstrap, build_state, StateBuilder, Stores};
pub use services::{AuthService, CommentService, PhotoService, Profile, SocialMediaService};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
