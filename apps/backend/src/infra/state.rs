use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::adapters::{SeaCommentStore, SeaPhotoStore, SeaSocialMediaStore, SeaUserStore};
use crate::auth::{Argon2Hasher, CredentialHasher, TokenIssuer};
use crate::clock::{Clock, SystemClock};
use crate::config::{AppConfig, HasherConfig, TokenConfig};
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::repos::{CommentStore, PhotoStore, SocialMediaStore, UserStore};
use crate::services::{AuthService, CommentService, PhotoService, SocialMediaService};
use crate::state::app_state::AppState;

/// The four stores the services run on.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub photos: Arc<dyn PhotoStore>,
    pub comments: Arc<dyn CommentStore>,
    pub social_media: Arc<dyn SocialMediaStore>,
}

impl Stores {
    pub fn sea(conn: &Arc<DatabaseConnection>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Arc::new(SeaUserStore::new(Arc::clone(conn), clock.clone())),
            photos: Arc::new(SeaPhotoStore::new(Arc::clone(conn), clock.clone())),
            comments: Arc::new(SeaCommentStore::new(Arc::clone(conn), clock)),
            social_media: Arc::new(SeaSocialMediaStore::new(Arc::clone(conn))),
        }
    }
}

/// Builder for creating AppState instances (used in both tests and embedding binaries)
pub struct StateBuilder {
    tokens: Option<TokenConfig>,
    hasher: HasherConfig,
    clock: Arc<dyn Clock>,
    db: Option<Arc<DatabaseConnection>>,
    stores: Option<Stores>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            tokens: None,
            hasher: HasherConfig::default(),
            clock: Arc::new(SystemClock),
            db: None,
            stores: None,
        }
    }

    pub fn with_tokens(mut self, tokens: TokenConfig) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn with_hasher(mut self, hasher: HasherConfig) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// SeaORM-backed stores over `conn`.
    pub fn with_db(mut self, conn: DatabaseConnection) -> Self {
        self.db = Some(Arc::new(conn));
        self
    }

    /// Explicit stores; wins over `with_db`.
    pub fn with_stores(mut self, stores: Stores) -> Self {
        self.stores = Some(stores);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let tokens = self
            .tokens
            .ok_or_else(|| AppError::config("token signing secrets are not configured"))?;
        if tokens.access_secret.is_empty() || tokens.refresh_secret.is_empty() {
            return Err(AppError::config("token signing secrets must not be empty"));
        }

        let stores = match (self.stores, &self.db) {
            (Some(stores), _) => stores,
            (None, Some(conn)) => Stores::sea(conn, self.clock.clone()),
            (None, None) => {
                return Err(AppError::config(
                    "either a database connection or explicit stores are required",
                ))
            }
        };

        let hasher: Arc<dyn CredentialHasher> =
            Arc::new(Argon2Hasher::new(self.hasher).map_err(|e| AppError::config(e.to_string()))?);
        let issuer = TokenIssuer::new(tokens, self.clock);

        Ok(AppState {
            db: self.db,
            auth: AuthService::new(stores.users, hasher, issuer),
            photos: PhotoService::new(stores.photos.clone()),
            comments: CommentService::new(stores.comments, stores.photos),
            social_media: SocialMediaService::new(stores.social_media),
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

/// Connects to the configured database and wires every service.
pub async fn bootstrap(config: AppConfig) -> Result<AppState, AppError> {
    let conn = connect_db(&config.database).await?;
    build_state()
        .with_tokens(config.tokens)
        .with_hasher(config.hasher)
        .with_db(conn)
        .build()
}
