use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::{AuthService, CommentService, PhotoService, SocialMediaService};

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when stores were injected directly)
    pub db: Option<Arc<DatabaseConnection>>,
    pub auth: AuthService,
    pub photos: PhotoService,
    pub comments: CommentService,
    pub social_media: SocialMediaService,
}

impl AppState {
    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_deref()
    }
}
