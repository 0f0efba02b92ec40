use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    pub id: i64,
    pub title: String,
    pub caption: String,
    pub photo_url: String,
    pub user_id: i64,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPhoto {
    pub title: String,
    #[serde(default)]
    pub caption: String,
    pub photo_url: String,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PhotoUpdate {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub photo_url: Option<String>,
}

#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn insert_photo(&self, owner_id: i64, photo: NewPhoto) -> Result<Photo, DomainError>;
    async fn find_all_photos(&self) -> Result<Vec<Photo>, DomainError>;
    async fn find_photos_by_user(&self, user_id: i64) -> Result<Vec<Photo>, DomainError>;
    async fn find_photo_by_id(&self, id: i64) -> Result<Option<Photo>, DomainError>;
    /// `NotFound(Photo, _)` when no row has this id.
    async fn update_photo(&self, id: i64, update: PhotoUpdate) -> Result<Photo, DomainError>;
    /// `NotFound(Photo, _)` when no row has this id.
    async fn delete_photo(&self, id: i64) -> Result<(), DomainError>;
}

impl From<crate::entities::photos::Model> for Photo {
    fn from(model: crate::entities::photos::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            caption: model.caption,
            photo_url: model.photo_url,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
