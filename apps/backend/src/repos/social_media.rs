use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// A link to one of a user's social-media profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialMedia {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewSocialMedia {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SocialMediaUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[async_trait]
pub trait SocialMediaStore: Send + Sync {
    async fn insert_social_media(
        &self,
        owner_id: i64,
        social_media: NewSocialMedia,
    ) -> Result<SocialMedia, DomainError>;
    async fn find_all_social_media(&self) -> Result<Vec<SocialMedia>, DomainError>;
    async fn find_social_media_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<SocialMedia>, DomainError>;
    async fn find_social_media_by_id(&self, id: i64) -> Result<Option<SocialMedia>, DomainError>;
    async fn update_social_media(
        &self,
        id: i64,
        update: SocialMediaUpdate,
    ) -> Result<SocialMedia, DomainError>;
    async fn delete_social_media(&self, id: i64) -> Result<(), DomainError>;
}

impl From<crate::entities::social_medias::Model> for SocialMedia {
    fn from(model: crate::entities::social_medias::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            url: model.url,
            user_id: model.user_id,
        }
    }
}
