use std::sync::Arc;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::social_media::{
    NewSocialMedia, SocialMedia, SocialMediaStore, SocialMediaUpdate,
};
use crate::services::{ensure_owner, reject_blank, require_non_blank};

#[derive(Clone)]
pub struct SocialMediaService {
    store: Arc<dyn SocialMediaStore>,
}

impl SocialMediaService {
    pub fn new(store: Arc<dyn SocialMediaStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        owner_id: i64,
        social_media: NewSocialMedia,
    ) -> Result<SocialMedia, DomainError> {
        require_non_blank("name", &social_media.name)?;
        require_non_blank("url", &social_media.url)?;
        self.store.insert_social_media(owner_id, social_media).await
    }

    pub async fn list_all(&self) -> Result<Vec<SocialMedia>, DomainError> {
        self.store.find_all_social_media().await
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<SocialMedia>, DomainError> {
        self.store.find_social_media_by_user(user_id).await
    }

    pub async fn get(&self, id: i64) -> Result<SocialMedia, DomainError> {
        self.store.find_social_media_by_id(id).await?.ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::SocialMedia,
                format!("Social media {id} not found"),
            )
        })
    }

    pub async fn update(
        &self,
        caller_id: i64,
        id: i64,
        update: SocialMediaUpdate,
    ) -> Result<SocialMedia, DomainError> {
        if update == SocialMediaUpdate::default() {
            return Err(DomainError::validation("no fields to update"));
        }
        reject_blank("name", update.name.as_deref())?;
        reject_blank("url", update.url.as_deref())?;

        let existing = self.get(id).await?;
        ensure_owner(existing.user_id, caller_id, "Social media")?;
        self.store.update_social_media(id, update).await
    }

    pub async fn delete(&self, caller_id: i64, id: i64) -> Result<(), DomainError> {
        let existing = self.get(id).await?;
        ensure_owner(existing.user_id, caller_id, "Social media")?;
        self.store.delete_social_media(id).await
    }
}
