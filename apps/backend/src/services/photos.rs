use std::sync::Arc;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::photos::{NewPhoto, Photo, PhotoStore, PhotoUpdate};
use crate::services::{ensure_owner, reject_blank, require_non_blank};

/// Photo use cases. Mutations are limited to the photo's owner.
#[derive(Clone)]
pub struct PhotoService {
    store: Arc<dyn PhotoStore>,
}

impl PhotoService {
    pub fn new(store: Arc<dyn PhotoStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, owner_id: i64, photo: NewPhoto) -> Result<Photo, DomainError> {
        require_non_blank("title", &photo.title)?;
        require_non_blank("photo_url", &photo.photo_url)?;
        self.store.insert_photo(owner_id, photo).await
    }

    pub async fn list_all(&self) -> Result<Vec<Photo>, DomainError> {
        self.store.find_all_photos().await
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Photo>, DomainError> {
        self.store.find_photos_by_user(user_id).await
    }

    pub async fn get(&self, id: i64) -> Result<Photo, DomainError> {
        self.store.find_photo_by_id(id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Photo, format!("Photo {id} not found"))
        })
    }

    pub async fn update(
        &self,
        caller_id: i64,
        id: i64,
        update: PhotoUpdate,
    ) -> Result<Photo, DomainError> {
        if update == PhotoUpdate::default() {
            return Err(DomainError::validation("no fields to update"));
        }
        reject_blank("title", update.title.as_deref())?;
        reject_blank("photo_url", update.photo_url.as_deref())?;

        let existing = self.get(id).await?;
        ensure_owner(existing.user_id, caller_id, "Photo")?;
        self.store.update_photo(id, update).await
    }

    pub async fn delete(&self, caller_id: i64, id: i64) -> Result<(), DomainError> {
        let existing = self.get(id).await?;
        ensure_owner(existing.user_id, caller_id, "Photo")?;
        self.store.delete_photo(id).await
    }
}
