//! SeaORM adapter for the photo store.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    NotSet, QueryFilter, QueryOrder, Set,
};

use crate::clock::Clock;
use crate::entities::photos;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::photos::{NewPhoto, Photo, PhotoStore, PhotoUpdate};

pub async fn create_photo<C: ConnectionTrait>(
    conn: &C,
    owner_id: i64,
    photo: NewPhoto,
    now: time::OffsetDateTime,
) -> Result<photos::Model, sea_orm::DbErr> {
    photos::ActiveModel {
        id: NotSet,
        title: Set(photo.title),
        caption: Set(photo.caption),
        photo_url: Set(photo.photo_url),
        user_id: Set(owner_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<photos::Model>, sea_orm::DbErr> {
    photos::Entity::find()
        .order_by_asc(photos::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_user<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<photos::Model>, sea_orm::DbErr> {
    photos::Entity::find()
        .filter(photos::Column::UserId.eq(user_id))
        .order_by_asc(photos::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<photos::Model>, sea_orm::DbErr> {
    photos::Entity::find_by_id(id).one(conn).await
}

/// Applies the provided fields to an existing row.
pub async fn apply_update<C: ConnectionTrait>(
    conn: &C,
    existing: photos::Model,
    update: PhotoUpdate,
    now: time::OffsetDateTime,
) -> Result<photos::Model, sea_orm::DbErr> {
    let mut active = existing.into_active_model();
    if let Some(title) = update.title {
        active.title = Set(title);
    }
    if let Some(caption) = update.caption {
        active.caption = Set(caption);
    }
    if let Some(photo_url) = update.photo_url {
        active.photo_url = Set(photo_url);
    }
    active.updated_at = Set(now);
    active.update(conn).await
}

/// Returns the number of rows removed.
pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, sea_orm::DbErr> {
    let res = photos::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Photo, format!("Photo {id} not found"))
}

#[derive(Clone)]
pub struct SeaPhotoStore {
    conn: Arc<DatabaseConnection>,
    clock: Arc<dyn Clock>,
}

impl SeaPhotoStore {
    pub fn new(conn: Arc<DatabaseConnection>, clock: Arc<dyn Clock>) -> Self {
        Self { conn, clock }
    }
}

#[async_trait]
impl PhotoStore for SeaPhotoStore {
    async fn insert_photo(&self, owner_id: i64, photo: NewPhoto) -> Result<Photo, DomainError> {
        let model = create_photo(&*self.conn, owner_id, photo, self.clock.now()).await?;
        Ok(Photo::from(model))
    }

    async fn find_all_photos(&self) -> Result<Vec<Photo>, DomainError> {
        let models = find_all(&*self.conn).await?;
        Ok(models.into_iter().map(Photo::from).collect())
    }

    async fn find_photos_by_user(&self, user_id: i64) -> Result<Vec<Photo>, DomainError> {
        let models = find_by_user(&*self.conn, user_id).await?;
        Ok(models.into_iter().map(Photo::from).collect())
    }

    async fn find_photo_by_id(&self, id: i64) -> Result<Option<Photo>, DomainError> {
        let model = find_by_id(&*self.conn, id).await?;
        Ok(model.map(Photo::from))
    }

    async fn update_photo(&self, id: i64, update: PhotoUpdate) -> Result<Photo, DomainError> {
        let existing = find_by_id(&*self.conn, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let model = apply_update(&*self.conn, existing, update, self.clock.now()).await?;
        Ok(Photo::from(model))
    }

    async fn delete_photo(&self, id: i64) -> Result<(), DomainError> {
        match delete_by_id(&*self.conn, id).await? {
            0 => Err(not_found(id)),
            _ => Ok(()),
        }
    }
}
