//! SeaORM adapter for the social-media store.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    NotSet, QueryFilter, QueryOrder, Set,
};

use crate::entities::social_medias;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::social_media::{
    NewSocialMedia, SocialMedia, SocialMediaStore, SocialMediaUpdate,
};

pub async fn create_social_media<C: ConnectionTrait>(
    conn: &C,
    owner_id: i64,
    social_media: NewSocialMedia,
) -> Result<social_medias::Model, sea_orm::DbErr> {
    social_medias::ActiveModel {
        id: NotSet,
        name: Set(social_media.name),
        url: Set(social_media.url),
        user_id: Set(owner_id),
    }
    .insert(conn)
    .await
}

pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<social_medias::Model>, sea_orm::DbErr> {
    social_medias::Entity::find()
        .order_by_asc(social_medias::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_user<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<social_medias::Model>, sea_orm::DbErr> {
    social_medias::Entity::find()
        .filter(social_medias::Column::UserId.eq(user_id))
        .order_by_asc(social_medias::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<social_medias::Model>, sea_orm::DbErr> {
    social_medias::Entity::find_by_id(id).one(conn).await
}

pub async fn apply_update<C: ConnectionTrait>(
    conn: &C,
    existing: social_medias::Model,
    update: SocialMediaUpdate,
) -> Result<social_medias::Model, sea_orm::DbErr> {
    let mut active = existing.into_active_model();
    if let Some(name) = update.name {
        active.name = Set(name);
    }
    if let Some(url) = update.url {
        active.url = Set(url);
    }
    active.update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, sea_orm::DbErr> {
    let res = social_medias::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(
        NotFoundKind::SocialMedia,
        format!("Social media {id} not found"),
    )
}

// No timestamps on this table, so no clock.
#[derive(Clone)]
pub struct SeaSocialMediaStore {
    conn: Arc<DatabaseConnection>,
}

impl SeaSocialMediaStore {
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl SocialMediaStore for SeaSocialMediaStore {
    async fn insert_social_media(
        &self,
        owner_id: i64,
        social_media: NewSocialMedia,
    ) -> Result<SocialMedia, DomainError> {
        let model = create_social_media(&*self.conn, owner_id, social_media).await?;
        Ok(SocialMedia::from(model))
    }

    async fn find_all_social_media(&self) -> Result<Vec<SocialMedia>, DomainError> {
        let models = find_all(&*self.conn).await?;
        Ok(models.into_iter().map(SocialMedia::from).collect())
    }

    async fn find_social_media_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<SocialMedia>, DomainError> {
        let models = find_by_user(&*self.conn, user_id).await?;
        Ok(models.into_iter().map(SocialMedia::from).collect())
    }

    async fn find_social_media_by_id(&self, id: i64) -> Result<Option<SocialMedia>, DomainError> {
        Ok(find_by_id(&*self.conn, id).await?.map(SocialMedia::from))
    }

    async fn update_social_media(
        &self,
        id: i64,
        update: SocialMediaUpdate,
    ) -> Result<SocialMedia, DomainError> {
        let existing = find_by_id(&*self.conn, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let model = apply_update(&*self.conn, existing, update).await?;
        Ok(SocialMedia::from(model))
    }

    async fn delete_social_media(&self, id: i64) -> Result<(), DomainError> {
        match delete_by_id(&*self.conn, id).await? {
            0 => Err(not_found(id)),
            _ => Ok(()),
        }
    }
}
