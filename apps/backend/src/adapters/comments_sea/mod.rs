//! SeaORM adapter for the comment store.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    NotSet, QueryFilter, QueryOrder, Set,
};

use crate::clock::Clock;
use crate::entities::comments;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::comments::{Comment, CommentStore, CommentUpdate, NewComment};

pub async fn create_comment<C: ConnectionTrait>(
    conn: &C,
    owner_id: i64,
    comment: NewComment,
    now: time::OffsetDateTime,
) -> Result<comments::Model, sea_orm::DbErr> {
    comments::ActiveModel {
        id: NotSet,
        photo_id: Set(comment.photo_id),
        user_id: Set(owner_id),
        message: Set(comment.message),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<comments::Model>, sea_orm::DbErr> {
    comments::Entity::find()
        .order_by_asc(comments::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_user<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<comments::Model>, sea_orm::DbErr> {
    comments::Entity::find()
        .filter(comments::Column::UserId.eq(user_id))
        .order_by_asc(comments::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i64,
) -> Result<Option<comments::Model>, sea_orm::DbErr> {
    comments::Entity::find_by_id(id).one(conn).await
}

pub async fn apply_update<C: ConnectionTrait>(
    conn: &C,
    existing: comments::Model,
    update: CommentUpdate,
    now: time::OffsetDateTime,
) -> Result<comments::Model, sea_orm::DbErr> {
    let mut active = existing.into_active_model();
    if let Some(message) = update.message {
        active.message = Set(message);
    }
    active.updated_at = Set(now);
    active.update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<u64, sea_orm::DbErr> {
    let res = comments::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Comment, format!("Comment {id} not found"))
}

#[derive(Clone)]
pub struct SeaCommentStore {
    conn: Arc<DatabaseConnection>,
    clock: Arc<dyn Clock>,
}

impl SeaCommentStore {
    pub fn new(conn: Arc<DatabaseConnection>, clock: Arc<dyn Clock>) -> Self {
        Self { conn, clock }
    }
}

#[async_trait]
impl CommentStore for SeaCommentStore {
    async fn insert_comment(
        &self,
        owner_id: i64,
        comment: NewComment,
    ) -> Result<Comment, DomainError> {
        let model = create_comment(&*self.conn, owner_id, comment, self.clock.now()).await?;
        Ok(Comment::from(model))
    }

    async fn find_all_comments(&self) -> Result<Vec<Comment>, DomainError> {
        let models = find_all(&*self.conn).await?;
        Ok(models.into_iter().map(Comment::from).collect())
    }

    async fn find_comments_by_user(&self, user_id: i64) -> Result<Vec<Comment>, DomainError> {
        let models = find_by_user(&*self.conn, user_id).await?;
        Ok(models.into_iter().map(Comment::from).collect())
    }

    async fn find_comment_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        Ok(find_by_id(&*self.conn, id).await?.map(Comment::from))
    }

    async fn update_comment(
        &self,
        id: i64,
        update: CommentUpdate,
    ) -> Result<Comment, DomainError> {
        let existing = find_by_id(&*self.conn, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let model = apply_update(&*self.conn, existing, update, self.clock.now()).await?;
        Ok(Comment::from(model))
    }

    async fn delete_comment(&self, id: i64) -> Result<(), DomainError> {
        match delete_by_id(&*self.conn, id).await? {
            0 => Err(not_found(id)),
            _ => Ok(()),
        }
    }
}
