use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: i64,
    pub photo_id: i64,
    pub user_id: i64,
    pub message: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewComment {
    pub photo_id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommentUpdate {
    pub message: Option<String>,
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert_comment(
        &self,
        owner_id: i64,
        comment: NewComment,
    ) -> Result<Comment, DomainError>;
    async fn find_all_comments(&self) -> Result<Vec<Comment>, DomainError>;
    async fn find_comments_by_user(&self, user_id: i64) -> Result<Vec<Comment>, DomainError>;
    async fn find_comment_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError>;
    async fn update_comment(&self, id: i64, update: CommentUpdate)
        -> Result<Comment, DomainError>;
    async fn delete_comment(&self, id: i64) -> Result<(), DomainError>;
}

impl From<crate::entities::comments::Model> for Comment {
    fn from(model: crate::entities::comments::Model) -> Self {
        Self {
            id: model.id,
            photo_id: model.photo_id,
            user_id: model.user_id,
            message: model.message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
