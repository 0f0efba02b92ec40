use std::sync::Arc;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::comments::{Comment, CommentStore, CommentUpdate, NewComment};
use crate::repos::photos::PhotoStore;
use crate::services::{ensure_owner, reject_blank, require_non_blank};

/// Comment use cases. A comment must point at an existing photo.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    photos: Arc<dyn PhotoStore>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentStore>, photos: Arc<dyn PhotoStore>) -> Self {
        Self { comments, photos }
    }

    pub async fn create(&self, owner_id: i64, comment: NewComment) -> Result<Comment, DomainError> {
        require_non_blank("message", &comment.message)?;
        if self.photos.find_photo_by_id(comment.photo_id).await?.is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::Photo,
                format!("Photo {} not found", comment.photo_id),
            ));
        }
        self.comments.insert_comment(owner_id, comment).await
    }

    pub async fn list_all(&self) -> Result<Vec<Comment>, DomainError> {
        self.comments.find_all_comments().await
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Comment>, DomainError> {
        self.comments.find_comments_by_user(user_id).await
    }

    pub async fn get(&self, id: i64) -> Result<Comment, DomainError> {
        self.comments.find_comment_by_id(id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Comment, format!("Comment {id} not found"))
        })
    }

    pub async fn update(
        &self,
        caller_id: i64,
        id: i64,
        update: CommentUpdate,
    ) -> Result<Comment, DomainError> {
        if update == CommentUpdate::default() {
            return Err(DomainError::validation("no fields to update"));
        }
        reject_blank("message", update.message.as_deref())?;

        let existing = self.get(id).await?;
        ensure_owner(existing.user_id, caller_id, "Comment")?;
        self.comments.update_comment(id, update).await
    }

    pub async fn delete(&self, caller_id: i64, id: i64) -> Result<(), DomainError> {
        let existing = self.get(id).await?;
        ensure_owner(existing.user_id, caller_id, "Comment")?;
        self.comments.delete_comment(id).await
    }
}
