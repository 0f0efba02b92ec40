//! In-memory stores with the same contract as the SeaORM adapters.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use backend::clock::Clock;
use backend::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use backend::infra::state::Stores;
use backend::repos::{
    Comment, CommentStore, CommentUpdate, NewComment, NewPhoto, NewSocialMedia, NewUser, Photo,
    PhotoStore, PhotoUpdate, SocialMedia, SocialMediaStore, SocialMediaUpdate, User, UserStore,
};
use parking_lot::Mutex;

fn next(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

pub struct FakeUserStore {
    clock: Arc<dyn Clock>,
    rows: Mutex<Vec<User>>,
    ids: AtomicI64,
    /// When set, every call fails with an infra error.
    pub broken: Mutex<bool>,
}

impl FakeUserStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            rows: Mutex::new(Vec::new()),
            ids: AtomicI64::new(0),
            broken: Mutex::new(false),
        }
    }

    pub fn all(&self) -> Vec<User> {
        self.rows.lock().clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if *self.broken.lock() {
            return Err(DomainError::infra(
                InfraErrorKind::DbUnavailable,
                "store offline",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, DomainError> {
        self.check()?;
        let mut rows = self.rows.lock();
        if rows.iter().any(|u| u.email == user.email) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueEmail,
                "Email already registered",
            ));
        }
        let now = self.clock.now();
        let row = User {
            id: next(&self.ids),
            email: user.email,
            password_hash: user.password,
            created_at: now,
            updated_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check()?;
        Ok(self.rows.lock().iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.check()?;
        Ok(self.rows.lock().iter().find(|u| u.id == id).cloned())
    }
}

pub struct FakePhotoStore {
    clock: Arc<dyn Clock>,
    rows: Mutex<Vec<Photo>>,
    ids: AtomicI64,
}

impl FakePhotoStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            rows: Mutex::new(Vec::new()),
            ids: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl PhotoStore for FakePhotoStore {
    async fn insert_photo(&self, owner_id: i64, photo: NewPhoto) -> Result<Photo, DomainError> {
        let now = self.clock.now();
        let row = Photo {
            id: next(&self.ids),
            title: photo.title,
            caption: photo.caption,
            photo_url: photo.photo_url,
            user_id: owner_id,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().push(row.clone());
        Ok(row)
    }

    async fn find_all_photos(&self) -> Result<Vec<Photo>, DomainError> {
        Ok(self.rows.lock().clone())
    }

    async fn find_photos_by_user(&self, user_id: i64) -> Result<Vec<Photo>, DomainError> {
        Ok(self
            .rows
            .lock()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_photo_by_id(&self, id: i64) -> Result<Option<Photo>, DomainError> {
        Ok(self.rows.lock().iter().find(|p| p.id == id).cloned())
    }

    async fn update_photo(&self, id: i64, update: PhotoUpdate) -> Result<Photo, DomainError> {
        let now = self.clock.now();
        let mut rows = self.rows.lock();
        let row = rows.iter_mut().find(|p| p.id == id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Photo, format!("Photo {id} not found"))
        })?;
        if let Some(title) = update.title {
            row.title = title;
        }
        if let Some(caption) = update.caption {
            row.caption = caption;
        }
        if let Some(photo_url) = update.photo_url {
            row.photo_url = photo_url;
        }
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn delete_photo(&self, id: i64) -> Result<(), DomainError> {
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found(
                NotFoundKind::Photo,
                format!("Photo {id} not found"),
            ));
        }
        Ok(())
    }
}

pub struct FakeCommentStore {
    clock: Arc<dyn Clock>,
    rows: Mutex<Vec<Comment>>,
    ids: AtomicI64,
}

impl FakeCommentStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            rows: Mutex::new(Vec::new()),
            ids: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl CommentStore for FakeCommentStore {
    async fn insert_comment(
        &self,
        owner_id: i64,
        comment: NewComment,
    ) -> Result<Comment, DomainError> {
        let now = self.clock.now();
        let row = Comment {
            id: next(&self.ids),
            photo_id: comment.photo_id,
            user_id: owner_id,
            message: comment.message,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().push(row.clone());
        Ok(row)
    }

    async fn find_all_comments(&self) -> Result<Vec<Comment>, DomainError> {
        Ok(self.rows.lock().clone())
    }

    async fn find_comments_by_user(&self, user_id: i64) -> Result<Vec<Comment>, DomainError> {
        Ok(self
            .rows
            .lock()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_comment_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        Ok(self.rows.lock().iter().find(|c| c.id == id).cloned())
    }

    async fn update_comment(
        &self,
        id: i64,
        update: CommentUpdate,
    ) -> Result<Comment, DomainError> {
        let now = self.clock.now();
        let mut rows = self.rows.lock();
        let row = rows.iter_mut().find(|c| c.id == id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Comment, format!("Comment {id} not found"))
        })?;
        if let Some(message) = update.message {
            row.message = message;
        }
        row.updated_at = now;
        Ok(row.clone())
    }

    async fn delete_comment(&self, id: i64) -> Result<(), DomainError> {
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found(
                NotFoundKind::Comment,
                format!("Comment {id} not found"),
            ));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSocialMediaStore {
    rows: Mutex<Vec<SocialMedia>>,
    ids: AtomicI64,
}

#[async_trait]
impl SocialMediaStore for FakeSocialMediaStore {
    async fn insert_social_media(
        &self,
        owner_id: i64,
        social_media: NewSocialMedia,
    ) -> Result<SocialMedia, DomainError> {
        let row = SocialMedia {
            id: next(&self.ids),
            name: social_media.name,
            url: social_media.url,
            user_id: owner_id,
        };
        self.rows.lock().push(row.clone());
        Ok(row)
    }

    async fn find_all_social_media(&self) -> Result<Vec<SocialMedia>, DomainError> {
        Ok(self.rows.lock().clone())
    }

    async fn find_social_media_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<SocialMedia>, DomainError> {
        Ok(self
            .rows
            .lock()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_social_media_by_id(&self, id: i64) -> Result<Option<SocialMedia>, DomainError> {
        Ok(self.rows.lock().iter().find(|s| s.id == id).cloned())
    }

    async fn update_social_media(
        &self,
        id: i64,
        update: SocialMediaUpdate,
    ) -> Result<SocialMedia, DomainError> {
        let mut rows = self.rows.lock();
        let row = rows.iter_mut().find(|s| s.id == id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::SocialMedia,
                format!("Social media {id} not found"),
            )
        })?;
        if let Some(name) = update.name {
            row.name = name;
        }
        if let Some(url) = update.url {
            row.url = url;
        }
        Ok(row.clone())
    }

    async fn delete_social_media(&self, id: i64) -> Result<(), DomainError> {
        let mut rows = self.rows.lock();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Err(DomainError::not_found(
                NotFoundKind::SocialMedia,
                format!("Social media {id} not found"),
            ));
        }
        Ok(())
    }
}

/// One of each fake, sharing a clock.
pub struct FakeStores {
    pub users: Arc<FakeUserStore>,
    pub photos: Arc<FakePhotoStore>,
    pub comments: Arc<FakeCommentStore>,
    pub social_media: Arc<FakeSocialMediaStore>,
}

impl FakeStores {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Arc::new(FakeUserStore::new(clock.clone())),
            photos: Arc::new(FakePhotoStore::new(clock.clone())),
            comments: Arc::new(FakeCommentStore::new(clock)),
            social_media: Arc::new(FakeSocialMediaStore::default()),
        }
    }

    pub fn stores(&self) -> Stores {
        Stores {
            users: self.users.clone(),
            photos: self.photos.clone(),
            comments: self.comments.clone(),
            social_media: self.social_media.clone(),
        }
    }
}
