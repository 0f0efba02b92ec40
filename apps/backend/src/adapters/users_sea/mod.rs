//! SeaORM adapter for the user store.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, Set,
};

use crate::clock::Clock;
use crate::entities::users;
use crate::errors::domain::DomainError;
use crate::repos::users::{NewUser, User, UserStore};

pub mod dto;

pub use dto::UserCreate;

// Adapter functions return DbErr; SeaUserStore maps to DomainError via From<DbErr>.

pub async fn create_user<C: ConnectionTrait>(
    conn: &C,
    dto: UserCreate,
    now: time::OffsetDateTime,
) -> Result<users::Model, sea_orm::DbErr> {
    let user_active = users::ActiveModel {
        id: NotSet,
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_active.insert(conn).await
}

pub async fn find_user_by_email<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn find_user_by_id<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

#[derive(Clone)]
pub struct SeaUserStore {
    conn: Arc<DatabaseConnection>,
    clock: Arc<dyn Clock>,
}

impl SeaUserStore {
    pub fn new(conn: Arc<DatabaseConnection>, clock: Arc<dyn Clock>) -> Self {
        Self { conn, clock }
    }
}

#[async_trait]
impl UserStore for SeaUserStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, DomainError> {
        // `password` already carries the hash by the time it reaches the store.
        let dto = UserCreate::new(user.email, user.password);
        let model = create_user(&*self.conn, dto, self.clock.now()).await?;
        Ok(User::from(model))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let model = find_user_by_email(&*self.conn, email).await?;
        Ok(model.map(User::from))
    }

    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let model = find_user_by_id(&*self.conn, id).await?;
        Ok(model.map(User::from))
    }
}
