//! Domain models and the store traits the services depend on.
//!
//! SeaORM implementations live in `crate::adapters`.

pub mod comments;
pub mod photos;
pub mod social_media;
pub mod users;

pub use comments::{Comment, CommentStore, CommentUpdate, NewComment};
pub use photos::{NewPhoto, Photo, PhotoStore, PhotoUpdate};
pub use social_media::{NewSocialMedia, SocialMedia, SocialMediaStore, SocialMediaUpdate};
pub use users::{NewUser, User, UserStore};
