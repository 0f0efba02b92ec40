//! SeaORM implementations of the store traits in `crate::repos`.

pub mod comments_sea;
pub mod photos_sea;
pub mod social_media_sea;
pub mod users_sea;

pub use comments_sea::SeaCommentStore;
pub use photos_sea::SeaPhotoStore;
pub use social_media_sea::SeaSocialMediaStore;
pub use users_sea::SeaUserStore;
