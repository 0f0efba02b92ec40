pub mod comments;
pub mod photos;
pub mod social_medias;
pub mod users;

pub use comments::Entity as Comments;
pub use photos::Entity as Photos;
pub use social_medias::Entity as SocialMedias;
pub use users::Entity as Users;
