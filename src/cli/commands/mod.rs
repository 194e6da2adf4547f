pub mod auth;
pub mod note;
