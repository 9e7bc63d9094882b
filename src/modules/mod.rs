pub mod auth;
pub mod comment;
pub mod permission;
pub mod post;
pub mod role;
pub mod user;
