pub mod dto;
pub mod handler;
pub mod model;
pub mod moderation;
pub mod thread;
