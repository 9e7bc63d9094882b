use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;
use crate::modules::post::model::PostStatus;

#[derive(Deserialize, Validate)]
pub struct PostRequest {
    #[validate(length(
        min = 4,
        max = 200,
        message = "Title must be between 4 and 200 characters"
    ))]
    pub title: String,
    #[validate(length(min = 1, message = "Post content is required"))]
    pub content: String,
    pub status: Option<String>,
}

pub struct NewPost {
    pub author_id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
}
