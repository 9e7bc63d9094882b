use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};
use crate::modules::{
    comment::model::{CommentWithAuthor, PendingComment},
    user::dto::PublicAuthor,
};

fn validate_not_blank(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Comment content is required".into()));
    }
    Ok(())
}

#[derive(Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(
        length(max = 2000, message = "Comment cannot exceed 2000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub content: String,
    pub parent_comment_id: Option<Uuid>,
}

pub struct NewComment {
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_comment_id: Option<Uuid>,
    pub content: String,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl ModerationAction {
    pub fn from_str(str: &str) -> Option<Self> {
        match str {
            "approve" => Some(ModerationAction::Approve),
            "reject" => Some(ModerationAction::Reject),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
pub struct ModerateRequest {
    pub action: String,
}

#[derive(Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub author: PublicAuthor,
    pub created_at: DateTime<Utc>,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(comment: CommentWithAuthor) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            author: PublicAuthor::new(comment.author_id, comment.author_name, comment.author_avatar),
            created_at: comment.created_at,
        }
    }
}

/// A top-level comment with its replies attached, ready for rendering.
#[derive(Serialize)]
pub struct CommentThreadResponse {
    pub id: Uuid,
    pub content: String,
    pub author: PublicAuthor,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<CommentResponse>,
}

#[derive(Serialize)]
pub struct CommentsData {
    pub comments: Vec<CommentThreadResponse>,
}

#[derive(Serialize)]
pub struct PendingCommentAuthor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Serialize)]
pub struct PendingCommentPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
}

#[derive(Serialize)]
pub struct PendingCommentResponse {
    pub id: Uuid,
    pub content: String,
    pub author: PendingCommentAuthor,
    pub post: PendingCommentPost,
    pub created_at: DateTime<Utc>,
}

impl From<PendingComment> for PendingCommentResponse {
    fn from(comment: PendingComment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            author: PendingCommentAuthor {
                id: comment.author_id,
                name: comment.author_name,
                email: comment.author_email,
                avatar: comment.author_avatar,
            },
            post: PendingCommentPost {
                id: comment.post_id,
                title: comment.post_title,
                slug: comment.post_slug,
            },
            created_at: comment.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct PendingCommentsData {
    pub comments: Vec<PendingCommentResponse>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_fails_validation() {
        let body = CommentRequest {
            content: "   \n\t".to_string(),
            parent_comment_id: None,
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn non_blank_content_passes_validation() {
        let body = CommentRequest {
            content: "Nice post".to_string(),
            parent_comment_id: None,
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn moderation_action_parses_only_known_values() {
        assert_eq!(ModerationAction::from_str("approve"), Some(ModerationAction::Approve));
        assert_eq!(ModerationAction::from_str("reject"), Some(ModerationAction::Reject));
        assert_eq!(ModerationAction::from_str("Approve"), None);
        assert_eq!(ModerationAction::from_str("delete"), None);
    }
}
