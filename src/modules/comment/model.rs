use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{query, query_as, Error as SqlxError, FromRow};
use uuid::Uuid;
use crate::{
    db::DBClient,
    modules::comment::dto::NewComment,
};

#[derive(Serialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_comment_id: Option<Uuid>,
    pub content: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// A comment row joined with the public fields of its author.
#[derive(FromRow, Clone)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    pub parent_comment_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
    pub author_name: String,
    pub author_avatar: Option<String>,
}

/// A pending comment annotated for the moderation queue.
#[derive(FromRow)]
pub struct PendingComment {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
    pub author_name: String,
    pub author_email: String,
    pub author_avatar: Option<String>,
    pub post_id: Uuid,
    pub post_title: String,
    pub post_slug: String,
}

/// The minimum a moderation decision needs: the comment and who owns its post.
#[derive(FromRow)]
pub struct CommentForModeration {
    pub id: Uuid,
    pub post_author_id: Uuid,
}

#[async_trait]
pub trait CommentRepository {
    async fn save_comment(&self, data: NewComment) -> Result<Comment, SqlxError>;
    async fn get_approved_parent(&self, post_id: Uuid, comment_id: Uuid) -> Result<Option<Comment>, SqlxError>;
    async fn get_top_level_comments(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, SqlxError>;
    async fn get_comment_replies(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, SqlxError>;
    async fn get_pending_comments_for_author(&self, author_id: Uuid) -> Result<Vec<PendingComment>, SqlxError>;
    async fn get_comment_for_moderation(&self, comment_id: Uuid) -> Result<Option<CommentForModeration>, SqlxError>;
    async fn approve_comment(&self, comment_id: Uuid) -> Result<(), SqlxError>;
    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), SqlxError>;
}

#[async_trait]
impl CommentRepository for DBClient {
    async fn save_comment(&self, data: NewComment) -> Result<Comment, SqlxError> {
        let new_comment = query_as::<_, Comment>(
            r#"
                INSERT INTO comments (author_id, post_id, parent_comment_id, content)
                VALUES ($1, $2, $3, $4)
                RETURNING id, author_id, post_id, parent_comment_id, content, is_approved, created_at;
            "#,
        )
            .bind(data.author_id)
            .bind(data.post_id)
            .bind(data.parent_comment_id)
            .bind(data.content)
            .fetch_one(&self.pool).await?;
        Ok(new_comment)
    }
    async fn get_approved_parent(&self, post_id: Uuid, comment_id: Uuid) -> Result<Option<Comment>, SqlxError> {
        let comment = query_as::<_, Comment>(
            r#"
                SELECT * FROM comments
                WHERE id = $1 AND post_id = $2 AND is_approved = true;
            "#,
        ).bind(comment_id).bind(post_id).fetch_optional(&self.pool).await?;
        Ok(comment)
    }
    async fn get_top_level_comments(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, SqlxError> {
        let comments = query_as::<_, CommentWithAuthor>(
            r#"
                SELECT c.id, c.parent_comment_id, c.content, c.created_at,
                       u.id AS author_id, u.name AS author_name, u.avatar AS author_avatar
                FROM comments AS c
                JOIN users AS u ON u.id = c.author_id
                WHERE c.post_id = $1 AND c.is_approved = true AND c.parent_comment_id IS NULL
                ORDER BY c.created_at DESC;
            "#,
        ).bind(post_id).fetch_all(&self.pool).await?;
        Ok(comments)
    }
    async fn get_comment_replies(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>, SqlxError> {
        let replies = query_as::<_, CommentWithAuthor>(
            r#"
                SELECT c.id, c.parent_comment_id, c.content, c.created_at,
                       u.id AS author_id, u.name AS author_name, u.avatar AS author_avatar
                FROM comments AS c
                JOIN users AS u ON u.id = c.author_id
                WHERE c.post_id = $1 AND c.is_approved = true AND c.parent_comment_id IS NOT NULL
                ORDER BY c.created_at ASC;
            "#,
        ).bind(post_id).fetch_all(&self.pool).await?;
        Ok(replies)
    }
    async fn get_pending_comments_for_author(&self, author_id: Uuid) -> Result<Vec<PendingComment>, SqlxError> {
        let pending = query_as::<_, PendingComment>(
            r#"
                SELECT c.id, c.content, c.created_at,
                       u.id AS author_id, u.name AS author_name, u.email AS author_email, u.avatar AS author_avatar,
                       p.id AS post_id, p.title AS post_title, p.slug AS post_slug
                FROM comments AS c
                JOIN posts AS p ON p.id = c.post_id
                JOIN users AS u ON u.id = c.author_id
                WHERE p.author_id = $1 AND c.is_approved = false
                ORDER BY c.created_at DESC;
            "#,
        ).bind(author_id).fetch_all(&self.pool).await?;
        Ok(pending)
    }
    async fn get_comment_for_moderation(&self, comment_id: Uuid) -> Result<Option<CommentForModeration>, SqlxError> {
        let comment = query_as::<_, CommentForModeration>(
            r#"
                SELECT c.id, p.author_id AS post_author_id
                FROM comments AS c
                JOIN posts AS p ON p.id = c.post_id
                WHERE c.id = $1;
            "#,
        ).bind(comment_id).fetch_optional(&self.pool).await?;
        Ok(comment)
    }
    async fn approve_comment(&self, comment_id: Uuid) -> Result<(), SqlxError> {
        query(
            r#"
                UPDATE comments SET is_approved = true WHERE id = $1;
            "#,
        ).bind(comment_id).execute(&self.pool).await?;
        Ok(())
    }
    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), SqlxError> {
        // Replies go with it via the parent_comment_id cascade.
        query(
            r#"
                DELETE FROM comments WHERE id = $1;
            "#,
        ).bind(comment_id).execute(&self.pool).await?;
        Ok(())
    }
}
