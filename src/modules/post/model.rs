use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query_as, Error as SqlxError, FromRow, Type};
use uuid::Uuid;
use crate::{db::DBClient, modules::post::dto::NewPost};

#[derive(Serialize, Deserialize, Type, Clone, Copy, PartialEq, Debug)]
#[sqlx(type_name = "post_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn get_value(&self) -> &str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
    pub fn from_str(str: &str) -> Option<Self> {
        match str {
            "draft" => Some(PostStatus::Draft),
            "published" => Some(PostStatus::Published),
            "archived" => Some(PostStatus::Archived),
            _ => None,
        }
    }
}

#[derive(Serialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut previous_dash = true;
    for character in title.chars() {
        if character.is_ascii_alphanumeric() {
            slug.push(character.to_ascii_lowercase());
            previous_dash = false;
        } else if !previous_dash {
            slug.push('-');
            previous_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[async_trait]
pub trait PostRepository {
    async fn save_post(&self, data: NewPost) -> Result<Post, SqlxError>;
    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, SqlxError>;
    async fn get_published_post_by_slug(&self, slug: &str) -> Result<Option<Post>, SqlxError>;
}

#[async_trait]
impl PostRepository for DBClient {
    async fn save_post(&self, data: NewPost) -> Result<Post, SqlxError> {
        let new_post = query_as::<_, Post>(
            r#"
                INSERT INTO posts (author_id, title, slug, content, status)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, author_id, title, slug, content, status, created_at, updated_at;
            "#,
        )
            .bind(data.author_id)
            .bind(data.title)
            .bind(data.slug)
            .bind(data.content)
            .bind(data.status)
            .fetch_one(&self.pool).await?;
        Ok(new_post)
    }
    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>, SqlxError> {
        let post = query_as::<_, Post>(
            r#"
                SELECT * FROM posts WHERE slug = $1;
            "#,
        ).bind(slug).fetch_optional(&self.pool).await?;
        Ok(post)
    }
    async fn get_published_post_by_slug(&self, slug: &str) -> Result<Option<Post>, SqlxError> {
        let post = query_as::<_, Post>(
            r#"
                SELECT * FROM posts WHERE slug = $1 AND status = 'published';
            "#,
        ).bind(slug).fetch_optional(&self.pool).await?;
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_dashes() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Rust, Axum & Postgres!  "), "rust-axum-postgres");
    }

    #[test]
    fn slugify_collapses_repeated_separators() {
        assert_eq!(slugify("one --- two"), "one-two");
        assert_eq!(slugify("trailing!!!"), "trailing");
    }

    #[test]
    fn post_status_round_trips() {
        for status in [PostStatus::Draft, PostStatus::Published, PostStatus::Archived] {
            assert_eq!(PostStatus::from_str(status.get_value()), Some(status));
        }
        assert_eq!(PostStatus::from_str("deleted"), None);
    }
}
