use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use crate::modules::user::model::User;

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn get_user_response(user: &User, role: String) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.to_owned(),
            email: user.email.to_owned(),
            role,
            avatar: normalize_avatar(user.avatar.as_deref()),
            created_at: user.created_at.unwrap_or_else(Utc::now),
            updated_at: user.updated_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Author fields safe to expose on public comment listings.
#[derive(Serialize, Clone)]
pub struct PublicAuthor {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl PublicAuthor {
    pub fn new(id: Uuid, name: String, avatar: Option<String>) -> Self {
        Self {
            id,
            name,
            avatar: normalize_avatar(avatar.as_deref()),
        }
    }
}

// A blank avatar column means the user never uploaded one.
fn normalize_avatar(avatar: Option<&str>) -> Option<String> {
    avatar
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_avatar_is_dropped_from_public_author() {
        let author = PublicAuthor::new(Uuid::new_v4(), "Reader".to_string(), Some("   ".to_string()));
        assert!(author.avatar.is_none());
        let author = PublicAuthor::new(Uuid::new_v4(), "Reader".to_string(), None);
        assert!(author.avatar.is_none());
    }

    #[test]
    fn missing_timestamps_do_not_panic() {
        let user = User {
            id: Uuid::new_v4(),
            role_id: Uuid::new_v4(),
            name: "Reader".to_string(),
            email: "reader@example.com".to_string(),
            password: "hashed".to_string(),
            avatar: None,
            created_at: None,
            updated_at: None,
        };
        let response = UserResponse::get_user_response(&user, "reader".to_string());
        assert_eq!(response.name, "Reader");
        assert!(response.created_at <= Utc::now());
    }

    #[test]
    fn real_avatar_is_kept() {
        let author = PublicAuthor::new(
            Uuid::new_v4(),
            "Reader".to_string(),
            Some("https://cdn.example.com/a.png".to_string()),
        );
        assert_eq!(author.avatar.as_deref(), Some("https://cdn.example.com/a.png"));
    }
}
