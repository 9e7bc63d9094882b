use async_trait::async_trait;
use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use sqlx::{query_as, query_scalar, Error as SqlxError, FromRow, Type};
use uuid::Uuid;
use crate::{
    db::DBClient,
    modules::role::model::RoleType,
};

#[derive(Debug, Deserialize, Serialize, FromRow, Type, Clone)]
pub struct User {
    pub id: Uuid,
    pub role_id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

pub struct NewUser<'a> {
    pub role_id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password: String,
}

#[async_trait]
pub trait UserRepository {
    async fn get_user_by_id(&self, user_id: &Uuid) -> Result<Option<User>, SqlxError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, SqlxError>;
    async fn save_user<'a>(&self, user_data: NewUser<'a>) -> Result<(User, RoleType), SqlxError>;
}

#[async_trait]
impl UserRepository for DBClient {
    async fn get_user_by_id(&self, user_id: &Uuid) -> Result<Option<User>, SqlxError> {
        let user = query_as::<_, User>(
            r#"
                SELECT * FROM users WHERE id = $1;
            "#,
        ).bind(user_id).fetch_optional(&self.pool).await?;
        Ok(user)
    }
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, SqlxError> {
        let user = query_as::<_, User>(
            r#"
                SELECT * from users WHERE email = $1;
            "#,
        ).bind(email).fetch_optional(&self.pool).await?;
        Ok(user)
    }
    async fn save_user<'a>(&self, user_data: NewUser<'a>) -> Result<(User, RoleType), SqlxError> {
        let mut transaction = self.pool.begin().await?;
        let user = query_as::<_, User>(
            r#"
                INSERT INTO users (role_id, name, email, password)
                VALUES ($1, $2, $3, $4)
                RETURNING id, role_id, name, email, password, avatar, created_at, updated_at;
            "#,
        )
            .bind(user_data.role_id)
            .bind(user_data.name)
            .bind(user_data.email)
            .bind(user_data.password)
            .fetch_one(&mut *transaction).await?;
        let role_type = query_scalar::<_, RoleType>(
            r#"
                SELECT name FROM roles WHERE id = $1;
            "#,
        ).bind(user.role_id).fetch_optional(&mut *transaction).await?;
        match role_type {
            Some(role_name) => {
                transaction.commit().await?;
                Ok((user, role_name))
            }
            None => {
                transaction.rollback().await?;
                Err(SqlxError::RowNotFound)
            }
        }
    }
}
