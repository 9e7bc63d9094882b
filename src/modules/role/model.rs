use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{query_scalar, Error as SqlxError, Type};
use uuid::Uuid;
use crate::db::DBClient;

#[derive(Serialize, Type, Deserialize, Clone, Copy)]
#[sqlx(type_name = "role_type", rename_all = "lowercase")]
pub enum RoleType {
    Admin,
    Author,
    Reader,
}

impl RoleType {
    pub fn get_value(&self) -> &str {
        match self {
            RoleType::Admin => "admin",
            RoleType::Author => "author",
            RoleType::Reader => "reader",
        }
    }
}

#[async_trait]
pub trait RoleRepository {
    async fn get_role_id_by_name(&self, name: RoleType) -> Result<Option<Uuid>, SqlxError>;
    async fn get_role_name_by_id(&self, role_id: Uuid) -> Result<Option<RoleType>, SqlxError>;
}

#[async_trait]
impl RoleRepository for DBClient {
    async fn get_role_id_by_name(&self, name: RoleType) -> Result<Option<Uuid>, SqlxError> {
        let role_id = query_scalar::<_, Uuid>(
            r#"
                SELECT id FROM roles WHERE name = $1;
            "#,
        ).bind(name).fetch_optional(&self.pool).await?;
        Ok(role_id)
    }
    async fn get_role_name_by_id(&self, role_id: Uuid) -> Result<Option<RoleType>, SqlxError> {
        let role_name = query_scalar::<_, RoleType>(
            r#"
                SELECT name FROM roles WHERE id = $1;
            "#,
        ).bind(role_id).fetch_optional(&self.pool).await?;
        Ok(role_name)
    }
}
