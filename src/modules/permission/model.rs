use async_trait::async_trait;
use sqlx::{query_scalar, Error as SqlxError};
use uuid::Uuid;
use crate::db::DBClient;

#[async_trait]
pub trait PermissionRepository {
    async fn get_permission_by_role(&self, role_id: &Uuid) -> Result<Vec<String>, SqlxError>;
}

#[async_trait]
impl PermissionRepository for DBClient {
    async fn get_permission_by_role(&self, role_id: &Uuid) -> Result<Vec<String>, SqlxError> {
        let permissions = query_scalar::<_, String>(
            r#"
                SELECT p.name FROM permissions AS p
                JOIN role_permissions AS rp ON rp.permission_id = p.id
                WHERE rp.role_id = $1;
            "#,
        ).bind(role_id).fetch_all(&self.pool).await?;
        Ok(permissions)
    }
}
