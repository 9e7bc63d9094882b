use std::sync::Arc;
use axum::{
    extract::Request,
    middleware::Next,
    response::IntoResponse,
    Extension
};
use crate::{
    error::{ErrorMessage, HttpError},
    middleware::AuthenticatedUser,
    modules::permission::model::PermissionRepository,
    AppState
};

pub enum Permission {
    PostCreate,
    CommentCreate,
    CommentModerate,
}

impl Permission {
    pub fn to_string(&self) -> String {
        match self {
            Permission::PostCreate => "post:create".to_string(),
            Permission::CommentCreate => "comment:create".to_string(),
            Permission::CommentModerate => "comment:moderate".to_string(),
        }
    }
    pub fn from_str(str: &str) -> Option<Self> {
        match str {
            "post:create" => Some(Permission::PostCreate),
            "comment:create" => Some(Permission::CommentCreate),
            "comment:moderate" => Some(Permission::CommentModerate),
            _ => None,
        }
    }
}

pub async fn check_permission(
    Extension(app_state): Extension<Arc<AppState>>,
    req: Request,
    next: Next,
    permission: String,
) -> Result<impl IntoResponse, HttpError<()>> {
    let authenticated_user = req
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| {
            HttpError::unauthorized(ErrorMessage::UserNotAuthenticated.to_string(), None)
        })?;
    let role_id = authenticated_user.user.role_id;
    let permission_by_role = app_state.db_client.get_permission_by_role(&role_id).await
        .map_err(|_| HttpError::server_error(ErrorMessage::ServerError.to_string(), None))?;
    if !permission_by_role.contains(&permission) {
        return Err(HttpError::forbidden(ErrorMessage::PermissionDenied.to_string(), None));
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::Permission;

    #[test]
    fn permission_round_trips_through_string() {
        for name in ["post:create", "comment:create", "comment:moderate"] {
            let permission = Permission::from_str(name).unwrap();
            assert_eq!(permission.to_string(), name);
        }
    }

    #[test]
    fn unknown_permission_is_rejected() {
        assert!(Permission::from_str("comment:delete").is_none());
        assert!(Permission::from_str("").is_none());
    }
}
