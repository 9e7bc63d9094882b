use std::sync::Arc;
use axum::{middleware, Router, routing::{get, post}, Extension, http::StatusCode, response::IntoResponse};
use validator::Validate;
use crate::{
    AppState,
    dto::{HttpResult, SuccessResponse},
    error::{ErrorMessage, FieldError, HttpError, JsonParser, PathParser},
    middleware::{auth::auth_token, AuthenticatedUser, permission::{check_permission, Permission}},
    modules::post::{
        dto::{NewPost, PostRequest},
        model::{slugify, PostRepository, PostStatus}
    }
};

pub fn post_router() -> Router {
    Router::new()
        .route("/", post(post_create)
            .layer(middleware::from_fn(|state, req, next| {
                check_permission(state, req, next, Permission::PostCreate.to_string())
            }))
            .layer(middleware::from_fn(auth_token)))
        .route("/{slug}", get(post_detail))
}

async fn post_create(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user_auth): Extension<AuthenticatedUser>,
    JsonParser(body): JsonParser<PostRequest>
) -> HttpResult<impl IntoResponse> {
    body.validate().map_err(FieldError::populate_errors)?;
    let status = match body.status.as_deref() {
        None => PostStatus::Draft,
        Some(value) => PostStatus::from_str(value)
            .ok_or(HttpError::bad_request(format!("Invalid status: {}", value), None))?,
    };
    let slug = slugify(&body.title);
    if slug.is_empty() {
        return Err(HttpError::bad_request("Title must contain at least one alphanumeric character.".to_string(), None));
    }
    let existing = app_state.db_client.get_post_by_slug(&slug).await
        .map_err(|e| {
            tracing::error!("slug lookup failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?;
    if existing.is_some() {
        return Err(HttpError::unique_constraint_violation(ErrorMessage::SlugExist.to_string(), None));
    }
    let new_post = NewPost {
        author_id: user_auth.user.id,
        title: body.title,
        slug,
        content: body.content,
        status,
    };
    let data = app_state.db_client.save_post(new_post).await
        .map_err(|e| {
            tracing::error!("save_post failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?;
    Ok((
        StatusCode::CREATED,
        SuccessResponse::new("Successfully created a new post.", Some(data))
    ))
}

async fn post_detail(
    Extension(app_state): Extension<Arc<AppState>>,
    PathParser(slug): PathParser<String>
) -> HttpResult<impl IntoResponse> {
    let post = app_state.db_client.get_published_post_by_slug(&slug).await
        .map_err(|e| {
            tracing::error!("post lookup failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?
        .ok_or(HttpError::not_found(ErrorMessage::PostNotFound.to_string(), None))?;
    Ok(SuccessResponse::new("Post detail.", Some(post)))
}
