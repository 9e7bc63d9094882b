use std::sync::Arc;
use axum::{
    middleware,
    Router,
    routing::{get, patch, post},
    Extension,
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;
use crate::{
    AppState,
    dto::{HttpResult, SuccessResponse},
    error::{ErrorMessage, ErrorPayload, FieldError, HttpError, JsonParser, PathParser},
    middleware::{
        auth::auth_token,
        AuthenticatedUser,
        permission::{check_permission, Permission}
    },
    modules::{
        comment::{
            dto::{
                CommentRequest, CommentResponse, CommentsData, ModerateRequest, ModerationAction,
                NewComment, PendingCommentResponse, PendingCommentsData
            },
            model::{Comment, CommentRepository},
            moderation::decide_moderation,
            thread::build_thread,
        },
        post::model::PostRepository,
        user::dto::PublicAuthor,
    },
};

pub fn comment_router() -> Router {
    Router::new()
        .route("/{slug}/comments", get(comment_list_by_post))
        .route("/{slug}/comments", post(comment_create)
            .layer(middleware::from_fn(|state, req, next| {
                check_permission(state, req, next, Permission::CommentCreate.to_string())
            }))
            .layer(middleware::from_fn(auth_token)))
}

pub fn dashboard_router() -> Router {
    Router::new()
        .route("/pending-comments", get(pending_comments).layer(middleware::from_fn(|state, req, next| {
            check_permission(state, req, next, Permission::CommentModerate.to_string())
        })))
        .route("/comments/{comment_id}", patch(moderate_comment).layer(middleware::from_fn(|state, req, next| {
            check_permission(state, req, next, Permission::CommentModerate.to_string())
        })))
}

async fn comment_list_by_post(
    Extension(app_state): Extension<Arc<AppState>>,
    PathParser(slug): PathParser<String>
) -> HttpResult<impl IntoResponse> {
    let post = app_state.db_client.get_published_post_by_slug(&slug).await
        .map_err(|e| {
            tracing::error!("post lookup failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?
        .ok_or(HttpError::not_found(ErrorMessage::PostNotFound.to_string(), None))?;
    let top_level = app_state.db_client.get_top_level_comments(post.id).await
        .map_err(|e| {
            tracing::error!("top-level comment query failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?;
    let replies = app_state.db_client.get_comment_replies(post.id).await
        .map_err(|e| {
            tracing::error!("reply query failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?;
    let comments = build_thread(top_level, replies);
    Ok(SuccessResponse::new("Comments by post.", Some(CommentsData { comments })))
}

// Threads are two levels deep. Replying to a reply is rejected here rather
// than relied on never being sent by the rendering layer.
fn ensure_parent_is_top_level(parent: &Comment) -> Result<(), HttpError<ErrorPayload>> {
    if parent.parent_comment_id.is_some() {
        return Err(HttpError::bad_request(ErrorMessage::ReplyDepthExceeded.to_string(), None));
    }
    Ok(())
}

async fn comment_create(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user_auth): Extension<AuthenticatedUser>,
    PathParser(slug): PathParser<String>,
    JsonParser(body): JsonParser<CommentRequest>
) -> HttpResult<impl IntoResponse> {
    body.validate().map_err(FieldError::populate_errors)?;
    let post = app_state.db_client.get_published_post_by_slug(&slug).await
        .map_err(|e| {
            tracing::error!("post lookup failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?
        .ok_or(HttpError::not_found(ErrorMessage::PostNotFound.to_string(), None))?;
    if let Some(parent_comment_id) = body.parent_comment_id {
        let parent = app_state.db_client.get_approved_parent(post.id, parent_comment_id).await
            .map_err(|e| {
                tracing::error!("parent comment lookup failed: {}", e);
                HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
            })?
            .ok_or(HttpError::not_found(ErrorMessage::ParentCommentNotFound.to_string(), None))?;
        ensure_parent_is_top_level(&parent)?;
    }
    let new_comment = NewComment {
        author_id: user_auth.user.id,
        post_id: post.id,
        parent_comment_id: body.parent_comment_id,
        content: body.content.trim().to_string(),
    };
    let comment = app_state.db_client.save_comment(new_comment).await
        .map_err(|e| {
            tracing::error!("save_comment failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?;
    let response = CommentResponse {
        id: comment.id,
        content: comment.content,
        author: PublicAuthor::new(
            user_auth.user.id,
            user_auth.user.name.clone(),
            user_auth.user.avatar.clone(),
        ),
        created_at: comment.created_at,
    };
    Ok((
        StatusCode::CREATED,
        SuccessResponse::new("Comment posted successfully. It will appear once approved.", Some(response))
    ))
}

async fn pending_comments(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user_auth): Extension<AuthenticatedUser>
) -> HttpResult<impl IntoResponse> {
    let pending = app_state.db_client.get_pending_comments_for_author(user_auth.user.id).await
        .map_err(|e| {
            tracing::error!("pending comment query failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?;
    let comments: Vec<PendingCommentResponse> = pending.into_iter().map(Into::into).collect();
    let count = comments.len();
    Ok(SuccessResponse::new("Pending comments.", Some(PendingCommentsData { comments, count })))
}

async fn moderate_comment(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(user_auth): Extension<AuthenticatedUser>,
    PathParser(comment_id): PathParser<Uuid>,
    JsonParser(body): JsonParser<ModerateRequest>
) -> HttpResult<impl IntoResponse> {
    let comment = app_state.db_client.get_comment_for_moderation(comment_id).await
        .map_err(|e| {
            tracing::error!("comment lookup failed: {}", e);
            HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
        })?
        .ok_or(HttpError::not_found(ErrorMessage::CommentNotFound.to_string(), None))?;
    let action = decide_moderation(user_auth.user.id, &comment, &body.action)?;
    match action {
        ModerationAction::Approve => {
            app_state.db_client.approve_comment(comment.id).await
                .map_err(|e| {
                    tracing::error!("approve_comment failed: {}", e);
                    HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
                })?;
            Ok(SuccessResponse::<()>::new("Comment approved successfully.", None))
        }
        ModerationAction::Reject => {
            app_state.db_client.delete_comment(comment.id).await
                .map_err(|e| {
                    tracing::error!("delete_comment failed: {}", e);
                    HttpError::server_error(ErrorMessage::ServerError.to_string(), None)
                })?;
            Ok(SuccessResponse::<()>::new("Comment rejected and deleted.", None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::Utc;

    fn approved_comment(parent_comment_id: Option<Uuid>) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            post_id: Uuid::new_v4(),
            parent_comment_id,
            content: "content".to_string(),
            is_approved: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn reply_to_a_reply_is_rejected() {
        let reply = approved_comment(Some(Uuid::new_v4()));
        let error = ensure_parent_is_top_level(&reply).unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn reply_to_a_top_level_comment_is_accepted() {
        let top_level = approved_comment(None);
        assert!(ensure_parent_is_top_level(&top_level).is_ok());
    }
}
