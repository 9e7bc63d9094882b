use std::sync::Arc;
use axum::{
    Extension,
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::post
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use sqlx::Error as SqlxError;
use validator::Validate;
use crate::{
    AppState,
    dto::{HttpResult, SuccessResponse},
    error::{ErrorMessage, ErrorPayload, FieldError, HttpError, JsonParser},
    modules::{
        auth::dto::{SignInRequest, SignUpRequest},
        role::model::{RoleRepository, RoleType},
        user::{
            dto::UserResponse,
            model::{NewUser, User, UserRepository}
        },
    },
    utils::{jwt, password}
};

pub fn auth_router() -> Router {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
}
async fn user_by_email(email: &str, app_state: Arc<AppState>) -> Result<Option<User>, HttpError<ErrorPayload>> {
    let user = app_state.db_client
        .get_user_by_email(email).await
        .map_err(|e| HttpError::server_error(e.to_string(), None))?;
    Ok(user)
}

async fn sign_up(
    Extension(app_state): Extension<Arc<AppState>>,
    JsonParser(body): JsonParser<SignUpRequest>
) -> HttpResult<impl IntoResponse> {
    body.validate().map_err(FieldError::populate_errors)?;
    let user = user_by_email(&body.email, app_state.clone()).await?;
    if user.is_some() {
        return Err(HttpError::unique_constraint_violation(
            ErrorMessage::EmailExist.to_string(), None
        ));
    }
    let hash_password = password::hash(&body.password)
        .map_err(|e| HttpError::server_error(e.to_string(), None))?;
    let role_id = app_state.db_client.get_role_id_by_name(RoleType::Reader).await
        .map_err(|_| HttpError::server_error(ErrorMessage::ServerError.to_string(), None))?
        .ok_or(HttpError::server_error(ErrorMessage::ServerError.to_string(), None))?;
    let user_data = NewUser {
        role_id,
        name: &body.name,
        email: &body.email,
        password: hash_password,
    };
    let result = app_state.db_client.save_user(user_data).await;
    match result {
        Err(SqlxError::Database(db_err)) => {
            tracing::error!("sign_up insert failed: {}", db_err);
            Err(HttpError::server_error(ErrorMessage::ServerError.to_string(), None))
        }
        Err(_) => Err(HttpError::server_error(ErrorMessage::ServerError.to_string(), None)),
        Ok((user, role_type)) => {
            let user_response = UserResponse::get_user_response(&user, role_type.get_value().to_string());
            Ok((
                StatusCode::CREATED,
                SuccessResponse::new("Registration is successful! You can now sign in.", Some(user_response))
            ))
        }
    }
}

async fn sign_in(
    Extension(app_state): Extension<Arc<AppState>>,
    cookie_jar: CookieJar,
    JsonParser(body): JsonParser<SignInRequest>
) -> HttpResult<impl IntoResponse> {
    body.validate().map_err(FieldError::populate_errors)?;
    let user = user_by_email(&body.email, app_state.clone()).await?
        .ok_or(HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string(), None))?;
    let password_matches = password::compare(&body.password, &user.password)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string(), None))?;
    if !password_matches {
        return Err(HttpError::unauthorized(ErrorMessage::WrongCredentials.to_string(), None));
    }
    let role_type = app_state.db_client.get_role_name_by_id(user.role_id).await
        .map_err(|_| HttpError::server_error(ErrorMessage::ServerError.to_string(), None))?
        .ok_or(HttpError::server_error(ErrorMessage::ServerError.to_string(), None))?;
    let token = jwt::create_token(
        &user.id.to_string(),
        app_state.env.jwt_secret.as_bytes(),
        app_state.env.jwt_max_age,
    ).map_err(|_| HttpError::server_error(ErrorMessage::ServerError.to_string(), None))?;
    let cookie = Cookie::build(("token", token))
        .path("/")
        .max_age(time::Duration::minutes(app_state.env.jwt_max_age))
        .http_only(true)
        .build();
    let user_response = UserResponse::get_user_response(&user, role_type.get_value().to_string());
    Ok((
        cookie_jar.add(cookie),
        SuccessResponse::new("Signed in successfully.", Some(user_response))
    ))
}
