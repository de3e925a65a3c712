use crate::Users;
use crate::error::UsersError;
use crate::model::{User, UserId, UserPayload};
use crate::payload::NamePayload;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use roster_derive::api_handler;
use roster_kernel::domain::constants::{USER_DELETED, USERS_TAG};
use roster_kernel::server::{ApiState, ErrorBody, MessageBody};

fn users(state: &ApiState) -> Result<&Users, UsersError> {
    Ok(state.try_get_slice::<Users>()?)
}

#[api_handler(
    get,
    path = "/users",
    responses((status = OK, description = "All users in insertion order", body = [User])),
    tag = USERS_TAG,
)]
pub(crate) async fn list_users(State(state): State<ApiState>) -> Result<Json<Vec<User>>, UsersError> {
    Ok(Json(users(&state)?.registry.list_all()))
}

#[api_handler(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = OK, description = "The requested user", body = User),
        (status = NOT_FOUND, description = "No user has this id", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn get_user(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<User>, UsersError> {
    let id: UserId = id.parse()?;
    Ok(Json(users(&state)?.registry.get_by_id(id)?))
}

#[api_handler(
    post,
    path = "/users",
    request_body(content = UserPayload, description = "Name of the new user", content_type = "application/json"),
    responses(
        (status = CREATED, description = "The created user with its assigned id", body = User),
        (status = BAD_REQUEST, description = "The JSON body is malformed", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "`name` is not a string", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn create_user(
    State(state): State<ApiState>,
    NamePayload(name): NamePayload,
) -> Result<(StatusCode, Json<User>), UsersError> {
    let user = users(&state)?.registry.create(name)?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[api_handler(
    put,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body(content = UserPayload, description = "Replacement name", content_type = "application/json"),
    responses(
        (status = OK, description = "The updated user", body = User),
        (status = NOT_FOUND, description = "No user has this id", body = ErrorBody),
        (status = BAD_REQUEST, description = "The JSON body is malformed", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "`name` is not a string", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn update_user(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    NamePayload(name): NamePayload,
) -> Result<Json<User>, UsersError> {
    let id: UserId = id.parse()?;
    Ok(Json(users(&state)?.registry.update_by_id(id, name)?))
}

#[api_handler(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = OK, description = "The user was removed", body = MessageBody),
        (status = NOT_FOUND, description = "No user has this id", body = ErrorBody),
    ),
    tag = USERS_TAG,
)]
pub(crate) async fn delete_user(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, UsersError> {
    let id: UserId = id.parse()?;
    users(&state)?.registry.delete_by_id(id)?;
    Ok(Json(MessageBody::new(USER_DELETED)))
}
