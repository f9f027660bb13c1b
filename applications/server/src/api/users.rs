/// Users API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use roster_core::{NewUser, User, UserId};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of `POST /api/users`
///
/// Only `name` and `email` are read; `uuid` and `createdAt` in the body are
/// ignored because the server assigns both.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// GET /api/users/:uuid
/// Get a user by id, `null` when no such user exists
#[utoipa::path(
    get,
    path = "/api/users/{uuid}",
    tag = "users",
    params(("uuid" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user, or null when the id is unknown", body = User),
        (status = 400, description = "Malformed user id"),
    )
)]
pub async fn get_user(
    Path(uuid): Path<Uuid>,
    State(app_state): State<AppState>,
) -> Result<Json<Option<User>>> {
    let user = app_state.users.find_by_id(&UserId::from(uuid)).await?;
    Ok(Json(user))
}

/// POST /api/users
/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses((status = 201, description = "Created user with assigned id and timestamp", body = User))
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = app_state
        .users
        .create_user(NewUser::new(req.name, req.email))
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api
/// List all users
#[utoipa::path(
    get,
    path = "/api",
    tag = "users",
    responses((status = 200, description = "Every stored user", body = [User]))
)]
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.find_all().await?;
    Ok(Json(users))
}

/// DELETE /api/:id
/// Delete a user; succeeds whether or not the user existed
#[utoipa::path(
    delete,
    path = "/api/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 204, description = "User removed, or never existed"),
        (status = 400, description = "Malformed user id"),
    )
)]
pub async fn delete_user(
    Path(id): Path<Uuid>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    app_state.users.delete(&UserId::from(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
