//! User CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::doc::USER_TAG;
use crate::api::dto::{CreateUserRequest, ErrorResponse, UpdateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

const ID_MISMATCH_MESSAGE: &str =
    "The User ID in the request body must match that of the User being updated";

/// Creates user-related routes.
///
/// Routes:
/// - GET /              - List all users ordered by name
/// - POST /             - Create a new user
/// - GET /{id}          - Get user by ID
/// - PUT /{id}          - Update user by ID
/// - DELETE /{id}       - Delete user by ID (cascades to their reviews)
/// - GET /email/{email} - Get user by email
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/email/{email}", get(get_user_by_email))
}

/// GET /users - List all users ordered by name.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All stored users", body = [UserResponse])
    ),
    tag = USER_TAG
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.services.users.list_users().await?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

/// GET /users/{id} - Get user by ID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User with id not found", body = ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.services.users.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /users/email/{email} - Get user by email address.
#[utoipa::path(
    get,
    path = "/users/email/{email}",
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User with email not found", body = ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.services.users.get_user_by_email(&email).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /users - Create a new user.
///
/// Any client-supplied id is ignored. Returns 201 with the created user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Invalid user supplied in request body", body = ErrorResponse),
        (status = 409, description = "User conflicts with an existing user", body = ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .services
        .users
        .create_user(payload.into_draft())
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /users/{id} - Update an existing user.
///
/// The body must carry the target's id; a mismatch with the path id is a
/// conflict and nothing is persisted.
#[utoipa::path(
    put,
    path = "/users/{id}",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Invalid user supplied in request body", body = ErrorResponse),
        (status = 404, description = "User with id not found", body = ErrorResponse),
        (status = 409, description = "User conflicts with another user", body = ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let body_id = payload
        .id
        .ok_or_else(|| AppError::bad_request("Invalid User supplied in request body"))?;

    if body_id != id {
        return Err(AppError::IdConflict {
            message: ID_MISMATCH_MESSAGE.to_string(),
        });
    }

    let user = state
        .services
        .users
        .update_user(id, payload.into_draft())
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{id} - Delete a user and all of their reviews.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    responses(
        (status = 204, description = "The user has been successfully deleted"),
        (status = 404, description = "User with id not found", body = ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.services.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
