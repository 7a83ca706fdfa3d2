//! User HTTP handlers.
//!
//! - POST /api/v1/users/register - Register a new user
//! - POST /api/v1/users/login - Authenticate by email and password
//! - GET /api/v1/users - List all users
//! - DELETE /api/v1/users/:id - Delete a user

use crate::{
    db::DbPool,
    error::AppError,
    extract::AppJson,
    models::user::{LoginRequest, RegisterRequest, UserResponse},
    services::user_service,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

/// Register a new user.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "password": "correct horse"
/// }
/// ```
///
/// # Responses
///
/// - **200**: the created user (without password hash)
/// - **400**: blank name, email, or password
/// - **409**: email already registered
pub async fn register(
    State(pool): State<DbPool>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = user_service::register(&pool, &request.name, &request.email, &request.password)
        .await?;

    Ok(Json(user.into()))
}

/// Log a user in.
///
/// Returns the bare user on success. Session handling is out of scope;
/// the caller decides what to do with the identity.
///
/// # Responses
///
/// - **200**: the authenticated user
/// - **400**: blank email or password
/// - **401**: unknown email or wrong password (identical message)
pub async fn login(
    State(pool): State<DbPool>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = user_service::login(&pool, &request.email, &request.password).await?;

    Ok(Json(user.into()))
}

/// List all registered users.
pub async fn list_users(State(pool): State<DbPool>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = user_service::all_users(&pool).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Delete a user permanently.
///
/// # Responses
///
/// - **204**: deleted
/// - **404**: user doesn't exist
/// - **409**: user still owns accounts
pub async fn delete_user(
    State(pool): State<DbPool>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    user_service::delete_user(&pool, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
