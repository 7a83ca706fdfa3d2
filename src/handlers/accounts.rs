//! Account HTTP handlers.
//!
//! - POST /api/v1/accounts - Create a new account
//! - GET /api/v1/accounts/:id - Get account by id
//! - GET /api/v1/accounts/user/:user_id - List a user's accounts

use crate::{
    db::DbPool,
    error::AppError,
    extract::AppJson,
    models::account::{AccountResponse, CreateAccountRequest},
    services::account_service,
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// Create a new account for an existing user.
///
/// # Request Body
///
/// ```json
/// {
///   "user_id": "550e8400-e29b-41d4-a716-446655440000",
///   "initial_balance_cents": 10000
/// }
/// ```
///
/// # Responses
///
/// - **200**: the created account, with its generated account number
/// - **400**: negative initial balance
/// - **404**: owning user doesn't exist
pub async fn create_account(
    State(pool): State<DbPool>,
    AppJson(request): AppJson<CreateAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let account =
        account_service::create_account(&pool, request.user_id, request.initial_balance_cents)
            .await?;

    Ok(Json(account.into()))
}

/// Get a specific account by id.
///
/// # Responses
///
/// - **200**: the account
/// - **404**: account doesn't exist
pub async fn get_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = account_service::get_account(&pool, account_id).await?;

    Ok(Json(account.into()))
}

/// List all accounts owned by a user, newest first.
///
/// Unknown users yield an empty list rather than a 404.
pub async fn list_accounts_for_user(
    State(pool): State<DbPool>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = account_service::accounts_for_user(&pool, user_id).await?;

    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}
