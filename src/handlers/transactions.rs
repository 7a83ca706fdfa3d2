//! Transaction HTTP handlers.
//!
//! - POST /api/v1/transactions/deposit - Add money to an account
//! - POST /api/v1/transactions/withdraw - Remove money from an account
//! - POST /api/v1/transactions/transfer - Move money between accounts
//! - GET /api/v1/transactions/account/:account_id - Audit trail for an account

use crate::{
    db::DbPool,
    error::AppError,
    extract::AppJson,
    models::transaction::{
        DepositRequest, TransactionResponse, TransferRequest, WithdrawRequest,
    },
    services::transaction_service,
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// Deposit money into an account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": "550e8400-...",
///   "amount_cents": 100000,
///   "description": "Initial deposit"
/// }
/// ```
///
/// # Responses
///
/// - **200**: the created deposit transaction
/// - **400**: non-positive amount
/// - **404**: account doesn't exist
pub async fn deposit(
    State(pool): State<DbPool>,
    AppJson(request): AppJson<DepositRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = transaction_service::deposit(
        &pool,
        request.account_id,
        request.amount_cents,
        request.description,
    )
    .await?;

    Ok(Json(transaction.into()))
}

/// Withdraw money from an account.
///
/// # Responses
///
/// - **200**: the created withdrawal transaction
/// - **400**: non-positive amount, or insufficient balance
/// - **404**: account doesn't exist
pub async fn withdraw(
    State(pool): State<DbPool>,
    AppJson(request): AppJson<WithdrawRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = transaction_service::withdraw(
        &pool,
        request.account_id,
        request.amount_cents,
        request.description,
    )
    .await?;

    Ok(Json(transaction.into()))
}

/// Transfer money between two accounts.
///
/// Both balances move in a single database transaction.
///
/// # Responses
///
/// - **200**: the created transfer transaction
/// - **400**: non-positive amount, same-account transfer, or insufficient
///   balance in the source account
/// - **404**: source or destination doesn't exist (source checked first)
pub async fn transfer(
    State(pool): State<DbPool>,
    AppJson(request): AppJson<TransferRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = transaction_service::transfer(
        &pool,
        request.from_account_id,
        request.to_account_id,
        request.amount_cents,
        request.description,
    )
    .await?;

    Ok(Json(transaction.into()))
}

/// List the full audit trail for an account.
///
/// Every transaction where the account appears as source or destination,
/// oldest first.
pub async fn list_for_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = transaction_service::transactions_for_account(&pool, account_id).await?;

    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}
