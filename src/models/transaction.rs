//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity, one immutable audit record
//! - `TransactionType`: deposit, withdraw, or transfer
//! - Request types for the three operations
//! - `TransactionResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of balance mutation a transaction records.
///
/// Maps to the `transaction_type` Postgres enum. The type determines which
/// account references are set:
/// - `Deposit`: destination only
/// - `Withdraw`: source only
/// - `Transfer`: both, and they differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdraw,
    Transfer,
}

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Rows are append-only: once a balance
/// mutation commits, its audit record exists forever and is never edited.
/// A CHECK constraint ties the type to its account references.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Unique identifier for this transaction
    pub id: Uuid,

    /// What kind of mutation this records
    pub transaction_type: TransactionType,

    /// Source account (withdrawals and transfers; NULL for deposits)
    pub from_account_id: Option<Uuid>,

    /// Destination account (deposits and transfers; NULL for withdrawals)
    pub to_account_id: Option<Uuid>,

    /// Amount in cents, always positive
    pub amount_cents: i64,

    /// Human-readable description
    ///
    /// Defaulted per operation ("Deposit", "Withdrawal", "Transfer") when
    /// the request omits one, so it is never empty.
    pub description: String,

    /// When the transaction was created (set by the database)
    pub created_at: DateTime<Utc>,
}

/// Request to deposit money into an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount_cents": 100000,
///   "description": "Initial deposit"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    /// Account to credit
    pub account_id: Uuid,

    /// Amount to add in cents (must be positive)
    pub amount_cents: i64,

    /// Optional description, defaults to "Deposit"
    pub description: Option<String>,
}

/// Request to withdraw money from an account.
///
/// # Validation
///
/// - Amount must be positive
/// - Account must have sufficient balance
#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    /// Account to debit
    pub account_id: Uuid,

    /// Amount to remove in cents (must be positive)
    pub amount_cents: i64,

    /// Optional description, defaults to "Withdrawal"
    pub description: Option<String>,
}

/// Request to transfer money between two accounts.
///
/// # Atomicity
///
/// Both balances move in one database transaction; either both updates and
/// the audit record commit, or none do.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    /// Account to transfer from (will decrease)
    pub from_account_id: Uuid,

    /// Account to transfer to (will increase)
    pub to_account_id: Uuid,

    /// Amount to transfer in cents (must be positive)
    pub amount_cents: i64,

    /// Optional description, defaults to "Transfer"
    pub description: Option<String>,
}

/// Response returned for transaction operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "transaction_type": "transfer",
///   "from_account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "to_account_id": "660e8400-e29b-41d4-a716-446655440001",
///   "amount_cents": 25000,
///   "description": "Rent",
///   "created_at": "2026-01-05T16:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub transaction_type: TransactionType,
    pub from_account_id: Option<Uuid>,
    pub to_account_id: Option<Uuid>,
    pub amount_cents: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            transaction_type: transaction.transaction_type,
            from_account_id: transaction.from_account_id,
            to_account_id: transaction.to_account_id,
            amount_cents: transaction.amount_cents,
            description: transaction.description,
            created_at: transaction.created_at,
        }
    }
}
