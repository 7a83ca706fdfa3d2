//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing a bank account
//! - `AccountStatus`: Lifecycle state of an account
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an account.
///
/// Maps to the `account_status` Postgres enum. New accounts are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Frozen,
    Closed,
}

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account:
/// - Belongs to one user (via `user_id`)
/// - Carries a system-generated, immutable account number
/// - Has a balance stored in cents
///
/// # Balance Storage
///
/// Balances are stored as `i64` cents to avoid floating-point precision
/// issues: $10.50 is 1050 cents. A database CHECK keeps the balance >= 0,
/// and only the transaction service mutates it.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Foreign key to the owning user
    pub user_id: Uuid,

    /// Human-facing unique account number, e.g. `ACCT-4F2A91C30B7D`
    ///
    /// Distinct from `id`; generated once at creation and never changed.
    pub account_number: String,

    /// Current balance in cents (not dollars)
    pub balance_cents: i64,

    /// Lifecycle status; defaults to active
    pub status: AccountStatus,

    /// Timestamp when account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of last balance update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "user_id": "550e8400-e29b-41d4-a716-446655440000",
///   "initial_balance_cents": 10000
/// }
/// ```
///
/// # Validation
///
/// - `user_id`: Required, must reference an existing user
/// - `initial_balance_cents`: Optional, defaults to 0, must not be negative
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Owner of the new account
    pub user_id: Uuid,

    /// Opening balance in cents (defaults to 0 if not provided)
    pub initial_balance_cents: Option<i64>,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "user_id": "660e8400-e29b-41d4-a716-446655440001",
///   "account_number": "ACCT-4F2A91C30B7D",
///   "balance_cents": 10000,
///   "status": "active",
///   "created_at": "2026-01-05T10:00:00Z",
///   "updated_at": "2026-01-05T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_number: String,
    pub balance_cents: i64,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            user_id: account.user_id,
            account_number: account.account_number,
            balance_cents: account.balance_cents,
            status: account.status,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
