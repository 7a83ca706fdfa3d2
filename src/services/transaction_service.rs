//! Transaction service - Core business logic for balance mutations.
//!
//! This service handles:
//! - Amount and account validation
//! - Atomic balance updates
//! - Writing the audit record alongside the mutation it describes
//!
//! # Atomicity Guarantees
//!
//! Every operation runs inside one PostgreSQL transaction: the balance
//! update(s) and the audit insert commit together or not at all, so a
//! transaction row exists exactly when its balance change happened.
//! Row-level locks serialize concurrent mutations of the same account.

use crate::{db::DbPool, error::AppError, models::transaction::Transaction};
use uuid::Uuid;

/// Deposit money into an account.
///
/// # Process
///
/// 1. Validate the amount
/// 2. Start a database transaction
/// 3. Update the balance (the UPDATE's row lock serializes concurrent
///    mutations; zero rows affected means the account does not exist)
/// 4. Insert the audit record
/// 5. Commit
///
/// # Errors
///
/// - `InvalidRequest`: amount is zero or negative
/// - `NotFound`: account doesn't exist
/// - `Database`: database error occurred
pub async fn deposit(
    pool: &DbPool,
    account_id: Uuid,
    amount_cents: i64,
    description: Option<String>,
) -> Result<Transaction, AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let updated_count = sqlx::query(
        r#"
        UPDATE accounts
        SET balance_cents = balance_cents + $1,
            updated_at = NOW()
        WHERE id = $2
        "#,
    )
    .bind(amount_cents)
    .bind(account_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if updated_count == 0 {
        tx.rollback().await?;
        return Err(AppError::NotFound("Account not found"));
    }

    let transaction = sqlx::query_as::<_, Transaction>(
        r#"
        INSERT INTO transactions (transaction_type, to_account_id, amount_cents, description)
        VALUES ('deposit', $1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(account_id)
    .bind(amount_cents)
    .bind(description.unwrap_or_else(|| "Deposit".to_string()))
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(%account_id, amount_cents, "deposit committed");
    Ok(transaction)
}

/// Withdraw money from an account.
///
/// Locks the account row, checks the balance, then applies the debit and
/// records it. The balance is left untouched when funds are insufficient.
///
/// # Errors
///
/// - `InvalidRequest`: amount is zero or negative
/// - `NotFound`: account doesn't exist
/// - `InsufficientBalance`: balance is lower than the requested amount
pub async fn withdraw(
    pool: &DbPool,
    account_id: Uuid,
    amount_cents: i64,
    description: Option<String>,
) -> Result<Transaction, AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    // Lock the account and read the balance
    let balance_cents: i64 =
        sqlx::query_scalar("SELECT balance_cents FROM accounts WHERE id = $1 FOR UPDATE")
            .bind(account_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound("Account not found"))?;

    if balance_cents < amount_cents {
        tx.rollback().await?;
        return Err(AppError::InsufficientBalance("Insufficient balance"));
    }

    sqlx::query(
        r#"
        UPDATE accounts
        SET balance_cents = balance_cents - $1,
            updated_at = NOW()
        WHERE id = $2
        "#,
    )
    .bind(amount_cents)
    .bind(account_id)
    .execute(&mut *tx)
    .await?;

    let transaction = sqlx::query_as::<_, Transaction>(
        r#"
        INSERT INTO transactions (transaction_type, from_account_id, amount_cents, description)
        VALUES ('withdraw', $1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(account_id)
    .bind(amount_cents)
    .bind(description.unwrap_or_else(|| "Withdrawal".to_string()))
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(%account_id, amount_cents, "withdrawal committed");
    Ok(transaction)
}

/// Transfer money between two accounts.
///
/// # Lock Ordering
///
/// Both rows are locked in a single `SELECT ... ORDER BY id FOR UPDATE`,
/// so two transfers in opposite directions acquire locks in the same
/// global order and cannot deadlock.
///
/// # Errors
///
/// - `InvalidRequest`: amount not positive, or source equals destination
/// - `NotFound`: source checked first, then destination
/// - `InsufficientBalance`: source balance is lower than the amount
pub async fn transfer(
    pool: &DbPool,
    from_account_id: Uuid,
    to_account_id: Uuid,
    amount_cents: i64,
    description: Option<String>,
) -> Result<Transaction, AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }

    if from_account_id == to_account_id {
        return Err(AppError::InvalidRequest(
            "Cannot transfer to the same account".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    // Lock both rows, ordered by id
    let rows: Vec<(Uuid, i64)> = sqlx::query_as(
        r#"
        SELECT id, balance_cents FROM accounts
        WHERE id = ANY($1)
        ORDER BY id
        FOR UPDATE
        "#,
    )
    .bind(vec![from_account_id, to_account_id])
    .fetch_all(&mut *tx)
    .await?;

    let from_balance = rows
        .iter()
        .find(|(id, _)| *id == from_account_id)
        .map(|(_, balance)| *balance)
        .ok_or(AppError::NotFound("Source account not found"))?;

    if !rows.iter().any(|(id, _)| *id == to_account_id) {
        tx.rollback().await?;
        return Err(AppError::NotFound("Destination account not found"));
    }

    if from_balance < amount_cents {
        tx.rollback().await?;
        return Err(AppError::InsufficientBalance(
            "Insufficient balance in source account",
        ));
    }

    sqlx::query(
        "UPDATE accounts SET balance_cents = balance_cents - $1, updated_at = NOW() WHERE id = $2",
    )
    .bind(amount_cents)
    .bind(from_account_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE accounts SET balance_cents = balance_cents + $1, updated_at = NOW() WHERE id = $2",
    )
    .bind(amount_cents)
    .bind(to_account_id)
    .execute(&mut *tx)
    .await?;

    let transaction = sqlx::query_as::<_, Transaction>(
        r#"
        INSERT INTO transactions
            (transaction_type, from_account_id, to_account_id, amount_cents, description)
        VALUES ('transfer', $1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(from_account_id)
    .bind(to_account_id)
    .bind(amount_cents)
    .bind(description.unwrap_or_else(|| "Transfer".to_string()))
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(%from_account_id, %to_account_id, amount_cents, "transfer committed");
    Ok(transaction)
}

/// List every transaction touching an account, as source or destination.
///
/// Oldest first. Accounts with no history yield an empty list.
pub async fn transactions_for_account(
    pool: &DbPool,
    account_id: Uuid,
) -> Result<Vec<Transaction>, AppError> {
    let transactions = sqlx::query_as::<_, Transaction>(
        r#"
        SELECT * FROM transactions
        WHERE from_account_id = $1 OR to_account_id = $1
        ORDER BY created_at
        "#,
    )
    .bind(account_id)
    .fetch_all(pool)
    .await?;

    Ok(transactions)
}
