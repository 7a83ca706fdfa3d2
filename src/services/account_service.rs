//! Account service - account creation and lookup.
//!
//! Creation assigns a system-generated account number: a bounded retry
//! loop draws random candidates and probes the store for uniqueness.
//! The UNIQUE constraint on `account_number` backstops the remaining
//! race window between probe and insert.

use crate::{
    db::DbPool,
    error::AppError,
    models::account::Account,
};
use uuid::Uuid;

/// Attempts before giving up on finding an unused account number.
const ACCOUNT_NUMBER_ATTEMPTS: u32 = 5;

/// Create an account for an existing user.
///
/// The opening balance defaults to 0 and must not be negative; status
/// defaults to active.
///
/// # Errors
///
/// - `NotFound`: owning user doesn't exist
/// - `InvalidRequest`: negative initial balance
/// - `AccountNumberExhausted`: no unused account number found
pub async fn create_account(
    pool: &DbPool,
    user_id: Uuid,
    initial_balance_cents: Option<i64>,
) -> Result<Account, AppError> {
    let balance_cents = initial_balance_cents.unwrap_or(0);
    if balance_cents < 0 {
        return Err(AppError::InvalidRequest(
            "Initial balance cannot be negative".to_string(),
        ));
    }

    let user_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    if !user_exists {
        return Err(AppError::NotFound("User not found"));
    }

    let account_number = generate_account_number(pool).await?;

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (user_id, account_number, balance_cents)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&account_number)
    .bind(balance_cents)
    .fetch_one(pool)
    .await?;

    tracing::info!(account_id = %account.id, %account_number, "account created");
    Ok(account)
}

/// Get an account by id.
pub async fn get_account(pool: &DbPool, account_id: Uuid) -> Result<Account, AppError> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
        .bind(account_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Account not found"))
}

/// List a user's accounts, newest first.
///
/// Unknown users simply yield an empty list.
pub async fn accounts_for_user(pool: &DbPool, user_id: Uuid) -> Result<Vec<Account>, AppError> {
    let accounts = sqlx::query_as::<_, Account>(
        "SELECT * FROM accounts WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(accounts)
}

/// Find an unused account number, bounded retry.
async fn generate_account_number(pool: &DbPool) -> Result<String, AppError> {
    for _ in 0..ACCOUNT_NUMBER_ATTEMPTS {
        let candidate = account_number_candidate();

        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE account_number = $1)")
                .bind(&candidate)
                .fetch_one(pool)
                .await?;

        if !taken {
            return Ok(candidate);
        }
        tracing::warn!(%candidate, "account number collision, retrying");
    }

    Err(AppError::AccountNumberExhausted)
}

/// One random candidate: `ACCT-` plus 12 uppercase hex chars (48 bits).
fn account_number_candidate() -> String {
    let bytes: [u8; 6] = rand::random();
    format!("ACCT-{}", hex::encode_upper(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_format() {
        let number = account_number_candidate();
        assert_eq!(number.len(), 17);
        let suffix = number.strip_prefix("ACCT-").expect("prefix");
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn candidates_are_random() {
        let a = account_number_candidate();
        let b = account_number_candidate();
        assert_ne!(a, b);
    }
}
