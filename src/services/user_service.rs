//! User service - registration, login, listing, deletion.
//!
//! Emails are normalized (trimmed, lowercased) before every lookup and
//! before storage, which makes the `users.email` UNIQUE constraint behave
//! case-insensitively. Login reports one identical message for unknown
//! email and wrong password.

use crate::{db::DbPool, error::AppError, models::user::User, password};
use uuid::Uuid;

/// Register a new user.
///
/// # Errors
///
/// - `InvalidRequest`: name, email, or password blank after trimming
/// - `Conflict`: email already registered (any casing)
pub async fn register(
    pool: &DbPool,
    name: &str,
    email: &str,
    raw_password: &str,
) -> Result<User, AppError> {
    let name = name.trim();
    let email = normalize_email(email);
    if name.is_empty() || email.is_empty() || raw_password.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Name, email, and password are required".to_string(),
        ));
    }

    let email_taken: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(&email)
            .fetch_one(pool)
            .await?;

    if email_taken {
        return Err(AppError::Conflict("Email already registered"));
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(&email)
    .bind(password::hash_password(raw_password))
    .fetch_one(pool)
    .await?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(user)
}

/// Authenticate a user by email and password.
///
/// Returns the bare user on success; sessions/tokens are the integrating
/// system's concern.
///
/// # Errors
///
/// - `InvalidRequest`: email or password blank
/// - `InvalidCredentials`: unknown email or wrong password, with the same
///   message either way
pub async fn login(pool: &DbPool, email: &str, raw_password: &str) -> Result<User, AppError> {
    let email = normalize_email(email);
    if email.is_empty() || raw_password.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Email and password are required".to_string(),
        ));
    }

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !password::verify_password(raw_password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    Ok(user)
}

/// List every registered user. No pagination.
pub async fn all_users(pool: &DbPool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at")
        .fetch_all(pool)
        .await?;

    Ok(users)
}

/// Permanently delete a user.
///
/// Deletion is blocked while the user still owns accounts; removing them
/// would orphan balances and their audit history.
///
/// # Errors
///
/// - `NotFound`: user doesn't exist
/// - `Conflict`: user still owns accounts
pub async fn delete_user(pool: &DbPool, user_id: Uuid) -> Result<(), AppError> {
    let owns_accounts: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE user_id = $1)")
            .bind(user_id)
            .fetch_one(pool)
            .await?;

    if owns_accounts {
        return Err(AppError::Conflict("User still owns accounts"));
    }

    let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::NotFound("User not found"));
    }

    tracing::info!(%user_id, "user deleted");
    Ok(())
}

/// Trim and lowercase an email for lookups and storage.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
        assert_eq!(normalize_email("plain@example.com"), "plain@example.com");
        assert_eq!(normalize_email("   "), "");
    }
}
