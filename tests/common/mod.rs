//! Shared fixtures for integration tests.
//!
//! Each `#[sqlx::test]` gets its own freshly migrated database, so tests
//! never see each other's users or accounts.

use bank_ledger::{
    db::DbPool,
    models::{account::Account, user::User},
    services::{account_service, user_service},
};

pub async fn register_user(pool: &DbPool, email: &str) -> User {
    user_service::register(pool, "Test User", email, "password123")
        .await
        .expect("register user")
}

pub async fn account_with_balance(pool: &DbPool, user: &User, balance_cents: i64) -> Account {
    account_service::create_account(pool, user.id, Some(balance_cents))
        .await
        .expect("create account")
}
