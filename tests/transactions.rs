//! Integration tests for the transaction service: balance arithmetic,
//! validation, atomicity of the audit trail.

mod common;

use bank_ledger::{
    error::AppError,
    models::transaction::TransactionType,
    services::{account_service, transaction_service},
};
use common::{account_with_balance, register_user};
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "./migrations")]
async fn deposit_increases_balance_and_records_audit_row(pool: PgPool) {
    let user = register_user(&pool, "depositor@example.com").await;
    let account = account_with_balance(&pool, &user, 0).await;

    let transaction = transaction_service::deposit(&pool, account.id, 5000, None)
        .await
        .expect("deposit");

    assert_eq!(transaction.transaction_type, TransactionType::Deposit);
    assert_eq!(transaction.to_account_id, Some(account.id));
    assert_eq!(transaction.from_account_id, None);
    assert_eq!(transaction.amount_cents, 5000);
    assert_eq!(transaction.description, "Deposit");

    let account = account_service::get_account(&pool, account.id).await.unwrap();
    assert_eq!(account.balance_cents, 5000);

    let trail = transaction_service::transactions_for_account(&pool, account.id)
        .await
        .unwrap();
    assert_eq!(trail.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn deposit_rejects_non_positive_amounts(pool: PgPool) {
    let user = register_user(&pool, "depositor@example.com").await;
    let account = account_with_balance(&pool, &user, 100).await;

    for amount in [0, -1, -5000] {
        let err = transaction_service::deposit(&pool, account.id, amount, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    // Nothing changed and nothing was recorded
    let account = account_service::get_account(&pool, account.id).await.unwrap();
    assert_eq!(account.balance_cents, 100);
    let trail = transaction_service::transactions_for_account(&pool, account.id)
        .await
        .unwrap();
    assert!(trail.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn deposit_into_unknown_account_is_not_found(pool: PgPool) {
    let err = transaction_service::deposit(&pool, Uuid::new_v4(), 100, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound("Account not found")));
}

#[sqlx::test(migrations = "./migrations")]
async fn deposit_keeps_custom_description(pool: PgPool) {
    let user = register_user(&pool, "depositor@example.com").await;
    let account = account_with_balance(&pool, &user, 0).await;

    let transaction =
        transaction_service::deposit(&pool, account.id, 100, Some("Paycheck".to_string()))
            .await
            .unwrap();
    assert_eq!(transaction.description, "Paycheck");
}

#[sqlx::test(migrations = "./migrations")]
async fn withdraw_decreases_balance(pool: PgPool) {
    let user = register_user(&pool, "withdrawer@example.com").await;
    let account = account_with_balance(&pool, &user, 10000).await;

    let transaction = transaction_service::withdraw(&pool, account.id, 2500, None)
        .await
        .expect("withdraw");

    assert_eq!(transaction.transaction_type, TransactionType::Withdraw);
    assert_eq!(transaction.from_account_id, Some(account.id));
    assert_eq!(transaction.to_account_id, None);
    assert_eq!(transaction.description, "Withdrawal");

    let account = account_service::get_account(&pool, account.id).await.unwrap();
    assert_eq!(account.balance_cents, 7500);
}

#[sqlx::test(migrations = "./migrations")]
async fn overdraft_fails_and_leaves_balance_unchanged(pool: PgPool) {
    let user = register_user(&pool, "withdrawer@example.com").await;
    let account = account_with_balance(&pool, &user, 100).await;

    let err = transaction_service::withdraw(&pool, account.id, 150, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::InsufficientBalance("Insufficient balance")
    ));

    let account = account_service::get_account(&pool, account.id).await.unwrap();
    assert_eq!(account.balance_cents, 100);
    let trail = transaction_service::transactions_for_account(&pool, account.id)
        .await
        .unwrap();
    assert!(trail.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn transfer_to_same_account_fails_regardless_of_balance(pool: PgPool) {
    let user = register_user(&pool, "transferer@example.com").await;
    let account = account_with_balance(&pool, &user, 100_000).await;

    let err = transaction_service::transfer(&pool, account.id, account.id, 100, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidRequest(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn transfer_moves_funds_and_conserves_the_sum(pool: PgPool) {
    let user = register_user(&pool, "transferer@example.com").await;
    let from = account_with_balance(&pool, &user, 10000).await;
    let to = account_with_balance(&pool, &user, 500).await;

    let transaction = transaction_service::transfer(&pool, from.id, to.id, 2500, None)
        .await
        .expect("transfer");

    assert_eq!(transaction.transaction_type, TransactionType::Transfer);
    assert_eq!(transaction.from_account_id, Some(from.id));
    assert_eq!(transaction.to_account_id, Some(to.id));
    assert_eq!(transaction.description, "Transfer");

    let from = account_service::get_account(&pool, from.id).await.unwrap();
    let to = account_service::get_account(&pool, to.id).await.unwrap();
    assert_eq!(from.balance_cents, 7500);
    assert_eq!(to.balance_cents, 3000);
    assert_eq!(from.balance_cents + to.balance_cents, 10500);

    // Exactly one transfer row, visible from both sides
    let from_trail = transaction_service::transactions_for_account(&pool, from.id)
        .await
        .unwrap();
    let to_trail = transaction_service::transactions_for_account(&pool, to.id)
        .await
        .unwrap();
    assert_eq!(from_trail.len(), 1);
    assert_eq!(to_trail.len(), 1);
    assert_eq!(from_trail[0].id, to_trail[0].id);
}

#[sqlx::test(migrations = "./migrations")]
async fn transfer_reports_missing_source_before_destination(pool: PgPool) {
    let user = register_user(&pool, "transferer@example.com").await;
    let account = account_with_balance(&pool, &user, 1000).await;

    let err = transaction_service::transfer(&pool, Uuid::new_v4(), account.id, 100, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound("Source account not found")
    ));

    let err = transaction_service::transfer(&pool, account.id, Uuid::new_v4(), 100, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound("Destination account not found")
    ));

    // Both neither-exist: the source error wins
    let err = transaction_service::transfer(&pool, Uuid::new_v4(), Uuid::new_v4(), 100, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound("Source account not found")
    ));
}

#[sqlx::test(migrations = "./migrations")]
async fn transfer_with_insufficient_source_balance_fails(pool: PgPool) {
    let user = register_user(&pool, "transferer@example.com").await;
    let from = account_with_balance(&pool, &user, 100).await;
    let to = account_with_balance(&pool, &user, 0).await;

    let err = transaction_service::transfer(&pool, from.id, to.id, 150, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::InsufficientBalance("Insufficient balance in source account")
    ));

    let from = account_service::get_account(&pool, from.id).await.unwrap();
    let to = account_service::get_account(&pool, to.id).await.unwrap();
    assert_eq!(from.balance_cents, 100);
    assert_eq!(to.balance_cents, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn audit_trail_only_contains_that_accounts_transactions(pool: PgPool) {
    let user = register_user(&pool, "auditor@example.com").await;
    let a = account_with_balance(&pool, &user, 1000).await;
    let b = account_with_balance(&pool, &user, 0).await;
    let c = account_with_balance(&pool, &user, 0).await;

    transaction_service::deposit(&pool, a.id, 100, None).await.unwrap();
    transaction_service::deposit(&pool, b.id, 200, None).await.unwrap();
    transaction_service::transfer(&pool, a.id, b.id, 50, None).await.unwrap();

    let a_trail = transaction_service::transactions_for_account(&pool, a.id)
        .await
        .unwrap();
    assert_eq!(a_trail.len(), 2);
    assert!(a_trail
        .iter()
        .all(|t| t.from_account_id == Some(a.id) || t.to_account_id == Some(a.id)));

    let b_trail = transaction_service::transactions_for_account(&pool, b.id)
        .await
        .unwrap();
    assert_eq!(b_trail.len(), 2);

    let c_trail = transaction_service::transactions_for_account(&pool, c.id)
        .await
        .unwrap();
    assert!(c_trail.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_deposits_lose_no_updates(pool: PgPool) {
    let user = register_user(&pool, "racer@example.com").await;
    let account = account_with_balance(&pool, &user, 0).await;

    // 20 deposits racing on one row; the row lock serializes the
    // read-modify-write, so every cent must land.
    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..20 {
        let pool = pool.clone();
        let account_id = account.id;
        tasks.spawn(async move { transaction_service::deposit(&pool, account_id, 100, None).await });
    }
    while let Some(result) = tasks.join_next().await {
        result.expect("task panicked").expect("deposit");
    }

    let account = account_service::get_account(&pool, account.id).await.unwrap();
    assert_eq!(account.balance_cents, 2000);

    let trail = transaction_service::transactions_for_account(&pool, account.id)
        .await
        .unwrap();
    assert_eq!(trail.len(), 20);
}

#[sqlx::test(migrations = "./migrations")]
async fn opposing_concurrent_transfers_complete_without_deadlock(pool: PgPool) {
    let user = register_user(&pool, "racer@example.com").await;
    let a = account_with_balance(&pool, &user, 10_000).await;
    let b = account_with_balance(&pool, &user, 10_000).await;

    // Five transfers each way, racing. Both rows are locked in id order,
    // so none of these can deadlock; a deadlock would surface here as a
    // database error from the victim.
    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..10 {
        let pool = pool.clone();
        let (from, to) = if i % 2 == 0 { (a.id, b.id) } else { (b.id, a.id) };
        tasks.spawn(async move { transaction_service::transfer(&pool, from, to, 100, None).await });
    }
    while let Some(result) = tasks.join_next().await {
        result.expect("task panicked").expect("transfer");
    }

    // 5 x 100 each way: balances end where they started, sum conserved
    let a = account_service::get_account(&pool, a.id).await.unwrap();
    let b = account_service::get_account(&pool, b.id).await.unwrap();
    assert_eq!(a.balance_cents, 10_000);
    assert_eq!(b.balance_cents, 10_000);

    let a_trail = transaction_service::transactions_for_account(&pool, a.id)
        .await
        .unwrap();
    assert_eq!(a_trail.len(), 10);
}

// The worked example: A=100, withdraw 150 fails, deposit 50 -> 150,
// transfer 100 to empty B -> A=50, B=100.
#[sqlx::test(migrations = "./migrations")]
async fn worked_example(pool: PgPool) {
    let user = register_user(&pool, "example@example.com").await;
    let a = account_with_balance(&pool, &user, 100).await;
    let b = account_with_balance(&pool, &user, 0).await;

    assert!(transaction_service::withdraw(&pool, a.id, 150, None).await.is_err());
    let account = account_service::get_account(&pool, a.id).await.unwrap();
    assert_eq!(account.balance_cents, 100);

    let deposit = transaction_service::deposit(&pool, a.id, 50, None).await.unwrap();
    assert_eq!(deposit.transaction_type, TransactionType::Deposit);
    assert_eq!(deposit.amount_cents, 50);
    assert_eq!(deposit.to_account_id, Some(a.id));
    let account = account_service::get_account(&pool, a.id).await.unwrap();
    assert_eq!(account.balance_cents, 150);

    let transfer = transaction_service::transfer(&pool, a.id, b.id, 100, None).await.unwrap();
    assert_eq!(transfer.transaction_type, TransactionType::Transfer);
    assert_eq!(transfer.amount_cents, 100);
    assert_eq!(transfer.from_account_id, Some(a.id));
    assert_eq!(transfer.to_account_id, Some(b.id));

    let a = account_service::get_account(&pool, a.id).await.unwrap();
    let b = account_service::get_account(&pool, b.id).await.unwrap();
    assert_eq!(a.balance_cents, 50);
    assert_eq!(b.balance_cents, 100);
}
