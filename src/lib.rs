//! Bank Ledger - a minimal banking ledger over HTTP.
//!
//! Users own accounts, accounts hold balances, and transactions (deposit,
//! withdraw, transfer) mutate balances while producing an immutable audit
//! trail.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Format**: JSON requests/responses
//!
//! The library exposes the module tree and the [`app`] router factory so
//! that integration tests can drive the service against their own pool.

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod password;
pub mod services;

use axum::{
    Router,
    routing::{delete, get, post},
};
use db::DbPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router over a database pool.
///
/// # Routes
///
/// | Method | Path | Purpose |
/// |---|---|---|
/// | POST | /api/v1/users/register | Register a user |
/// | POST | /api/v1/users/login | Authenticate |
/// | GET | /api/v1/users | List users |
/// | DELETE | /api/v1/users/{id} | Delete a user |
/// | POST | /api/v1/accounts | Create an account |
/// | GET | /api/v1/accounts/{id} | Get an account |
/// | GET | /api/v1/accounts/user/{user_id} | List a user's accounts |
/// | POST | /api/v1/transactions/deposit | Deposit |
/// | POST | /api/v1/transactions/withdraw | Withdraw |
/// | POST | /api/v1/transactions/transfer | Transfer |
/// | GET | /api/v1/transactions/account/{account_id} | Audit trail |
/// | GET | /health | Liveness + DB connectivity |
pub fn app(pool: DbPool) -> Router {
    Router::new()
        // User routes
        .route("/api/v1/users/register", post(handlers::users::register))
        .route("/api/v1/users/login", post(handlers::users::login))
        .route("/api/v1/users", get(handlers::users::list_users))
        .route("/api/v1/users/{id}", delete(handlers::users::delete_user))
        // Account routes
        .route("/api/v1/accounts", post(handlers::accounts::create_account))
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::accounts::get_account),
        )
        .route(
            "/api/v1/accounts/user/{user_id}",
            get(handlers::accounts::list_accounts_for_user),
        )
        // Transaction routes
        .route(
            "/api/v1/transactions/deposit",
            post(handlers::transactions::deposit),
        )
        .route(
            "/api/v1/transactions/withdraw",
            post(handlers::transactions::withdraw),
        )
        .route(
            "/api/v1/transactions/transfer",
            post(handlers::transactions::transfer),
        )
        .route(
            "/api/v1/transactions/account/{account_id}",
            get(handlers::transactions::list_for_account),
        )
        // Public liveness probe
        .route("/health", get(handlers::health::health_check))
        // The frontend is served from another origin
        .layer(CorsLayer::permissive())
        // Request tracing for observability
        .layer(TraceLayer::new_for_http())
        // Share database pool with all handlers via State extraction
        .with_state(pool)
}
