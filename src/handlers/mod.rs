//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that receives request data (JSON
//! body, URL params), delegates to a service, and returns a JSON response.

/// Account endpoints
pub mod accounts;
/// Service health endpoint
pub mod health;
/// Transaction endpoints
pub mod transactions;
/// User endpoints
pub mod users;
