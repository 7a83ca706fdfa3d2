//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response types the API exchanges with clients.

/// Bank account model
pub mod account;
/// Transaction audit record model
pub mod transaction;
/// Registered user model
pub mod user;
