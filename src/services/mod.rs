//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle database transactions, validation, and balance arithmetic.

pub mod account_service;
pub mod transaction_service;
pub mod user_service;
