//! Request handlers.
//!
//! Handlers take the caller's tenant from [`crate::middleware::auth::AuthUser`],
//! delegate to repositories or services, and map errors via
//! [`crate::error::AppError`].

pub mod audit_logs;
pub mod auth;
pub mod luggage;
pub mod storerooms;
pub mod uploads;
