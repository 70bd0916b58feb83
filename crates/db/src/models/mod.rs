//! Row types (`FromRow`) and DTOs for each table.

pub mod audit_log;
pub mod luggage;
pub mod storeroom;
pub mod user;
