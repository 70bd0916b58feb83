//! Domain logic for the Bellhop luggage-storage backend.
//!
//! This crate has no I/O. Anything that touches the database lives in
//! `bellhop-db`; anything HTTP-shaped lives in `bellhop-api`.

pub mod error;
pub mod intake;
pub mod luggage;
pub mod occupancy;
pub mod pagination;
pub mod retrieval_code;
pub mod roles;
pub mod types;
pub mod upload;
