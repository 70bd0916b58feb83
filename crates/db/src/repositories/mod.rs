//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Methods
//! that must compose inside a caller-owned transaction take
//! `&mut PgConnection`; standalone reads take `&PgPool`.

pub mod audit_log_repo;
pub mod luggage_repo;
pub mod storeroom_repo;
pub mod user_repo;

pub use audit_log_repo::AuditLogRepo;
pub use luggage_repo::LuggageRepo;
pub use storeroom_repo::StoreroomRepo;
pub use user_repo::UserRepo;
