/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Tenant (hotel) identifier. Every storeroom, item, and log row is scoped to one.
pub type HotelId = i64;
