/// Primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Prices and costs. Stored as `NUMERIC(10,2)`.
pub type Money = rust_decimal::Decimal;
