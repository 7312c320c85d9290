//! Table inventory rules.
//!
//! Precondition checks applied by the HTTP layer before a table is created
//! or updated. The allocation engine only reads tables; it never enforces
//! any of these itself.

use rust_decimal::Decimal;

use crate::error::{BookingError, CoreError};
use crate::types::Money;

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Smallest table the restaurant sets.
pub const MIN_TABLE_SEATS: i32 = 4;

/// Largest table the restaurant sets.
pub const MAX_TABLE_SEATS: i32 = 10;

/// Maximum number of tables in the inventory.
pub const MAX_TABLES: i64 = 10;

/// Fractional digits a price may carry; matches the `NUMERIC(10,2)` column.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Exclusive upper bound on a table price (eight integer digits).
pub const PRICE_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate that a table capacity lies within `[MIN_TABLE_SEATS, MAX_TABLE_SEATS]`.
pub fn validate_capacity(total_seats: i32) -> Result<(), BookingError> {
    if (MIN_TABLE_SEATS..=MAX_TABLE_SEATS).contains(&total_seats) {
        Ok(())
    } else {
        Err(BookingError::TableCapacityOutOfRange {
            min: MIN_TABLE_SEATS,
            max: MAX_TABLE_SEATS,
        })
    }
}

/// Validate that a table number is a positive integer.
pub fn validate_table_number(table_number: i32) -> Result<(), CoreError> {
    if table_number < 1 {
        return Err(CoreError::Validation(format!(
            "Table number must be a positive integer (got {table_number})"
        )));
    }
    Ok(())
}

/// Validate that a table price is non-negative, below [`PRICE_LIMIT`] and
/// has at most [`PRICE_DECIMAL_PLACES`] fractional digits.
pub fn validate_price(price: Money) -> Result<(), CoreError> {
    if price < Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "Price must not be negative (got {price})"
        )));
    }
    if price >= PRICE_LIMIT {
        return Err(CoreError::Validation(format!(
            "Price must be less than {PRICE_LIMIT} (got {price})"
        )));
    }
    if price.normalize().scale() > PRICE_DECIMAL_PLACES {
        return Err(CoreError::Validation(format!(
            "Price must have at most {PRICE_DECIMAL_PLACES} decimal places (got {price})"
        )));
    }
    Ok(())
}

/// Reject a new table once the inventory already holds [`MAX_TABLES`].
pub fn ensure_table_slot_available(existing_tables: i64) -> Result<(), BookingError> {
    if existing_tables >= MAX_TABLES {
        return Err(BookingError::TableLimitReached { max: MAX_TABLES });
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
