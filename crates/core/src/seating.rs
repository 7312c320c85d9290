//! Seat count parsing and normalization.
//!
//! A raw party size from a reservation request is turned into the seat count
//! that is actually reserved and billed: at least [`MIN_RESERVATION_SEATS`],
//! and always even (odd counts round up to fill a seat pairing). There is no
//! upper bound here; an oversized request simply finds no table later on.
//!
//! Counts are carried as `i64` so that absurdly large parties still reach
//! allocation and fail there.

use std::num::IntErrorKind;

use serde_json::Value;

use crate::error::BookingError;

/// Smallest party that can book a table.
pub const MIN_RESERVATION_SEATS: i64 = 4;

fn invalid() -> BookingError {
    BookingError::InvalidSeatCount {
        minimum: MIN_RESERVATION_SEATS,
    }
}

/// Normalize a requested seat count into an allocatable one.
///
/// Fails with [`BookingError::InvalidSeatCount`] below the minimum. Odd
/// counts are rounded up by one; even counts pass through unchanged. The one
/// count that cannot be rounded up (`i64::MAX`) fails with
/// [`BookingError::NoAvailableTable`], as no table could seat it.
pub fn normalize_seats(requested: i64) -> Result<i64, BookingError> {
    if requested < MIN_RESERVATION_SEATS {
        return Err(invalid());
    }
    if requested % 2 == 1 {
        requested
            .checked_add(1)
            .ok_or(BookingError::NoAvailableTable { seats: requested })
    } else {
        Ok(requested)
    }
}

/// Extract a seat count from a JSON request value.
///
/// Accepts an integer number or a string holding a base-10 integer
/// (surrounding whitespace allowed). Integers too large for `i64` saturate
/// to `i64::MAX`. Floats, booleans, null and non-numeric strings are
/// rejected as [`BookingError::InvalidSeatCount`].
pub fn parse_seat_count(value: &Value) -> Result<i64, BookingError> {
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(n), _) => Ok(n),
            (None, Some(_)) => Ok(i64::MAX),
            (None, None) => Err(invalid()),
        },
        Value::String(s) => s.trim().parse::<i64>().or_else(|e| match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(invalid()),
        }),
        _ => Err(invalid()),
    }
}
