use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Booking-domain failures.
///
/// Every variant is a deterministic function of the caller's input, so none
/// of them is ever retried. The display string is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// Requested seats below the minimum, or not an integer at all.
    #[error("Number of seats must be at least {minimum}.")]
    InvalidSeatCount { minimum: i64 },

    /// No table in the inventory is large enough for the normalized request.
    #[error("No available table for {seats} seats.")]
    NoAvailableTable { seats: i64 },

    #[error("Total seats must be between {min} and {max}.")]
    TableCapacityOutOfRange { min: i32, max: i32 },

    #[error("Cannot create more than {max} tables.")]
    TableLimitReached { max: i64 },

    #[error("You can only cancel your own reservations.")]
    OwnershipViolation,

    #[error("This reservation is already cancelled.")]
    AlreadyCancelled,
}

impl BookingError {
    /// Stable machine-readable code reported alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::InvalidSeatCount { .. } => "INVALID_SEAT_COUNT",
            BookingError::NoAvailableTable { .. } => "NO_AVAILABLE_TABLE",
            BookingError::TableCapacityOutOfRange { .. } => "TABLE_CAPACITY_OUT_OF_RANGE",
            BookingError::TableLimitReached { .. } => "TABLE_LIMIT_REACHED",
            BookingError::OwnershipViolation => "OWNERSHIP_VIOLATION",
            BookingError::AlreadyCancelled => "ALREADY_CANCELLED",
        }
    }
}
