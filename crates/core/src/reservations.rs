//! Reservation lifecycle guards.

use crate::error::BookingError;
use crate::types::DbId;

/// Confirmation returned to the client after a successful cancellation.
pub const CANCELLED_MESSAGE: &str = "Reservation cancelled successfully.";

/// Check that `requester_id` may cancel a reservation owned by `owner_id`.
///
/// Ownership is checked before the active flag, so a stranger poking at an
/// already-cancelled reservation still gets an ownership error.
pub fn ensure_can_cancel(
    owner_id: DbId,
    requester_id: DbId,
    active: bool,
) -> Result<(), BookingError> {
    if owner_id != requester_id {
        return Err(BookingError::OwnershipViolation);
    }
    if !active {
        return Err(BookingError::AlreadyCancelled);
    }
    Ok(())
}

/// Check that a reservation can still be modified.
pub fn ensure_active(active: bool) -> Result<(), BookingError> {
    if active {
        Ok(())
    } else {
        Err(BookingError::AlreadyCancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_can_cancel_active_reservation() {
        assert_eq!(ensure_can_cancel(1, 1, true), Ok(()));
    }

    #[test]
    fn non_owner_is_rejected() {
        assert_eq!(
            ensure_can_cancel(1, 2, true),
            Err(BookingError::OwnershipViolation)
        );
        assert_eq!(
            ensure_can_cancel(1, 2, false),
            Err(BookingError::OwnershipViolation)
        );
    }

    #[test]
    fn cancelling_twice_is_rejected() {
        let err = ensure_can_cancel(1, 1, false).unwrap_err();
        assert_eq!(err, BookingError::AlreadyCancelled);
        assert_eq!(err.to_string(), "This reservation is already cancelled.");
    }

    #[test]
    fn inactive_reservations_cannot_change() {
        assert!(ensure_active(true).is_ok());
        assert_eq!(ensure_active(false), Err(BookingError::AlreadyCancelled));
    }
}
