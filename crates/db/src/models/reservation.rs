//! Reservation entity model and DTOs.

use dinebook_core::types::{DbId, Money, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reservations` table.
///
/// Serialized with `user` and `table` as bare ids.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
    #[serde(rename = "table")]
    pub table_id: DbId,
    /// Normalized (billed) seat count.
    pub number_of_seats: i32,
    pub cost: Money,
    pub booked_at: Timestamp,
    /// `false` once cancelled.
    pub active: bool,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}

/// DTO for persisting a freshly allocated reservation.
///
/// Built by the API from an allocation result, never deserialized from a
/// client payload.
#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub user_id: DbId,
    pub table_id: DbId,
    pub number_of_seats: i32,
    pub cost: Money,
}

/// DTO for replacing the allocation of an existing reservation.
#[derive(Debug, Clone)]
pub struct Reallocation {
    pub table_id: DbId,
    pub number_of_seats: i32,
    pub cost: Money,
}
