//! Repository for the `reservations` table.

use dinebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservation::{CreateReservation, Reallocation, Reservation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, table_id, number_of_seats, cost, active, booked_at, updated_at";

/// Provides CRUD operations for reservations.
///
/// Listing and per-user lookups are scoped to the owning user; only
/// [`ReservationRepo::find_by_id`] looks across all users.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new active reservation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (user_id, table_id, number_of_seats, cost)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.user_id)
            .bind(input.table_id)
            .bind(input.number_of_seats)
            .bind(input.cost)
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by ID regardless of owner.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a reservation by ID, only if it belongs to `user_id`.
    pub async fn find_by_id_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's reservations, most recently booked first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE user_id = $1
             ORDER BY booked_at DESC, id DESC"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the table, seat count and cost of an active reservation.
    ///
    /// Returns `None` if the reservation does not exist, is not owned by
    /// `user_id`, or has been cancelled in the meantime.
    pub async fn reallocate(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &Reallocation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET
                table_id = $3,
                number_of_seats = $4,
                cost = $5
             WHERE id = $1 AND user_id = $2 AND active = true
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.table_id)
            .bind(input.number_of_seats)
            .bind(input.cost)
            .fetch_optional(pool)
            .await
    }

    /// Mark an active reservation as cancelled. Returns `true` if the row flipped.
    pub async fn cancel(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE reservations SET active = false WHERE id = $1 AND active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a reservation owned by `user_id`. Returns `true` if a row was removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
