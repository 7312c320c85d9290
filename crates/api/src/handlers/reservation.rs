//! Handlers for the `/reservations` resource.
//!
//! Booking runs the allocation pipeline: parse the raw seat value, normalize
//! it, fetch the eligible inventory, pick and price a table, then persist.
//! Listing, lookup, update and delete only ever see the caller's own
//! reservations. Cancellation looks reservations up globally so a stranger
//! gets an ownership error rather than a 404.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dinebook_core::allocation::{allocate, Allocation};
use dinebook_core::error::{BookingError, CoreError};
use dinebook_core::reservations::{ensure_active, ensure_can_cancel, CANCELLED_MESSAGE};
use dinebook_core::seating::{normalize_seats, parse_seat_count};
use dinebook_core::types::{DbId, Money};
use dinebook_db::models::reservation::{CreateReservation, Reallocation, Reservation};
use dinebook_db::models::table::Table;
use dinebook_db::repositories::{ReservationRepo, TableRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /reservations` and `PUT /reservations/{id}`.
///
/// The seat count is taken as raw JSON so that non-integers are reported as
/// an invalid seat count instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct SeatRequest {
    #[serde(default)]
    pub number_of_seats: serde_json::Value,
}

/// Response for a newly booked reservation.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: DbId,
    /// Normalized (billed) seat count.
    pub number_of_seats: i32,
    pub cost: Money,
    pub table: Table,
}

/// Response for a successful cancellation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn reservation_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Reservation",
        id,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run the seat request through normalization and allocation.
///
/// Returns the normalized seat count, the cost and an owned copy of the
/// chosen table.
async fn plan_allocation(
    state: &AppState,
    request: &SeatRequest,
) -> AppResult<(i32, Money, Table)> {
    let requested = parse_seat_count(&request.number_of_seats)?;
    let seats = normalize_seats(requested)?;

    let inventory = TableRepo::list_with_capacity_at_least(&state.pool, seats).await?;
    let Allocation {
        normalized_seats,
        table,
        cost,
    } = allocate(seats, &inventory)?;

    tracing::debug!(
        requested,
        normalized_seats,
        table_id = table.id,
        candidates = inventory.len(),
        %cost,
        "Allocated table"
    );

    Ok((normalized_seats, cost, table.clone()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/reservations
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SeatRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    let (number_of_seats, cost, table) = plan_allocation(&state, &input).await?;

    let reservation = ReservationRepo::create(
        &state.pool,
        &CreateReservation {
            user_id: auth.user_id,
            table_id: table.id,
            number_of_seats,
            cost,
        },
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        reservation_id = reservation.id,
        table_id = table.id,
        number_of_seats,
        cost = %reservation.cost,
        "Reservation booked"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            id: reservation.id,
            number_of_seats: reservation.number_of_seats,
            cost: reservation.cost,
            table,
        }),
    ))
}

/// GET /api/v1/reservations
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = ReservationRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(reservations))
}

/// GET /api/v1/reservations/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = ReservationRepo::find_by_id_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| reservation_not_found(id))?;
    Ok(Json(reservation))
}

/// PUT /api/v1/reservations/{id}
///
/// Change the party size. The reservation is re-allocated from scratch, so
/// its table and cost may change.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SeatRequest>,
) -> AppResult<Json<Reservation>> {
    let current = ReservationRepo::find_by_id_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| reservation_not_found(id))?;
    ensure_active(current.active)?;

    let (number_of_seats, cost, table) = plan_allocation(&state, &input).await?;

    // A concurrent cancel between the check and the write leaves no row to update.
    let updated = ReservationRepo::reallocate(
        &state.pool,
        id,
        auth.user_id,
        &Reallocation {
            table_id: table.id,
            number_of_seats,
            cost,
        },
    )
    .await?
    .ok_or(AppError::Booking(BookingError::AlreadyCancelled))?;

    tracing::info!(
        user_id = auth.user_id,
        reservation_id = id,
        table_id = table.id,
        number_of_seats,
        "Reservation updated"
    );

    Ok(Json(updated))
}

/// DELETE /api/v1/reservations/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ReservationRepo::delete_for_user(&state.pool, id, auth.user_id).await? {
        tracing::info!(user_id = auth.user_id, reservation_id = id, "Reservation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(reservation_not_found(id))
    }
}

/// POST /api/v1/reservations/{id}/cancel
///
/// Only the owner may cancel, and only once.
pub async fn cancel(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let reservation = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| reservation_not_found(id))?;

    ensure_can_cancel(reservation.user_id, auth.user_id, reservation.active)?;

    if !ReservationRepo::cancel(&state.pool, id).await? {
        // Lost a race with another cancel of the same reservation.
        return Err(AppError::Booking(BookingError::AlreadyCancelled));
    }

    tracing::info!(user_id = auth.user_id, reservation_id = id, "Reservation cancelled");

    Ok(Json(MessageResponse {
        message: CANCELLED_MESSAGE,
    }))
}
