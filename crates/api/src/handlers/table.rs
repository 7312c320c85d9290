//! Handlers for the `/tables` resource.
//!
//! Any authenticated user may manage the inventory. Capacity, table number
//! and price are validated before touching the database, and creation is
//! refused once the inventory is full.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dinebook_core::error::CoreError;
use dinebook_core::tables::{
    ensure_table_slot_available, validate_capacity, validate_price, validate_table_number,
};
use dinebook_core::types::DbId;
use dinebook_db::models::table::{CreateTable, Table, UpdateTable};
use dinebook_db::repositories::TableRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn table_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Table", id })
}

/// POST /api/v1/tables
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTable>,
) -> AppResult<(StatusCode, Json<Table>)> {
    validate_table_number(input.table_number)?;
    validate_capacity(input.total_seats)?;
    if let Some(price) = input.price {
        validate_price(price)?;
    }

    let existing = TableRepo::count(&state.pool).await?;
    ensure_table_slot_available(existing)?;

    let table = TableRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        table_id = table.id,
        table_number = table.table_number,
        total_seats = table.total_seats,
        price = %table.price,
        "Table created"
    );

    Ok((StatusCode::CREATED, Json(table)))
}

/// GET /api/v1/tables
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Table>>> {
    let tables = TableRepo::list(&state.pool).await?;
    Ok(Json(tables))
}

/// GET /api/v1/tables/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Table>> {
    let table = TableRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| table_not_found(id))?;
    Ok(Json(table))
}

/// PUT /api/v1/tables/{id}
///
/// Partial update; omitted fields keep their current value.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTable>,
) -> AppResult<Json<Table>> {
    if let Some(table_number) = input.table_number {
        validate_table_number(table_number)?;
    }
    if let Some(total_seats) = input.total_seats {
        validate_capacity(total_seats)?;
    }
    if let Some(price) = input.price {
        validate_price(price)?;
    }

    let table = TableRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| table_not_found(id))?;

    tracing::info!(user_id = auth.user_id, table_id = table.id, "Table updated");
    Ok(Json(table))
}

/// DELETE /api/v1/tables/{id}
///
/// Reservations at the table are removed with it.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TableRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = auth.user_id, table_id = id, "Table deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(table_not_found(id))
    }
}
