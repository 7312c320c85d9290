//! Restaurant table entity model and DTOs.

use dinebook_core::allocation::PricedTable;
use dinebook_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tables` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Table {
    pub id: DbId,
    pub table_number: i32,
    /// Seat capacity, always within `4..=10`.
    pub total_seats: i32,
    /// Flat price for the whole table.
    pub price: Money,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PricedTable for Table {
    fn capacity(&self) -> i32 {
        self.total_seats
    }

    fn base_price(&self) -> Money {
        self.price
    }
}

/// DTO for creating a new table.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTable {
    pub table_number: i32,
    pub total_seats: i32,
    /// Defaults to `0.00` if omitted.
    pub price: Option<Money>,
}

/// DTO for updating an existing table. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTable {
    pub table_number: Option<i32>,
    pub total_seats: Option<i32>,
    pub price: Option<Money>,
}
