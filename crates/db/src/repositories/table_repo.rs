//! Repository for the `tables` table.

use dinebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::table::{CreateTable, Table, UpdateTable};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, table_number, total_seats, price, created_at, updated_at";

/// Provides CRUD operations and the allocation inventory query for tables.
pub struct TableRepo;

impl TableRepo {
    /// Insert a new table, returning the created row.
    ///
    /// If `price` is `None` in the input, defaults to `0.00`.
    pub async fn create(pool: &PgPool, input: &CreateTable) -> Result<Table, sqlx::Error> {
        let query = format!(
            "INSERT INTO tables (table_number, total_seats, price)
             VALUES ($1, $2, COALESCE($3, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Table>(&query)
            .bind(input.table_number)
            .bind(input.total_seats)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Find a table by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Table>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tables WHERE id = $1");
        sqlx::query_as::<_, Table>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tables ordered by table number.
    pub async fn list(pool: &PgPool) -> Result<Vec<Table>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tables ORDER BY table_number ASC");
        sqlx::query_as::<_, Table>(&query).fetch_all(pool).await
    }

    /// Count all tables in the inventory.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tables")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Inventory snapshot for allocation: every table seating at least
    /// `min_seats`, cheapest first, then smallest, then by table number.
    pub async fn list_with_capacity_at_least(
        pool: &PgPool,
        min_seats: i64,
    ) -> Result<Vec<Table>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tables
             WHERE total_seats >= $1
             ORDER BY price ASC, total_seats ASC, table_number ASC"
        );
        sqlx::query_as::<_, Table>(&query)
            .bind(min_seats)
            .fetch_all(pool)
            .await
    }

    /// Update a table. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTable,
    ) -> Result<Option<Table>, sqlx::Error> {
        let query = format!(
            "UPDATE tables SET
                table_number = COALESCE($2, table_number),
                total_seats = COALESCE($3, total_seats),
                price = COALESCE($4, price)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Table>(&query)
            .bind(id)
            .bind(input.table_number)
            .bind(input.total_seats)
            .bind(input.price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a table by ID. Its reservations cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tables WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
