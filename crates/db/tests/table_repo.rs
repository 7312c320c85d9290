//! Integration tests for the table inventory repository.
//!
//! Exercises the repository layer against a real database:
//! - Create with default price
//! - Allocation inventory ordering and capacity filter
//! - Unique and check constraint violations
//! - Update, count and cascade delete

use dinebook_db::models::reservation::CreateReservation;
use dinebook_db::models::table::{CreateTable, UpdateTable};
use dinebook_db::models::user::CreateUser;
use dinebook_db::repositories::{ReservationRepo, TableRepo, UserRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_table(table_number: i32, total_seats: i32, price: i64) -> CreateTable {
    CreateTable {
        table_number,
        total_seats,
        price: Some(Decimal::from(price)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_defaults_price_to_zero(pool: PgPool) {
    let input = CreateTable {
        table_number: 1,
        total_seats: 6,
        price: None,
    };
    let table = TableRepo::create(&pool, &input).await.unwrap();

    assert_eq!(table.table_number, 1);
    assert_eq!(table.total_seats, 6);
    assert_eq!(table.price, Decimal::ZERO);
    assert_eq!(table.price.to_string(), "0.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inventory_is_filtered_and_ordered_for_allocation(pool: PgPool) {
    TableRepo::create(&pool, &new_table(1, 4, 100)).await.unwrap();
    TableRepo::create(&pool, &new_table(2, 6, 90)).await.unwrap();
    TableRepo::create(&pool, &new_table(3, 6, 80)).await.unwrap();
    TableRepo::create(&pool, &new_table(4, 8, 80)).await.unwrap();
    TableRepo::create(&pool, &new_table(5, 10, 250)).await.unwrap();

    let eligible = TableRepo::list_with_capacity_at_least(&pool, 6).await.unwrap();
    let numbers: Vec<i32> = eligible.iter().map(|t| t.table_number).collect();
    assert_eq!(numbers, vec![3, 4, 2, 5]);

    let none = TableRepo::list_with_capacity_at_least(&pool, 12).await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_by_table_number_and_count_matches(pool: PgPool) {
    TableRepo::create(&pool, &new_table(3, 4, 10)).await.unwrap();
    TableRepo::create(&pool, &new_table(1, 4, 10)).await.unwrap();
    TableRepo::create(&pool, &new_table(2, 4, 10)).await.unwrap();

    let tables = TableRepo::list(&pool).await.unwrap();
    let numbers: Vec<i32> = tables.iter().map(|t| t.table_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(TableRepo::count(&pool).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_table_number_violates_unique_constraint(pool: PgPool) {
    TableRepo::create(&pool, &new_table(1, 4, 100)).await.unwrap();
    let err = TableRepo::create(&pool, &new_table(1, 6, 100))
        .await
        .expect_err("duplicate table_number must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_tables_table_number"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn capacity_outside_range_violates_check_constraint(pool: PgPool) {
    for seats in [3, 11] {
        let result = TableRepo::create(&pool, &new_table(seats, seats, 100)).await;
        assert!(result.is_err(), "capacity {seats} must be rejected");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_given_fields(pool: PgPool) {
    let table = TableRepo::create(&pool, &new_table(1, 4, 100)).await.unwrap();

    let update = UpdateTable {
        price: Some(Decimal::new(12050, 2)),
        ..Default::default()
    };
    let updated = TableRepo::update(&pool, table.id, &update)
        .await
        .unwrap()
        .expect("table should exist");

    assert_eq!(updated.table_number, 1);
    assert_eq!(updated.total_seats, 4);
    assert_eq!(updated.price.to_string(), "120.50");

    let missing = TableRepo::update(&pool, table.id + 1000, &update).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_cascades_to_reservations(pool: PgPool) {
    let table = TableRepo::create(&pool, &new_table(1, 4, 100)).await.unwrap();
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "diner".to_string(),
            email: "diner@test.com".to_string(),
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .unwrap();
    let reservation = ReservationRepo::create(
        &pool,
        &CreateReservation {
            user_id: user.id,
            table_id: table.id,
            number_of_seats: 4,
            cost: Decimal::from(75),
        },
    )
    .await
    .unwrap();

    assert!(TableRepo::delete(&pool, table.id).await.unwrap());
    assert!(!TableRepo::delete(&pool, table.id).await.unwrap());
    assert!(ReservationRepo::find_by_id(&pool, reservation.id)
        .await
        .unwrap()
        .is_none());
}
