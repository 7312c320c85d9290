//! Integration tests for the reservation repository.
//!
//! Covers owner scoping, cancellation idempotency and reallocation.

use dinebook_db::models::reservation::{CreateReservation, Reallocation};
use dinebook_db::models::table::{CreateTable, Table};
use dinebook_db::models::user::{CreateUser, User};
use dinebook_db::repositories::{ReservationRepo, TableRepo, UserRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

async fn seed_table(pool: &PgPool, table_number: i32, total_seats: i32, price: i64) -> Table {
    TableRepo::create(
        pool,
        &CreateTable {
            table_number,
            total_seats,
            price: Some(Decimal::from(price)),
        },
    )
    .await
    .expect("table creation should succeed")
}

fn booking(user_id: i64, table_id: i64, seats: i32, cost: &str) -> CreateReservation {
    CreateReservation {
        user_id,
        table_id,
        number_of_seats: seats,
        cost: cost.parse().unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_is_active_and_keeps_cents(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let table = seed_table(&pool, 1, 6, 80).await;

    let reservation = ReservationRepo::create(&pool, &booking(user.id, table.id, 4, "53.33"))
        .await
        .unwrap();

    assert!(reservation.active);
    assert_eq!(reservation.user_id, user.id);
    assert_eq!(reservation.table_id, table.id);
    assert_eq!(reservation.number_of_seats, 4);
    assert_eq!(reservation.cost.to_string(), "53.33");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookups_and_listing_are_scoped_to_owner(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let table = seed_table(&pool, 1, 4, 100).await;

    let mine = ReservationRepo::create(&pool, &booking(alice.id, table.id, 4, "75"))
        .await
        .unwrap();
    ReservationRepo::create(&pool, &booking(alice.id, table.id, 4, "75"))
        .await
        .unwrap();
    ReservationRepo::create(&pool, &booking(bob.id, table.id, 4, "75"))
        .await
        .unwrap();

    let alice_list = ReservationRepo::list_for_user(&pool, alice.id).await.unwrap();
    assert_eq!(alice_list.len(), 2);
    assert!(alice_list.iter().all(|r| r.user_id == alice.id));

    assert!(ReservationRepo::find_by_id_for_user(&pool, mine.id, alice.id)
        .await
        .unwrap()
        .is_some());
    assert!(ReservationRepo::find_by_id_for_user(&pool, mine.id, bob.id)
        .await
        .unwrap()
        .is_none());
    assert!(ReservationRepo::find_by_id(&pool, mine.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cancel_flips_once(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let table = seed_table(&pool, 1, 4, 100).await;
    let reservation = ReservationRepo::create(&pool, &booking(user.id, table.id, 4, "75"))
        .await
        .unwrap();

    assert!(ReservationRepo::cancel(&pool, reservation.id).await.unwrap());
    assert!(!ReservationRepo::cancel(&pool, reservation.id).await.unwrap());

    let stored = ReservationRepo::find_by_id(&pool, reservation.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reallocate_only_touches_active_owned_rows(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let small = seed_table(&pool, 1, 4, 100).await;
    let large = seed_table(&pool, 2, 6, 150).await;
    let reservation = ReservationRepo::create(&pool, &booking(alice.id, small.id, 4, "75"))
        .await
        .unwrap();

    let change = Reallocation {
        table_id: large.id,
        number_of_seats: 6,
        cost: "125.00".parse().unwrap(),
    };

    let by_stranger = ReservationRepo::reallocate(&pool, reservation.id, bob.id, &change)
        .await
        .unwrap();
    assert!(by_stranger.is_none());

    let updated = ReservationRepo::reallocate(&pool, reservation.id, alice.id, &change)
        .await
        .unwrap()
        .expect("owner can reallocate an active reservation");
    assert_eq!(updated.table_id, large.id);
    assert_eq!(updated.number_of_seats, 6);
    assert_eq!(updated.cost.to_string(), "125.00");

    ReservationRepo::cancel(&pool, reservation.id).await.unwrap();
    let after_cancel = ReservationRepo::reallocate(&pool, reservation.id, alice.id, &change)
        .await
        .unwrap();
    assert!(after_cancel.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_requires_owner(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let table = seed_table(&pool, 1, 4, 100).await;
    let reservation = ReservationRepo::create(&pool, &booking(alice.id, table.id, 4, "75"))
        .await
        .unwrap();

    assert!(!ReservationRepo::delete_for_user(&pool, reservation.id, bob.id)
        .await
        .unwrap());
    assert!(ReservationRepo::delete_for_user(&pool, reservation.id, alice.id)
        .await
        .unwrap());
}
