//! Table allocation and pricing.
//!
//! Given a normalized seat count and a snapshot of the table inventory,
//! [`allocate`] picks the cheapest table that is large enough (smallest
//! capacity wins among equally priced tables) and prices the party at that
//! table with [`calculate_cost`].
//!
//! Allocation never reserves capacity: a table is a price tier, and any
//! number of reservations may point at the same one.

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::BookingError;
use crate::types::Money;

/// Fractional digits kept on a computed cost.
pub const COST_DECIMAL_PLACES: u32 = 2;

/// Anything that can be allocated to a party: a fixed seat capacity and a
/// flat price for the whole table.
pub trait PricedTable {
    fn capacity(&self) -> i32;
    fn base_price(&self) -> Money;
}

/// Outcome of a successful allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation<'a, T> {
    /// Seats reserved and billed.
    pub normalized_seats: i32,
    /// The chosen table, borrowed from the inventory snapshot.
    pub table: &'a T,
    /// Price for `normalized_seats` at `table`, rounded to cents.
    pub cost: Money,
}

/// Cheapest-then-smallest ordering used to rank eligible tables.
fn by_price_then_capacity<T: PricedTable>(a: &&T, b: &&T) -> Ordering {
    a.base_price()
        .cmp(&b.base_price())
        .then_with(|| a.capacity().cmp(&b.capacity()))
}

/// Select a table for `normalized_seats` from `inventory` and price it.
///
/// Tables with `capacity < normalized_seats` are ignored. Among the rest the
/// lowest `base_price` wins, then the lowest capacity; remaining ties keep
/// inventory order. Fails with [`BookingError::NoAvailableTable`] when
/// nothing is large enough.
pub fn allocate<T: PricedTable>(
    normalized_seats: i64,
    inventory: &[T],
) -> Result<Allocation<'_, T>, BookingError> {
    let no_table = BookingError::NoAvailableTable {
        seats: normalized_seats,
    };

    let table = inventory
        .iter()
        .filter(|t| t.capacity() > 0 && i64::from(t.capacity()) >= normalized_seats)
        .min_by(|a, b| by_price_then_capacity(a, b))
        .ok_or_else(|| no_table.clone())?;

    // Bounded by the chosen table's capacity, so this always fits.
    let seats = i32::try_from(normalized_seats).map_err(|_| no_table)?;
    let cost = calculate_cost(table.capacity(), table.base_price(), seats);

    Ok(Allocation {
        normalized_seats: seats,
        table,
        cost,
    })
}

/// Price `seats` at a table of `capacity` seats costing `base_price`.
///
/// The per-seat price is `base_price / capacity`. A party that fills the
/// table exactly pays for one seat less. The result is rounded half-to-even
/// to [`COST_DECIMAL_PLACES`]. A non-positive capacity prices at zero.
pub fn calculate_cost(capacity: i32, base_price: Money, seats: i32) -> Money {
    let raw = match base_price.checked_div(Decimal::from(capacity)) {
        Some(seat_price) => {
            let billed_seats = if seats == capacity { capacity - 1 } else { seats };
            Decimal::from(billed_seats) * seat_price
        }
        None => Decimal::ZERO,
    };

    let mut cost =
        raw.round_dp_with_strategy(COST_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    cost.rescale(COST_DECIMAL_PLACES);
    cost
}
