//! Order representation shared by ingestion and the resting books.
//!
//! An order carries:
//! - `trader`, `side`
//! - `price` in integer ticks
//! - `quantity` still open (decremented as it fills)
//! - `arrival` sequence number for time priority
//!
//! The arrival stamp is a strictly increasing sequence number rather than
//! a wall-clock timestamp, so two records ingested within the same clock
//! tick still get distinct, ordered priorities.

use crate::side::Side;

/// A single order, either incoming (aggressor) or resting in a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Trader identifier. Not required to be unique across orders.
    pub trader: String,

    pub side: Side,

    /// Open quantity. Only ever decreases.
    pub quantity: u64,

    /// Limit price in integer ticks.
    pub price: u64,

    /// Arrival sequence number assigned at ingestion.
    pub arrival: u64,
}

impl Order {
    /// Construct an order with its full requested quantity.
    pub fn new(trader: impl Into<String>, side: Side, quantity: u64, price: u64, arrival: u64) -> Self {
        Order {
            trader: trader.into(),
            side,
            quantity,
            price,
            arrival,
        }
    }

    /// Returns `true` if the order has no open quantity left.
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Fill the order by up to `qty` units.
    ///
    /// Returns the quantity that was actually filled (which will be
    /// `<= qty` and `<= quantity`).
    pub fn fill(&mut self, qty: u64) -> u64 {
        let filled = qty.min(self.quantity);
        self.quantity -= filled;
        filled
    }
}

/// Hands out arrival sequence numbers.
///
/// Stamps start at 1 and are strictly increasing for the lifetime of the
/// clock. One clock must feed one engine.
#[derive(Debug, Default)]
pub struct ArrivalClock {
    last: u64,
}

impl ArrivalClock {
    pub fn new() -> Self {
        ArrivalClock::default()
    }

    /// Next arrival stamp.
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// The most recently issued stamp (0 if none yet).
    pub fn last(&self) -> u64 {
        self.last
    }
}
