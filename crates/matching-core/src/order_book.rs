//! Resting order books with price-time priority.
//!
//! - One [`BookSide`] per side of the market.
//! - Bids: best = highest price.
//! - Asks: best = lowest price.
//! - Equal prices: earlier arrival first, then trader id.
//!
//! Each side is a `BTreeMap` keyed by an immutable [`PriorityKey`], so the
//! best resting order is always the first entry. The open quantity lives
//! in the value and is mutated in place: it is not part of the key, so a
//! partial fill never reorders the book.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::order::Order;
use crate::side::Side;
use crate::top_of_book::{PriceLevel, TopOfBookSnapshot};

/// Sort key of a resting order.
///
/// All keys inside one [`BookSide`] carry that book's side, which decides
/// the direction of the price comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityKey {
    side: Side,
    price: u64,
    arrival: u64,
    trader: String,
}

impl PriorityKey {
    pub fn of(order: &Order) -> Self {
        PriorityKey {
            side: order.side,
            price: order.price,
            arrival: order.arrival,
            trader: order.trader.clone(),
        }
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        price_priority(self.side, self.price, other.price)
            .then(self.arrival.cmp(&other.arrival))
            .then_with(|| self.trader.cmp(&other.trader))
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `Less` when `a` is the better price for a resting order on `side`.
fn price_priority(side: Side, a: u64, b: u64) -> Ordering {
    if side.is_better_price(a, b) {
        Ordering::Less
    } else if side.is_better_price(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// One side of the book: every resting order for `Buy` or for `Sell`.
#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    orders: BTreeMap<PriorityKey, Order>,
}

impl BookSide {
    pub fn new(side: Side) -> Self {
        BookSide {
            side,
            orders: BTreeMap::new(),
        }
    }

    /// Insert a resting order.
    ///
    /// The order must belong to this side and have open quantity.
    pub fn insert(&mut self, order: Order) {
        debug_assert_eq!(order.side, self.side, "order rests on the wrong side");
        debug_assert!(!order.is_filled(), "filled orders never rest");

        let previous = self.orders.insert(PriorityKey::of(&order), order);
        debug_assert!(previous.is_none(), "duplicate priority key");
    }

    /// Best resting order, if any.
    pub fn best(&self) -> Option<&Order> {
        self.orders.values().next()
    }

    /// Mutable access to the best resting order.
    ///
    /// Only the quantity may be changed through this reference; the
    /// fields that make up the priority key must stay untouched.
    pub fn best_mut(&mut self) -> Option<&mut Order> {
        self.orders.values_mut().next()
    }

    /// Remove and return the best resting order.
    pub fn pop_best(&mut self) -> Option<Order> {
        self.orders.pop_first().map(|(_, order)| order)
    }

    pub fn best_price(&self) -> Option<u64> {
        self.best().map(|o| o.price)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resting orders in priority order (best first).
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Sum of open quantity across the whole side, saturating at
    /// `u64::MAX`.
    pub fn total_quantity(&self) -> u64 {
        self.orders
            .values()
            .fold(0u64, |total, o| total.saturating_add(o.quantity))
    }

    /// Aggregated quantity per price level, best level first, at most
    /// `levels` entries. Level quantities saturate at `u64::MAX`.
    pub fn depth(&self, levels: usize) -> Vec<PriceLevel> {
        let mut out: Vec<PriceLevel> = Vec::new();

        for order in self.orders.values() {
            if let Some(level) = out.last_mut() {
                if level.price == order.price {
                    level.quantity = level.quantity.saturating_add(order.quantity);
                    continue;
                }
            }
            if out.len() == levels {
                break;
            }
            out.push(PriceLevel {
                price: order.price,
                quantity: order.quantity,
            });
        }

        out
    }
}

/// Both resting books for the single instrument.
#[derive(Debug, Clone)]
pub struct OrderBook {
    bids: BookSide,
    asks: BookSide,
}

impl Default for OrderBook {
    fn default() -> Self {
        OrderBook::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        OrderBook {
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
        }
    }

    pub fn bids(&self) -> &BookSide {
        &self.bids
    }

    pub fn asks(&self) -> &BookSide {
        &self.asks
    }

    /// The book holding resting orders of `side`.
    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Number of resting orders on both sides.
    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Best bid and best ask with the total quantity resting at each.
    pub fn top_of_book(&self) -> TopOfBookSnapshot {
        TopOfBookSnapshot::new(
            self.bids.depth(1).into_iter().next(),
            self.asks.depth(1).into_iter().next(),
        )
    }
}
