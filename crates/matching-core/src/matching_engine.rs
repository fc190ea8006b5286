//! Single-instrument matching engine.
//!
//! Owns both resting books and the trade ledger. Orders are processed
//! strictly in submission order, each one to completion:
//! - cross the aggressor against the best opposite order while prices
//!   cross and the aggressor has quantity left,
//! - rest any residual quantity in the aggressor's own book,
//! - record the fills of this submission as one [`MatchEvent`].
//!
//! The book ordering guarantees that once the best opposite order fails
//! the crossing test, nothing behind it can pass, so the loop never scans
//! past the head of the book.

use crate::ledger::TradeLedger;
use crate::order::Order;
use crate::order_book::OrderBook;
use crate::top_of_book::TopOfBookSnapshot;
use crate::trade::{Fill, MatchEvent};

#[derive(Debug, Default)]
pub struct MatchingEngine {
    book: OrderBook,
    ledger: TradeLedger,
}

impl MatchingEngine {
    /// Create a new engine with empty books and an empty ledger.
    pub fn new() -> Self {
        MatchingEngine::default()
    }

    /// Process one aggressor order.
    ///
    /// Returns the match event recorded for it, or `None` if the order
    /// rested without trading.
    pub fn submit(&mut self, mut order: Order) -> Option<&MatchEvent> {
        let arrival = order.arrival;
        let fills = self.match_order(&mut order);

        if !order.is_filled() {
            self.book.side_mut(order.side).insert(order);
        }

        if fills.is_empty() {
            return None;
        }

        self.ledger.record(MatchEvent::new(arrival, fills));
        self.ledger.last()
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn ledger(&self) -> &TradeLedger {
        &self.ledger
    }

    pub fn top_of_book(&self) -> TopOfBookSnapshot {
        self.book.top_of_book()
    }

    /// Render the merged trade report for everything submitted so far.
    pub fn report(&self) -> String {
        self.ledger.report()
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Cross `order` against the opposite book.
    ///
    /// Any remaining quantity is left in `order` for the caller to rest.
    fn match_order(&mut self, order: &mut Order) -> Vec<Fill> {
        let mut fills = Vec::new();
        let opposite = self.book.side_mut(order.side.opposite());

        while !order.is_filled() {
            let Some(resting) = opposite.best_mut() else {
                break;
            };

            if !order.side.crosses(order.price, resting.price) {
                break;
            }

            let quantity = order.quantity.min(resting.quantity);
            let price = resting.price;

            order.fill(quantity);
            resting.fill(quantity);

            fills.push(Fill::new(order.trader.as_str(), order.side, quantity, price));
            fills.push(Fill::new(resting.trader.as_str(), resting.side, quantity, price));

            if resting.is_filled() {
                opposite.pop_best();
            }
        }

        fills
    }
}
