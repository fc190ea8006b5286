//! matching-core
//!
//! Pure trade matching logic for a single instrument:
//! - side and order representation
//! - resting books ordered by price/time priority
//! - the matching engine (continuous double auction)
//! - the trade ledger and its merged text report
//!
//! No I/O and no async here; ingestion lives in `matching-protocol`.

pub mod side;
pub mod order;
pub mod order_book;
pub mod top_of_book;
pub mod trade;
pub mod ledger;
pub mod matching_engine;

pub use side::Side;
pub use order::{ArrivalClock, Order};
pub use order_book::{BookSide, OrderBook};
pub use top_of_book::{PriceLevel, TopOfBookSnapshot};
pub use trade::{Fill, MatchEvent};
pub use ledger::TradeLedger;
pub use matching_engine::MatchingEngine;
