//! Fills and match events produced by the matching core.
//!
//! - [`Fill`]: one party's share of a single match.
//! - [`MatchEvent`]: every fill produced while resolving one aggressor.

use std::collections::BTreeMap;
use std::fmt;

use crate::side::Side;

/// One side's portion of a match.
///
/// `price` is always the resting order's price: the aggressor trades at
/// the book price, never at its own limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub trader: String,
    pub side: Side,
    pub quantity: u64,
    pub price: u64,
}

impl Fill {
    pub fn new(trader: impl Into<String>, side: Side, quantity: u64, price: u64) -> Self {
        Fill {
            trader: trader.into(),
            side,
            quantity,
            price,
        }
    }
}

/// Report token: `<trader><sign><quantity>@<price>`, e.g. `T1+2@60`.
impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}@{}",
            self.trader,
            self.side.sign(),
            self.quantity,
            self.price
        )
    }
}

/// All fills produced by one `submit` call, in emission order.
///
/// Fills come in pairs: the aggressor's fill followed by the resting
/// order's fill, both for the same quantity and price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    /// Arrival stamp of the aggressor that produced this event.
    pub aggressor_arrival: u64,

    pub fills: Vec<Fill>,
}

impl MatchEvent {
    pub fn new(aggressor_arrival: u64, fills: Vec<Fill>) -> Self {
        MatchEvent {
            aggressor_arrival,
            fills,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    /// Total quantity filled on `side` within this event.
    pub fn quantity_on(&self, side: Side) -> u64 {
        self.fills
            .iter()
            .filter(|f| f.side == side)
            .map(|f| f.quantity)
            .sum()
    }

    /// Fills grouped by `(trader, side, price)` with quantities summed.
    ///
    /// Output order is canonical and independent of emission order:
    /// ascending trader, then `Buy` before `Sell`, then ascending price.
    pub fn merged(&self) -> Vec<Fill> {
        let mut groups: BTreeMap<(&str, Side, u64), u64> = BTreeMap::new();
        for fill in &self.fills {
            *groups
                .entry((fill.trader.as_str(), fill.side, fill.price))
                .or_insert(0) += fill.quantity;
        }

        groups
            .into_iter()
            .map(|((trader, side, price), quantity)| Fill::new(trader, side, quantity, price))
            .collect()
    }
}

/// One report line without the terminating newline.
impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fill) in self.merged().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", fill)?;
        }
        Ok(())
    }
}
