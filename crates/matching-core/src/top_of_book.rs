//! Helper types for representing top-of-book state.

/// Aggregated open quantity resting at one price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLevel {
    pub price: u64,
    pub quantity: u64,
}

/// A simple snapshot of the best bid and best ask.
///
/// Price `0` is a valid limit here, so an absent side is `None` rather
/// than a zero sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopOfBookSnapshot {
    /// Best bid level, if any bids rest.
    pub bid: Option<PriceLevel>,

    /// Best ask level, if any asks rest.
    pub ask: Option<PriceLevel>,
}

impl TopOfBookSnapshot {
    pub fn new(bid: Option<PriceLevel>, ask: Option<PriceLevel>) -> Self {
        TopOfBookSnapshot { bid, ask }
    }

    /// Best ask minus best bid, when both sides are present.
    pub fn spread(&self) -> Option<i128> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some(ask.price as i128 - bid.price as i128),
            _ => None,
        }
    }

    /// A resting bid at or above a resting ask. Never true between
    /// submissions: any crossing quantity is matched away first.
    pub fn is_crossed(&self) -> bool {
        matches!(self.spread(), Some(s) if s <= 0)
    }
}
