//! Side (Buy / Sell) for orders and fills.

use std::fmt;

/// Order side: Buy or Sell.
///
/// The derived ordering (`Buy < Sell`) is the one the trade report uses
/// when two merged fills belong to the same trader.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Input-format code: `'B'` / `'S'`.
    pub fn as_char(self) -> char {
        match self {
            Side::Buy => 'B',
            Side::Sell => 'S',
        }
    }

    /// Try to parse from a char (`'B'` / `'S'`, case-sensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(Side::Buy),
            'S' => Some(Side::Sell),
            _ => None,
        }
    }

    /// Sign used in the trade report: `+` for buys, `-` for sells.
    pub fn sign(self) -> char {
        match self {
            Side::Buy => '+',
            Side::Sell => '-',
        }
    }

    /// The side an aggressor on `self` trades against.
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Returns `true` if `a` is a strictly better price than `b` for a
    /// resting order on this side (higher for bids, lower for asks).
    pub fn is_better_price(self, a: u64, b: u64) -> bool {
        match self {
            Side::Buy => a > b,
            Side::Sell => a < b,
        }
    }

    /// Crossing test for an aggressor on this side against the best
    /// resting price on the opposite side.
    pub fn crosses(self, aggressor_price: u64, resting_price: u64) -> bool {
        match self {
            Side::Buy => aggressor_price >= resting_price,
            Side::Sell => aggressor_price <= resting_price,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("Buy"),
            Side::Sell => f.write_str("Sell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_codes_round_trip() {
        assert_eq!(Side::from_char('B'), Some(Side::Buy));
        assert_eq!(Side::from_char('S'), Some(Side::Sell));
        assert_eq!(Side::from_char('b'), None);
        assert_eq!(Side::Sell.as_char(), 'S');
    }

    #[test]
    fn buy_sorts_before_sell() {
        assert!(Side::Buy < Side::Sell);
    }

    #[test]
    fn crossing_includes_equal_prices() {
        assert!(Side::Buy.crosses(50, 50));
        assert!(Side::Sell.crosses(50, 50));
        assert!(!Side::Buy.crosses(49, 50));
        assert!(!Side::Sell.crosses(51, 50));
    }

    #[test]
    fn better_price_depends_on_side() {
        assert!(Side::Buy.is_better_price(31, 30));
        assert!(Side::Sell.is_better_price(29, 30));
        assert!(!Side::Buy.is_better_price(30, 30));
    }
}
