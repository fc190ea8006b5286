//! Line codec for orders.
//!
//! Input format, one order per line, whitespace separated:
//!
//! `<trader> <B|S> <quantity> <price>`
//!
//! - trader: any non-empty token
//! - side: exactly `B` (buy) or `S` (sell)
//! - quantity: positive integer
//! - price: non-negative integer
//!
//! Tokens after the price are ignored.

use matching_core::{Order, Side};

use crate::error::IngestError;

/// Parse one record into an [`Order`] stamped with `arrival`.
pub fn parse_order_line(line: &str, arrival: u64) -> Result<Order, IngestError> {
    let mut tokens = line.split_whitespace();

    let trader = tokens.next().ok_or(IngestError::MalformedTrader)?;

    let side_token = tokens.next().unwrap_or("");
    let side = parse_side(side_token).ok_or_else(|| IngestError::UnknownSide(side_token.to_string()))?;

    let quantity_token = tokens.next().unwrap_or("");
    let quantity = match quantity_token.parse::<u64>() {
        Ok(q) if q > 0 => q,
        _ => return Err(IngestError::InvalidQuantity(quantity_token.to_string())),
    };

    let price_token = tokens.next().unwrap_or("");
    let price = price_token
        .parse::<u64>()
        .map_err(|_| IngestError::InvalidPrice(price_token.to_string()))?;

    Ok(Order::new(trader, side, quantity, price, arrival))
}

/// Render an order back into the input format, e.g. `T1 B 5 30`.
///
/// Uses the order's *open* quantity, so a partially filled resting order
/// prints what is still on the book.
pub fn format_order_line(order: &Order) -> String {
    format!(
        "{} {} {} {}",
        order.trader,
        order.side.as_char(),
        order.quantity,
        order.price
    )
}

fn parse_side(token: &str) -> Option<Side> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Side::from_char(c),
        _ => None,
    }
}
