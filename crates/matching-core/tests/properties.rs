// crates/matching-core/tests/properties.rs
//
// Property-based checks of the matching invariants over random order flow.

use matching_core::{MatchingEngine, Order, Side};
use proptest::prelude::*;

fn order_strategy() -> impl Strategy<Value = (u8, bool, u64, u64)> {
    (0u8..4, any::<bool>(), 1u64..20, 1u64..20)
}

fn build_orders(raw: &[(u8, bool, u64, u64)]) -> Vec<Order> {
    raw.iter()
        .enumerate()
        .map(|(i, &(trader, is_buy, qty, price))| {
            let side = if is_buy { Side::Buy } else { Side::Sell };
            Order::new(format!("T{}", trader), side, qty, price, i as u64 + 1)
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_books_never_cross_and_never_hold_empty_orders(
        raw in prop::collection::vec(order_strategy(), 1..60),
    ) {
        let mut engine = MatchingEngine::new();

        for order in build_orders(&raw) {
            engine.submit(order);

            prop_assert!(!engine.top_of_book().is_crossed());
            for side in [Side::Buy, Side::Sell] {
                for resting in engine.book().side(side).iter() {
                    prop_assert_eq!(resting.side, side);
                    prop_assert!(resting.quantity > 0);
                }
            }
        }
    }

    #[test]
    fn prop_fills_come_in_matching_pairs_at_a_crossing_price(
        raw in prop::collection::vec(order_strategy(), 1..60),
    ) {
        let mut engine = MatchingEngine::new();

        for order in build_orders(&raw) {
            let limit = order.price;
            let side = order.side;

            let Some(event) = engine.submit(order) else { continue };

            prop_assert_eq!(event.fills.len() % 2, 0);
            prop_assert_eq!(event.quantity_on(Side::Buy), event.quantity_on(Side::Sell));

            for pair in event.fills.chunks(2) {
                let (aggressor, resting) = (&pair[0], &pair[1]);
                prop_assert_eq!(aggressor.side, side);
                prop_assert_eq!(resting.side, side.opposite());
                prop_assert_eq!(aggressor.quantity, resting.quantity);
                prop_assert_eq!(aggressor.price, resting.price);
                prop_assert!(aggressor.quantity > 0);
                prop_assert!(side.crosses(limit, aggressor.price));
            }
        }
    }

    #[test]
    fn prop_quantity_is_conserved(
        raw in prop::collection::vec(order_strategy(), 1..60),
    ) {
        let orders = build_orders(&raw);
        let submitted: u64 = orders.iter().map(|o| o.quantity).sum();

        let mut engine = MatchingEngine::new();
        for order in orders {
            engine.submit(order);
        }

        let resting = engine.book().bids().total_quantity() + engine.book().asks().total_quantity();
        let filled: u64 = engine
            .ledger()
            .events()
            .iter()
            .flat_map(|e| e.fills.iter())
            .map(|f| f.quantity)
            .sum();

        prop_assert_eq!(submitted, resting + filled);
    }

    #[test]
    fn prop_report_has_one_line_per_event(
        raw in prop::collection::vec(order_strategy(), 1..60),
    ) {
        let mut engine = MatchingEngine::new();
        for order in build_orders(&raw) {
            engine.submit(order);
        }

        let report = engine.report();
        prop_assert_eq!(report.lines().count(), engine.ledger().len());
        prop_assert!(report.is_empty() || report.ends_with('\n'));
        prop_assert_eq!(report, engine.report());
    }
}

#[test]
fn earliest_same_price_order_fills_first_on_partial_sweep() {
    let mut engine = MatchingEngine::new();
    for (i, trader) in ["A", "B", "C"].iter().enumerate() {
        engine.submit(Order::new(*trader, Side::Sell, 2, 15, i as u64 + 1));
    }
    engine.submit(Order::new("X", Side::Buy, 3, 20, 4));

    assert_eq!(engine.report(), "A-2@15 B-1@15 X+3@15\n");

    let left: Vec<(&str, u64)> = engine
        .book()
        .asks()
        .iter()
        .map(|o| (o.trader.as_str(), o.quantity))
        .collect();
    assert_eq!(left, [("B", 1), ("C", 2)]);
}
