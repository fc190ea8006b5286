// crates/matching-core/tests/matching_scenarios.rs
use std::io::Cursor;

use matching_core::MatchingEngine;
use matching_protocol::run;

fn report_for(input: &str) -> String {
    let mut engine = MatchingEngine::new();
    run(&mut engine, Cursor::new(input)).expect("scenario input is well formed");
    engine.report()
}

#[test]
fn full_input_matches_reference_report() {
    const INPUT: &str = include_str!("data/acceptance_orders.txt");
    const EXPECTED: &str = include_str!("data/acceptance_report.txt");

    let mut engine = MatchingEngine::new();
    let submitted = run(&mut engine, Cursor::new(INPUT)).unwrap();

    assert_eq!(submitted, 12);
    assert_eq!(engine.ledger().len(), 4);
    assert_eq!(engine.report(), EXPECTED);
}

#[test]
fn full_input_leaves_expected_resting_book() {
    const INPUT: &str = include_str!("data/acceptance_orders.txt");

    let mut engine = MatchingEngine::new();
    run(&mut engine, Cursor::new(INPUT)).unwrap();

    let bids: Vec<(&str, u64, u64)> = engine
        .book()
        .bids()
        .iter()
        .map(|o| (o.trader.as_str(), o.quantity, o.price))
        .collect();
    let asks: Vec<(&str, u64, u64)> = engine
        .book()
        .asks()
        .iter()
        .map(|o| (o.trader.as_str(), o.quantity, o.price))
        .collect();

    assert_eq!(bids, [("T3", 1, 40), ("T1", 5, 30)]);
    assert_eq!(asks, [("T2", 4, 70), ("T6", 20, 80)]);
}

#[test]
fn report_is_idempotent() {
    const INPUT: &str = include_str!("data/acceptance_orders.txt");

    let mut engine = MatchingEngine::new();
    run(&mut engine, Cursor::new(INPUT)).unwrap();

    assert_eq!(engine.report(), engine.report());
}

#[test]
fn equal_price_sell() {
    assert_eq!(report_for("T1 B 1 50\nT2 S 1 50\n"), "T1+1@50 T2-1@50\n");
}

#[test]
fn equal_price_buy() {
    assert_eq!(report_for("T1 S 1 50\nT2 B 1 50\n"), "T1-1@50 T2+1@50\n");
}

#[test]
fn better_price_sell_trades_at_resting_price() {
    assert_eq!(report_for("T1 B 1 50\nT2 S 1 10\n"), "T1+1@50 T2-1@50\n");
}

#[test]
fn better_price_buy_trades_at_resting_price() {
    assert_eq!(report_for("T1 S 1 10\nT2 B 1 50\n"), "T1-1@10 T2+1@10\n");
}

#[test]
fn worse_price_sell_does_not_trade() {
    assert_eq!(report_for("T1 B 1 10\nT2 S 1 50\n"), "");
}

#[test]
fn worse_price_buy_does_not_trade() {
    assert_eq!(report_for("T1 S 1 50\nT2 B 1 10\n"), "");
}

#[test]
fn best_price_first_sell() {
    assert_eq!(
        report_for("T1 B 1 20\nT2 B 1 30\nT3 S 1 10\n"),
        "T2+1@30 T3-1@30\n"
    );
}

#[test]
fn best_price_first_buy() {
    assert_eq!(
        report_for("T1 S 1 20\nT2 S 1 10\nT3 B 1 30\n"),
        "T2-1@10 T3+1@10\n"
    );
}

#[test]
fn oldest_first_sell() {
    assert_eq!(
        report_for("T1 B 1 30\nT2 B 1 30\nT3 S 1 10\n"),
        "T1+1@30 T3-1@30\n"
    );
}

#[test]
fn oldest_first_buy() {
    assert_eq!(
        report_for("T1 S 1 10\nT2 S 1 10\nT3 B 1 30\n"),
        "T1-1@10 T3+1@10\n"
    );
}

#[test]
fn multiple_trades_sell_are_merged_per_trader() {
    assert_eq!(
        report_for("T1 B 1 30\nT1 B 1 30\nT2 B 1 30\nT3 S 3 10\n"),
        "T1+2@30 T2+1@30 T3-3@30\n"
    );
}

#[test]
fn multiple_trades_buy_are_merged_per_trader() {
    assert_eq!(
        report_for("T1 S 1 10\nT1 S 1 10\nT2 S 1 10\nT3 B 3 30\n"),
        "T1-2@10 T2-1@10 T3+3@10\n"
    );
}

#[test]
fn same_trader_can_trade_with_itself() {
    assert_eq!(report_for("T1 B 2 10\nT1 S 2 10\n"), "T1+2@10 T1-2@10\n");
}
