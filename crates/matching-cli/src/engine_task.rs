//! Central engine loop.
//!
//! This task owns the `MatchingEngine` and is the only writer of the
//! books and the ledger. Orders arrive over a bounded channel in feed
//! order and each one is matched to completion before the next is
//! received. When every sender is dropped the loop ends and hands the
//! engine back through its `JoinHandle`.

use matching_core::MatchingEngine;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::types::{EngineRequest, EngineRx, EngineTx};

/// Spawn the engine task with a channel of the given capacity.
pub fn spawn_engine(capacity: usize) -> (EngineTx, JoinHandle<MatchingEngine>) {
    let (engine_tx, engine_rx) = mpsc::channel(capacity.max(1));
    let handle = tokio::spawn(run_engine_loop(engine_rx));
    (engine_tx, handle)
}

/// Run the engine processing loop until the channel closes.
pub async fn run_engine_loop(mut engine_rx: EngineRx) -> MatchingEngine {
    let mut engine = MatchingEngine::new();

    while let Some(req) = engine_rx.recv().await {
        let EngineRequest { line, order } = req;

        debug!(
            line,
            trader = %order.trader,
            side = %order.side,
            quantity = order.quantity,
            price = order.price,
            "submitting order"
        );

        if let Some(event) = engine.submit(order) {
            debug!(line, fills = event.fills.len(), "match event: {}", event);
        }
    }

    info!(
        events = engine.ledger().len(),
        resting = engine.book().len(),
        "engine loop shutting down (engine_rx closed)"
    );

    engine
}
