//! Shared types between the feed and the engine task.

use matching_core::Order;
use tokio::sync::mpsc;

/// One stamped order on its way into the engine task.
#[derive(Debug)]
pub struct EngineRequest {
    /// 1-based input line the order was read from.
    pub line: usize,
    pub order: Order,
}

/// Channel from the feed → engine task.
pub type EngineTx = mpsc::Sender<EngineRequest>;
pub type EngineRx = mpsc::Receiver<EngineRequest>;
