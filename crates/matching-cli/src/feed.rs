//! Order feed: reads input lines, decodes them, and forwards stamped
//! orders to the engine task.
//!
//! The feed is fail-fast: the first malformed record stops it and no
//! later line is read. Orders already forwarded stay applied.

use matching_protocol::{LineDecoder, Record};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::types::{EngineRequest, EngineTx};

/// Forward every order from `input` to the engine.
///
/// Returns the number of orders forwarded. Dropping `engine_tx` on return
/// is what lets the engine task finish.
pub async fn feed_orders<R>(input: R, engine_tx: EngineTx) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut decoder = LineDecoder::new();
    let mut forwarded = 0;

    while let Some(line) = lines.next_line().await? {
        let order = match decoder.decode(&line) {
            Ok(Record::Order(order)) => order,
            Ok(Record::End) => {
                debug!(line = decoder.lines_seen(), "exit sentinel, ending feed");
                break;
            }
            Err(e) => {
                warn!(line = decoder.lines_seen(), "rejecting input: {}", e);
                return Err(e.into());
            }
        };

        let req = EngineRequest {
            line: decoder.lines_seen(),
            order,
        };
        if engine_tx.send(req).await.is_err() {
            anyhow::bail!("engine task stopped before the feed finished");
        }
        forwarded += 1;
    }

    Ok(forwarded)
}
