//! Top-level wiring: input → feed → engine task → report sink.

use anyhow::Context;
use matching_core::{MatchingEngine, Side};
use matching_protocol::format_order_line;
use tokio::fs::File;
use tokio::io::{self, AsyncBufRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{error, info};

use crate::config::Config;
use crate::engine_task::spawn_engine;
use crate::feed::feed_orders;

/// Run the matcher as configured: read orders, write the report, and
/// optionally dump the resting book to stderr.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    info!(input = %config.input_name(), "starting trade matcher");

    let input: Box<dyn AsyncBufRead + Unpin + Send> = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .await
                .with_context(|| format!("cannot open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut output: Box<dyn AsyncWrite + Unpin + Send> = match &config.output {
        Some(path) => {
            let file = File::create(path)
                .await
                .with_context(|| format!("cannot create output {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    let engine = process(input, &mut output, config.channel_capacity).await?;

    if config.dump_book {
        let mut stderr = io::stderr();
        write_book(&engine, &mut stderr).await?;
    }

    Ok(())
}

/// Match every order from `input` and write the trade report to `output`.
///
/// The report is written even when the feed fails part-way; it then
/// covers the orders accepted before the bad record, and the feed error
/// is returned afterwards.
pub async fn process<R, W>(input: R, output: &mut W, capacity: usize) -> anyhow::Result<MatchingEngine>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (engine_tx, engine_handle) = spawn_engine(capacity);

    let fed = feed_orders(input, engine_tx).await;
    let engine = engine_handle.await.context("engine task failed")?;

    write_report(&engine, output).await?;

    match fed {
        Ok(orders) => {
            info!(
                orders,
                events = engine.ledger().len(),
                resting = engine.book().len(),
                "all orders processed"
            );
            Ok(engine)
        }
        Err(e) => {
            error!(events = engine.ledger().len(), "ingestion stopped: {:#}", e);
            Err(e.context("order ingestion failed"))
        }
    }
}

/// Stream the trade report, one ledger event per line.
pub async fn write_report<W>(engine: &MatchingEngine, sink: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for event in engine.ledger().events() {
        sink.write_all(format!("{}\n", event).as_bytes())
            .await
            .context("cannot write trade report")?;
    }
    sink.flush().await?;
    Ok(())
}

/// Write the resting orders in input format: bids then asks, each in
/// priority order.
pub async fn write_book<W>(engine: &MatchingEngine, sink: &mut W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut text = String::new();
    for side in [Side::Buy, Side::Sell] {
        for order in engine.book().side(side).iter() {
            text.push_str(&format_order_line(order));
            text.push('\n');
        }
    }

    sink.write_all(text.as_bytes()).await?;
    sink.flush().await?;
    Ok(())
}
