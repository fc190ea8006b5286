//! `trade-matcher`: read orders, print the merged trade report.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use matching_cli::Config;

#[derive(Parser)]
#[clap(name = "trade-matcher")]
#[clap(about = "Price/time priority order matcher producing a merged trade report")]
struct Cli {
    /// Order file, one `<trader> <B|S> <quantity> <price>` per line (default: stdin)
    input: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// After the report, write the remaining resting orders to stderr
    #[clap(long)]
    dump_book: bool,

    /// Capacity of the feed → engine channel
    #[clap(long)]
    channel_capacity: Option<usize>,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::from_env()?;
    config.input = cli.input;
    config.output = cli.output;
    config.dump_book |= cli.dump_book;
    if let Some(capacity) = cli.channel_capacity {
        anyhow::ensure!(capacity > 0, "--channel-capacity must be greater than zero");
        config.channel_capacity = capacity;
    }

    matching_cli::run(&config).await
}
