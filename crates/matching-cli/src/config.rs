//! Configuration for the trade matcher.
//!
//! Defaults can be overridden via environment variables, and those in
//! turn by command-line flags:
//!
//! - `MATCHER_CHANNEL_CAPACITY` (default: "1024")
//! - `MATCHER_DUMP_BOOK`        (default: "false")

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;

/// Default depth of the feed → engine channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

#[derive(Debug, Clone)]
pub struct Config {
    /// Order input file; `None` reads stdin.
    pub input: Option<PathBuf>,

    /// Report destination; `None` writes stdout.
    pub output: Option<PathBuf>,

    /// Write the remaining resting orders to stderr after the report.
    pub dump_book: bool,

    /// Bounded capacity of the channel into the engine task.
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: None,
            output: None,
            dump_book: false,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let channel_capacity = read_env_or_default("MATCHER_CHANNEL_CAPACITY", DEFAULT_CHANNEL_CAPACITY)?;
        let dump_book = read_env_or_default("MATCHER_DUMP_BOOK", false)?;

        if channel_capacity == 0 {
            anyhow::bail!("MATCHER_CHANNEL_CAPACITY must be greater than zero");
        }

        Ok(Config {
            channel_capacity,
            dump_book,
            ..Config::default()
        })
    }

    /// Short human-readable name of the input source.
    pub fn input_name(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .with_context(|| format!("invalid value {:?} for {}", val, key)),
        Err(_) => Ok(default),
    }
}
