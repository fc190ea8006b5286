//! matching-cli
//!
//! Command-line front end for the trade matcher: a feed task decodes
//! input lines and a single engine task owns all matching state.

pub mod app;
pub mod config;
pub mod engine_task;
pub mod feed;
pub mod types;

pub use app::{process, run, write_book, write_report};
pub use config::Config;
