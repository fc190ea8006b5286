//! Ingestion errors.
//!
//! Every error is fatal to the feed: the reader stops at the first bad
//! record and nothing after it is submitted.

use std::io;

use thiserror::Error;

/// Why a single record could not be turned into an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("cannot parse trader id")]
    MalformedTrader,

    #[error("unknown side code {0:?}, expected \"B\" or \"S\"")]
    UnknownSide(String),

    #[error("invalid quantity {0:?}, expected a positive integer")]
    InvalidQuantity(String),

    #[error("invalid price {0:?}, expected a non-negative integer")]
    InvalidPrice(String),
}

/// Failure of an order feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// A record was malformed. `line` is 1-based.
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: IngestError,
    },

    #[error("failed to read order input")]
    Io(#[from] io::Error),
}

impl FeedError {
    /// The ingestion error behind a malformed record, if that is what
    /// stopped the feed.
    pub fn ingest_error(&self) -> Option<&IngestError> {
        match self {
            FeedError::Record { source, .. } => Some(source),
            FeedError::Io(_) => None,
        }
    }
}
