//! matching-protocol
//!
//! Order ingestion for the trade matcher.
//!
//! - [`text_codec`] : the `<trader> <B|S> <quantity> <price>` line format
//! - [`reader`]     : stateful line decoding, `BufRead` feeds, the sync driver
//! - [`error`]      : ingestion / feed errors

pub mod error;
pub mod text_codec;
pub mod reader;

pub use error::{FeedError, IngestError};
pub use text_codec::{format_order_line, parse_order_line};
pub use reader::{run, LineDecoder, OrderReader, Record, EXIT_SENTINEL};
