//! Order feeds over line-oriented input.
//!
//! [`LineDecoder`] owns the per-feed state (arrival clock, line counter)
//! and turns raw lines into [`Record`]s. [`OrderReader`] drives it over
//! any `BufRead`; async callers can drive it over their own line source.

use std::io::{BufRead, Lines};

use matching_core::{ArrivalClock, MatchingEngine, Order};

use crate::error::FeedError;
use crate::text_codec::parse_order_line;

/// A line that ends the feed without being an error.
pub const EXIT_SENTINEL: &str = "EXIT";

/// One decoded input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Order(Order),
    /// The [`EXIT_SENTINEL`] line.
    End,
}

/// Stateful line decoder for one feed.
#[derive(Debug, Default)]
pub struct LineDecoder {
    clock: ArrivalClock,
    line: usize,
}

impl LineDecoder {
    pub fn new() -> Self {
        LineDecoder::default()
    }

    /// Decode the next line of the feed.
    ///
    /// Every successfully decoded order gets the next arrival stamp.
    pub fn decode(&mut self, raw: &str) -> Result<Record, FeedError> {
        self.line += 1;

        if raw.trim() == EXIT_SENTINEL {
            return Ok(Record::End);
        }

        let order = parse_order_line(raw, self.clock.last() + 1)
            .map_err(|source| FeedError::Record {
                line: self.line,
                source,
            })?;
        self.clock.next();

        Ok(Record::Order(order))
    }

    /// Number of lines decoded so far.
    pub fn lines_seen(&self) -> usize {
        self.line
    }
}

/// Iterator of orders read from a `BufRead`.
///
/// Stops at end of input or at the exit sentinel. After the first error
/// it yields `None` forever.
pub struct OrderReader<R> {
    lines: Lines<R>,
    decoder: LineDecoder,
    done: bool,
}

impl<R: BufRead> OrderReader<R> {
    pub fn new(input: R) -> Self {
        OrderReader {
            lines: input.lines(),
            decoder: LineDecoder::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for OrderReader<R> {
    type Item = Result<Order, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let decoded = match self.lines.next()? {
            Ok(line) => self.decoder.decode(&line),
            Err(e) => Err(FeedError::Io(e)),
        };

        match decoded {
            Ok(Record::Order(order)) => Some(Ok(order)),
            Ok(Record::End) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Feed every order from `input` into `engine`, in order.
///
/// Stops at the first malformed record or I/O error; orders before it
/// stay applied. Returns the number of orders submitted.
pub fn run<R: BufRead>(engine: &mut MatchingEngine, input: R) -> Result<usize, FeedError> {
    let mut submitted = 0;
    for order in OrderReader::new(input) {
        engine.submit(order?);
        submitted += 1;
    }
    Ok(submitted)
}
