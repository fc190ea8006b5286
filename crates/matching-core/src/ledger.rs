//! Append-only trade ledger and the text report rendered from it.
//!
//! Report format: one line per match event, in ledger order. Each line is
//! the event's merged fills joined by a single space and terminated by
//! `\n`. Events never contain zero fills, so there are no blank lines.

use crate::trade::MatchEvent;

#[derive(Debug, Default, Clone)]
pub struct TradeLedger {
    events: Vec<MatchEvent>,
}

impl TradeLedger {
    pub fn new() -> Self {
        TradeLedger::default()
    }

    /// Append one event. Empty events are dropped.
    pub fn record(&mut self, event: MatchEvent) {
        if event.is_empty() {
            return;
        }
        self.events.push(event);
    }

    /// Recorded events in aggressor-arrival order.
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&MatchEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Render the full report.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out
    }
}
