//! # Log Sink
//!
//! The order service does not write to the console or pick a logging
//! backend itself; it emits records through an injected sink with a single
//! operation. Production callers hand it [`TracingSink`]; tests hand it a
//! capturing double and assert on the records.

use tracing::info;

/// Destination for the service's log records.
pub trait LogSink {
    /// Records one log message.
    fn record(&self, message: &str);
}

/// Sink backed by the `tracing` crate.
///
/// Emits each record as an `info` event. Installing a subscriber (stdout,
/// file, whatever) is the embedding shell's decision, not this crate's.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, message: &str) {
        info!("{message}");
    }
}
