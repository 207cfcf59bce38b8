//! Record sink contract
//!
//! Region analysis and auto-pick produce points but never own storage; they
//! hand each point to a [`RecordSink`]. A sink may refuse a point (a full
//! store, for instance). Refusals never abort the producer, they are
//! counted in a [`SinkReport`].

use crate::error::RecordResult;
use tracing::warn;

/// Consumer of sampled points.
pub trait RecordSink {
    /// Accept one point with its display and native colors.
    fn record(&mut self, x: i32, y: i32, display: String, native: u32) -> RecordResult<()>;
}

impl<T: RecordSink + ?Sized> RecordSink for &mut T {
    fn record(&mut self, x: i32, y: i32, display: String, native: u32) -> RecordResult<()> {
        (**self).record(x, y, display, native)
    }
}

impl RecordSink for Vec<(i32, i32, String, u32)> {
    fn record(&mut self, x: i32, y: i32, display: String, native: u32) -> RecordResult<()> {
        self.push((x, y, display, native));
        Ok(())
    }
}

/// Outcome of emitting a batch of points to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinkReport {
    /// Points offered to the sink
    pub emitted: usize,
    /// Points the sink refused
    pub rejected: usize,
}

impl SinkReport {
    /// Points the sink accepted.
    #[inline]
    pub fn recorded(&self) -> usize {
        self.emitted - self.rejected
    }

    /// Offer one point to `sink` and account for the outcome.
    pub fn offer<S: RecordSink + ?Sized>(
        &mut self,
        sink: &mut S,
        x: i32,
        y: i32,
        display: String,
        native: u32,
    ) {
        self.emitted += 1;
        if let Err(e) = sink.record(x, y, display, native) {
            self.rejected += 1;
            warn!(x, y, error = %e, "sink rejected point");
        }
    }
}
