//! Bounded aggregation into a caller-owned output buffer.

use ptx_core::errors::{ErrorInfo, PtxError};

/// Sequential writer over a fixed-capacity, caller-allocated buffer.
///
/// Values land at increasing indices starting from 0. A push past capacity
/// fails with an overflow error instead of writing out of bounds or silently
/// dropping the value; the written prefix and its count stay intact. An
/// unbounded event stream can always produce more matches than any fixed
/// buffer holds, so the capacity check is mandatory on every write.
#[derive(Debug)]
pub struct BoundedAggregator<'buf> {
    buffer: &'buf mut [f64],
    cursor: usize,
}

impl<'buf> BoundedAggregator<'buf> {
    /// Wraps the caller-owned buffer; writing starts at index 0.
    pub fn new(buffer: &'buf mut [f64]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Total capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of values written so far. Monotone, never exceeds capacity.
    pub fn count(&self) -> usize {
        self.cursor
    }

    /// The written prefix of the buffer.
    pub fn written(&self) -> &[f64] {
        &self.buffer[..self.cursor]
    }

    /// Appends one extracted scalar, failing fast at capacity.
    pub fn push(&mut self, value: f64) -> Result<(), PtxError> {
        if self.cursor == self.buffer.len() {
            return Err(PtxError::Overflow(
                ErrorInfo::new(
                    "buffer-full",
                    "more matching particles than the output buffer can hold",
                )
                .with_context("capacity", self.buffer.len().to_string())
                .with_context("written", self.cursor.to_string())
                .with_hint("allocate a larger output buffer or narrow the selection"),
            ));
        }
        self.buffer[self.cursor] = value;
        self.cursor += 1;
        Ok(())
    }
}
