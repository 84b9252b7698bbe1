//! Division statistics collection.
//!
//! This module tracks behavioral counters for the division pipelines. It
//! provides:
//! 1. **Issue mix:** Signed and unsigned divisions issued.
//! 2. **Hardware quirks:** Divide-by-zero issues and overwritten in-flight
//!    divisions.
//! 3. **Interlock cost:** Cycles spent stalled in early collects.

/// Behavioral counters for one division pipeline.
///
/// All fields are plain counters; the embedding emulator decides how to
/// report them. Counters are simulation state, not architectural state:
/// a pipeline [`reset`](crate::DivUnit::reset) leaves them untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DivStats {
    /// Signed divisions issued (DIV/DIV1).
    pub issued_signed: u64,
    /// Unsigned divisions issued (DIVU/DIVU1).
    pub issued_unsigned: u64,
    /// Divisions issued with a zero divisor.
    pub divide_by_zero: u64,
    /// In-flight divisions discarded by a new issue.
    pub overwrites: u64,
    /// Cycles consumed by collects issued before the latency elapsed.
    pub stall_cycles: u64,
}

impl DivStats {
    /// Creates a zeroed statistics block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total divisions issued on this pipe.
    pub fn issued(&self) -> u64 {
        self.issued_signed + self.issued_unsigned
    }

    /// Adds another pipe's counters into this block.
    ///
    /// Used to present a per-core view across both pipes.
    pub fn accumulate(&mut self, other: &Self) {
        self.issued_signed += other.issued_signed;
        self.issued_unsigned += other.issued_unsigned;
        self.divide_by_zero += other.divide_by_zero;
        self.overwrites += other.overwrites;
        self.stall_cycles += other.stall_cycles;
    }

    /// Clears all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
