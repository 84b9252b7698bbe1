//! Integer division pipeline unit.
//!
//! This module implements one physical divide pipe of the R5900. It
//! provides:
//! 1. **Issue/collect protocol:** [`DivUnit::start`] latches operands and
//!    begins a division; [`DivUnit::finish`] collects the quotient and
//!    remainder after the modeled latency.
//! 2. **Timing:** The external dispatch loop drives the clock through
//!    [`DivUnit::step`]; an early collect stalls exactly as the hardware
//!    MFLO/MFHI interlock does.
//! 3. **Overwrite behavior:** Issuing over an in-flight division silently
//!    discards it, matching the hardware.
//!
//! The numeric semantics live in [`arithmetic`].

/// Division numeric semantics (truncating div/rem and the hardware quirks).
pub mod arithmetic;

use tracing::trace;

use crate::config::Config;
use crate::stats::DivStats;

/// One physical division pipe.
///
/// Holds at most one division in flight. The result is computed when the
/// division is issued, as the hardware does, but is only observable
/// through [`DivUnit::finish`]; collecting before the modeled latency has
/// elapsed consumes the outstanding cycles as an interlock stall.
///
/// # Examples
///
/// ```
/// use divsim_core::{Config, DivUnit};
///
/// let mut unit = DivUnit::new(&Config::default());
/// let mut remainder = 0;
///
/// unit.start(-7_i32 as u32, 2, true);
/// unit.step(37); // dispatch loop executes other instructions
/// let quotient = unit.finish(&mut remainder);
///
/// assert_eq!(quotient as i32, -3);
/// assert_eq!(remainder as i32, -1);
/// ```
#[derive(Debug)]
pub struct DivUnit {
    /// Issue-to-result latency in cycles, from the configuration.
    latency: u64,
    /// Emit `tracing` events on issue, stall, and overwrite.
    trace: bool,

    /// True from issue until the result is collected or the unit is reset.
    busy: bool,
    /// Cycles left until the in-flight result is ready.
    cycles_remaining: u64,

    /// Dividend latched at issue; caller-side changes are invisible.
    dividend: u32,
    /// Divisor latched at issue.
    divisor: u32,
    /// Signedness latched at issue.
    signed: bool,

    /// Quotient of the in-flight (or last collected) division.
    quotient: u32,
    /// Remainder of the in-flight (or last collected) division.
    remainder: u32,

    /// Behavioral counters for this pipe.
    pub stats: DivStats,
}

impl DivUnit {
    /// Creates an idle division pipe from the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            latency: config.div_latency,
            trace: config.trace_divides,
            busy: false,
            cycles_remaining: 0,
            dividend: 0,
            divisor: 0,
            signed: false,
            quotient: 0,
            remainder: 0,
            stats: DivStats::new(),
        }
    }

    /// Issues a division.
    ///
    /// Latches the operands, marks the pipe busy, and reloads the latency
    /// counter. No input validation: the divisor may be zero (the
    /// documented deterministic result is produced). Issuing while a
    /// division is in flight silently discards the old one, as the
    /// hardware does; no stale state survives.
    ///
    /// # Arguments
    ///
    /// * `dividend` - Raw 32-bit dividend register value.
    /// * `divisor`  - Raw 32-bit divisor register value.
    /// * `signed`   - True for DIV/DIV1, false for DIVU/DIVU1.
    pub fn start(&mut self, dividend: u32, divisor: u32, signed: bool) {
        if self.busy {
            self.stats.overwrites += 1;
            if self.trace {
                trace!(
                    dividend = self.dividend,
                    divisor = self.divisor,
                    signed = self.signed,
                    "in-flight division overwritten"
                );
            }
        }

        self.dividend = dividend;
        self.divisor = divisor;
        self.signed = signed;
        (self.quotient, self.remainder) = arithmetic::execute(dividend, divisor, signed);

        self.busy = true;
        self.cycles_remaining = self.latency;

        if signed {
            self.stats.issued_signed += 1;
        } else {
            self.stats.issued_unsigned += 1;
        }
        if divisor == 0 {
            self.stats.divide_by_zero += 1;
        }
        if self.trace {
            trace!(dividend, divisor, signed, "division issued");
        }
    }

    /// Advances the pipe by `cycles` CPU cycles.
    ///
    /// Called by the dispatch loop as simulated time passes; the unit
    /// never reads a clock of its own. No effect while idle.
    #[inline]
    pub fn step(&mut self, cycles: u64) {
        self.cycles_remaining = self.cycles_remaining.saturating_sub(cycles);
    }

    /// Collects the result of the in-flight division.
    ///
    /// If the modeled latency has not yet elapsed, the caller is stalled
    /// the way the hardware interlock stalls a dependent MFLO/MFHI: the
    /// outstanding cycles are consumed on the spot and recorded in
    /// [`DivStats::stall_cycles`]. The pipe returns to idle.
    ///
    /// # Arguments
    ///
    /// * `remainder` - Location the remainder is written through.
    ///
    /// # Returns
    ///
    /// The quotient as a raw 32-bit register value.
    ///
    /// # Panics
    ///
    /// Panics if no division has been issued; collecting from an idle
    /// pipe is a contract violation by the dispatch loop.
    pub fn finish(&mut self, remainder: &mut u32) -> u32 {
        assert!(self.busy, "finish called with no division in flight");

        if self.cycles_remaining > 0 {
            self.stats.stall_cycles += self.cycles_remaining;
            if self.trace {
                trace!(
                    stalled = self.cycles_remaining,
                    "early collect, interlock stall"
                );
            }
            self.cycles_remaining = 0;
        }

        self.busy = false;
        *remainder = self.remainder;
        self.quotient
    }

    /// Issues a division and immediately collects its result.
    ///
    /// Convenience form for callers that do not overlap other work with
    /// the division; it stalls for the full latency. Bit-identical to
    /// [`DivUnit::start`] followed by [`DivUnit::finish`].
    ///
    /// # Arguments
    ///
    /// * `dividend`  - Raw 32-bit dividend register value.
    /// * `divisor`   - Raw 32-bit divisor register value.
    /// * `signed`    - True for DIV/DIV1, false for DIVU/DIVU1.
    /// * `remainder` - Location the remainder is written through.
    ///
    /// # Returns
    ///
    /// The quotient as a raw 32-bit register value.
    pub fn divide(&mut self, dividend: u32, divisor: u32, signed: bool, remainder: &mut u32) -> u32 {
        self.start(dividend, divisor, signed);
        self.finish(remainder)
    }

    /// Returns the pipe to its power-on state.
    ///
    /// Idle, zeroed result registers. Statistics are simulation state and
    /// are left untouched; clear them separately via
    /// [`DivStats::reset`] if desired.
    pub fn reset(&mut self) {
        self.busy = false;
        self.cycles_remaining = 0;
        self.dividend = 0;
        self.divisor = 0;
        self.signed = false;
        self.quotient = 0;
        self.remainder = 0;
    }

    /// True while a division is in flight.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Cycles left until the in-flight result is ready (0 when idle).
    #[inline]
    pub fn cycles_remaining(&self) -> u64 {
        self.cycles_remaining
    }
}
