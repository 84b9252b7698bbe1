//! Per-core division pipe set.
//!
//! The R5900 carries two independent integer dividers: DIV/DIVU execute on
//! pipe 0 and deposit their result in LO/HI, while DIV1/DIVU1 execute on
//! pipe 1 and deposit theirs in LO1/HI1. This module provides:
//! 1. **Routing:** [`DivPipes`] addresses the two [`DivUnit`]s by [`Pipe`];
//!    the dispatch loop picks the pipe from the decoded instruction.
//! 2. **Shared clock:** [`DivPipes::step`] advances both pipes together.
//! 3. **Aggregation:** A merged per-core statistics view.
//!
//! The pipes share no state; every semantic lives in [`DivUnit`].

use crate::common::constants::PIPE_COUNT;
use crate::config::Config;
use crate::core::units::div::DivUnit;
use crate::stats::DivStats;

/// Selects which physical divide pipe an instruction is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipe {
    /// Pipe 0: DIV/DIVU, results collected into LO/HI.
    P0,
    /// Pipe 1: DIV1/DIVU1, results collected into LO1/HI1.
    P1,
}

impl Pipe {
    /// Index of this pipe in the per-core unit array.
    const fn index(self) -> usize {
        match self {
            Self::P0 => 0,
            Self::P1 => 1,
        }
    }
}

/// The per-core pair of division pipelines.
///
/// Pure routing over two independent [`DivUnit`]s; a division in flight on
/// one pipe never affects the other.
#[derive(Debug)]
pub struct DivPipes {
    units: [DivUnit; PIPE_COUNT],
}

impl DivPipes {
    /// Creates both pipes, idle, from the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            units: [DivUnit::new(config), DivUnit::new(config)],
        }
    }

    /// Issues a division on the selected pipe.
    ///
    /// See [`DivUnit::start`] for the issue semantics.
    pub fn start(&mut self, pipe: Pipe, dividend: u32, divisor: u32, signed: bool) {
        self.units[pipe.index()].start(dividend, divisor, signed);
    }

    /// Advances both pipes by `cycles` CPU cycles.
    #[inline]
    pub fn step(&mut self, cycles: u64) {
        for unit in &mut self.units {
            unit.step(cycles);
        }
    }

    /// Collects the result from the selected pipe.
    ///
    /// See [`DivUnit::finish`] for the collect and stall semantics.
    ///
    /// # Panics
    ///
    /// Panics if the selected pipe has no division in flight.
    pub fn finish(&mut self, pipe: Pipe, remainder: &mut u32) -> u32 {
        self.units[pipe.index()].finish(remainder)
    }

    /// Issues and immediately collects a division on the selected pipe.
    ///
    /// See [`DivUnit::divide`].
    pub fn divide(
        &mut self,
        pipe: Pipe,
        dividend: u32,
        divisor: u32,
        signed: bool,
        remainder: &mut u32,
    ) -> u32 {
        self.units[pipe.index()].divide(dividend, divisor, signed, remainder)
    }

    /// Returns both pipes to their power-on state.
    pub fn reset(&mut self) {
        for unit in &mut self.units {
            unit.reset();
        }
    }

    /// True while the selected pipe has a division in flight.
    #[inline]
    pub fn is_busy(&self, pipe: Pipe) -> bool {
        self.units[pipe.index()].is_busy()
    }

    /// Cycles left on the selected pipe (0 when idle).
    #[inline]
    pub fn cycles_remaining(&self, pipe: Pipe) -> u64 {
        self.units[pipe.index()].cycles_remaining()
    }

    /// Statistics for the selected pipe.
    pub fn pipe_stats(&self, pipe: Pipe) -> &DivStats {
        &self.units[pipe.index()].stats
    }

    /// Merged statistics across both pipes.
    pub fn stats(&self) -> DivStats {
        let mut merged = self.units[0].stats;
        merged.accumulate(&self.units[1].stats);
        merged
    }
}
