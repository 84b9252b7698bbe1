//! Core-level division pipeline components.
//!
//! This module contains the per-core pipe set and the execution units it
//! routes between. The dispatch loop of the embedding emulator talks to
//! [`DivPipes`]; each physical pipe is an independent [`units::div::DivUnit`].

/// The per-core pair of division pipes and instruction routing.
pub mod pipes;

/// Execution units (division pipelines).
pub mod units;

pub use self::pipes::{DivPipes, Pipe};
