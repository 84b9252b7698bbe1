//! R5900 integer-division pipeline simulator library.
//!
//! This crate implements a cycle-accurate model of the PS2 Emotion Engine's
//! two integer division pipelines with the following:
//! 1. **Core:** The stateful division units (DIV/DIVU on pipe 0, DIV1/DIVU1
//!    on pipe 1) and the per-core pipe set that routes between them.
//! 2. **Semantics:** Exact R5900 numeric behavior, including the
//!    `i32::MIN / -1` case and the deterministic divide-by-zero results.
//! 3. **Timing:** The split issue/collect protocol with externally driven
//!    cycle counting and the interlock stall on an early collect.
//! 4. **Configuration:** Latency and tracing options, deserializable from
//!    JSON.
//! 5. **Statistics:** Issue, overwrite, and stall counters.

/// Common types and constants (latencies, pipe count, error types).
pub mod common;
/// Simulator configuration (defaults and the config structure).
pub mod config;
/// CPU-core level components (pipe set, division units).
pub mod core;
/// Division statistics collection.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Per-core pair of division pipelines; the dispatch-loop-facing surface.
pub use crate::core::DivPipes;
/// Pipe selector for routing divide instructions (DIV vs DIV1 families).
pub use crate::core::Pipe;
/// A single division pipeline unit.
pub use crate::core::units::div::DivUnit;
