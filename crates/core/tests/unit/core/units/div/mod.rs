//! Division pipeline tests.

/// Deterministic edge-case vectors for the numeric core.
pub mod arithmetic;
