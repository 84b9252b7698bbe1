//! Architectural constants for the R5900 division pipelines.

/// Issue-to-result latency of DIV/DIVU and DIV1/DIVU1 in CPU cycles.
///
/// The R5900 completes an integer division 37 cycles after issue; a
/// dependent MFLO/MFHI issued earlier interlocks for the difference.
pub const DIV_LATENCY: u64 = 37;

/// Number of physical division pipes per core.
///
/// Pipe 0 serves DIV/DIVU (results in LO/HI), pipe 1 serves DIV1/DIVU1
/// (results in LO1/HI1).
pub const PIPE_COUNT: usize = 2;
